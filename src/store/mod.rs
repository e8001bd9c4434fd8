//! The persistence collaborator.
//!
//! Services only see the [`Store`] trait: find-unique lookups return `Option`,
//! find-many lookups return the full collection ordered by id. Errors are
//! passed through to the caller unchanged.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Booking, Employee, NewsItem, PageBlock, PageKey, Quest, Review, Table, User};

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<(), AppError>;

    async fn find_employee_by_email(&self, email: &str) -> Result<Option<Employee>, AppError>;

    async fn find_bookings(&self) -> Result<Vec<Booking>, AppError>;

    async fn find_quests(&self) -> Result<Vec<Quest>, AppError>;

    async fn find_quest(&self, id: i32) -> Result<Option<Quest>, AppError>;

    async fn find_users(&self) -> Result<Vec<User>, AppError>;

    async fn find_tables(&self) -> Result<Vec<Table>, AppError>;

    async fn find_news(&self) -> Result<Vec<NewsItem>, AppError>;

    async fn find_reviews(&self) -> Result<Vec<Review>, AppError>;

    /// Blocks of one page in display order, each with its media attached.
    async fn find_page_blocks(&self, page: PageKey) -> Result<Vec<PageBlock>, AppError>;
}
