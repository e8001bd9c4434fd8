use async_trait::async_trait;

use super::Store;
use crate::error::AppError;
use crate::models::{Booking, Employee, NewsItem, PageBlock, PageKey, Quest, Review, Table, User};

/// An immutable, in-process [`Store`].
///
/// Filled once at construction and only read afterwards. Used by the test suite
/// and for running the site without a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub employees: Vec<Employee>,
    pub bookings: Vec<Booking>,
    pub quests: Vec<Quest>,
    pub users: Vec<User>,
    pub tables: Vec<Table>,
    pub news: Vec<NewsItem>,
    pub reviews: Vec<Review>,
    pub page_blocks: Vec<(PageKey, PageBlock)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_block(mut self, page: PageKey, block: PageBlock) -> Self {
        self.page_blocks.push((page, block));
        self
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn find_employee_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        Ok(self
            .employees
            .iter()
            .find(|employee| employee.email == email)
            .cloned())
    }

    async fn find_bookings(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.bookings.clone())
    }

    async fn find_quests(&self) -> Result<Vec<Quest>, AppError> {
        Ok(self.quests.clone())
    }

    async fn find_quest(&self, id: i32) -> Result<Option<Quest>, AppError> {
        Ok(self.quests.iter().find(|quest| quest.id == id).cloned())
    }

    async fn find_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.clone())
    }

    async fn find_tables(&self) -> Result<Vec<Table>, AppError> {
        Ok(self.tables.clone())
    }

    async fn find_news(&self) -> Result<Vec<NewsItem>, AppError> {
        Ok(self.news.clone())
    }

    async fn find_reviews(&self) -> Result<Vec<Review>, AppError> {
        Ok(self.reviews.clone())
    }

    async fn find_page_blocks(&self, page: PageKey) -> Result<Vec<PageBlock>, AppError> {
        Ok(self
            .page_blocks
            .iter()
            .filter(|(key, _)| *key == page)
            .map(|(_, block)| block.clone())
            .collect())
    }
}
