//! Read-only list services.
//!
//! Each `find_all` forwards to the store and returns the whole collection;
//! store errors propagate unchanged.

use std::sync::Arc;

use crate::error::AppError;
use crate::models::{Booking, NewsItem, Quest, Review, Table, User};
use crate::store::Store;

#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn Store>,
}

impl BookingService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Booking>, AppError> {
        self.store.find_bookings().await
    }
}

#[derive(Clone)]
pub struct QuestService {
    store: Arc<dyn Store>,
}

impl QuestService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Quest>, AppError> {
        self.store.find_quests().await
    }

    pub async fn find_one(&self, id: i32) -> Result<Quest, AppError> {
        self.store
            .find_quest(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quest not found".into()))
    }

    /// Quests shown on the public site.
    pub async fn find_active(&self) -> Result<Vec<Quest>, AppError> {
        let quests = self.find_all().await?;
        Ok(quests.into_iter().filter(|quest| quest.is_active).collect())
    }
}

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn Store>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.store.find_users().await
    }
}

#[derive(Clone)]
pub struct TableService {
    store: Arc<dyn Store>,
}

impl TableService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Table>, AppError> {
        self.store.find_tables().await
    }
}

#[derive(Clone)]
pub struct NewsService {
    store: Arc<dyn Store>,
}

impl NewsService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<NewsItem>, AppError> {
        self.store.find_news().await
    }

    pub async fn find_published(&self) -> Result<Vec<NewsItem>, AppError> {
        let news = self.find_all().await?;
        Ok(news.into_iter().filter(|item| item.is_published).collect())
    }
}

#[derive(Clone)]
pub struct ReviewService {
    store: Arc<dyn Store>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Review>, AppError> {
        self.store.find_reviews().await
    }

    pub async fn find_approved(&self) -> Result<Vec<Review>, AppError> {
        let reviews = self.find_all().await?;
        Ok(reviews.into_iter().filter(|review| review.is_approved).collect())
    }
}
