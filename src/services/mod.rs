//! Services, wired together by [`AppServices::new`].
//!
//! Each service owns only immutable handles (the store and the token service),
//! so one instance is shared by every worker and request.

pub mod auth;
pub mod content;
pub mod resources;

use std::sync::Arc;

use crate::auth::TokenService;
use crate::error::AppError;
use crate::store::Store;

pub use auth::AuthService;
pub use content::ContentService;
pub use resources::{
    BookingService, NewsService, QuestService, ReviewService, TableService, UserService,
};

/// The composition root's output: every service, built with explicit dependencies.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn Store>,
    pub auth: AuthService,
    pub bookings: BookingService,
    pub quests: QuestService,
    pub users: UserService,
    pub tables: TableService,
    pub news: NewsService,
    pub reviews: ReviewService,
    pub content: ContentService,
    pub tokens: TokenService,
}

impl AppServices {
    pub fn new(store: Arc<dyn Store>, tokens: TokenService) -> Self {
        Self {
            auth: AuthService::new(store.clone(), tokens.clone()),
            bookings: BookingService::new(store.clone()),
            quests: QuestService::new(store.clone()),
            users: UserService::new(store.clone()),
            tables: TableService::new(store.clone()),
            news: NewsService::new(store.clone()),
            reviews: ReviewService::new(store.clone()),
            content: ContentService::new(store.clone()),
            tokens,
            store,
        }
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}
