use std::sync::Arc;

use crate::error::AppError;
use crate::models::{PageBlock, PageKey};
use crate::store::Store;

/// Loads page blocks by page key.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn Store>,
}

impl ContentService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Blocks for a raw `pageKey` value. Unknown keys have no content; store errors propagate.
    pub async fn fetch(&self, page_key: &str) -> Result<Vec<PageBlock>, AppError> {
        match PageKey::parse(page_key) {
            Some(page) => self.fetch_page(page).await,
            None => {
                log::debug!("No content for unknown page key {:?}", page_key);
                Ok(Vec::new())
            }
        }
    }

    pub async fn fetch_page(&self, page: PageKey) -> Result<Vec<PageBlock>, AppError> {
        self.store.find_page_blocks(page).await
    }

    /// Blocks for rendering a public page. Failures are logged and degrade to no content.
    pub async fn load(&self, page: PageKey) -> Vec<PageBlock> {
        self.fetch_page(page).await.unwrap_or_else(|err| {
            log::error!("Failed to load content for {}: {}", page.as_str(), err);
            Vec::new()
        })
    }
}
