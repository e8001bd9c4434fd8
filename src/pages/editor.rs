//! State of the admin content page.
//!
//! `Idle -> Loading -> {Loaded | Empty | Failed}`, driven only by explicit
//! actions: selecting a page key and pressing "Load blocks".

use std::fmt;

use crate::error::AppError;
use crate::models::{PageBlock, PageKey};
use crate::services::ContentService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(Vec<PageBlock>),
    Empty,
    Failed(String),
}

/// Returned when a load is requested while another one is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadInProgress;

impl fmt::Display for LoadInProgress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "blocks are already loading")
    }
}

#[derive(Debug, Clone)]
pub struct ContentEditor {
    page: PageKey,
    state: LoadState,
}

impl Default for ContentEditor {
    fn default() -> Self {
        Self::new(PageKey::Home)
    }
}

impl ContentEditor {
    pub fn new(page: PageKey) -> Self {
        Self {
            page,
            state: LoadState::Idle,
        }
    }

    pub fn page(&self) -> PageKey {
        self.page
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Switches to another page key and drops loaded blocks. Ignored while loading.
    pub fn select(&mut self, page: PageKey) -> Result<(), LoadInProgress> {
        if self.state == LoadState::Loading {
            return Err(LoadInProgress);
        }
        if page != self.page {
            self.page = page;
            self.state = LoadState::Idle;
        }
        Ok(())
    }

    pub fn begin_load(&mut self) -> Result<PageKey, LoadInProgress> {
        if self.state == LoadState::Loading {
            return Err(LoadInProgress);
        }
        self.state = LoadState::Loading;
        Ok(self.page)
    }

    /// Settles a load started by [`begin_load`](Self::begin_load). Without one it is a no-op.
    pub fn finish_load(&mut self, result: Result<Vec<PageBlock>, AppError>) {
        if self.state != LoadState::Loading {
            return;
        }
        self.state = match result {
            Ok(blocks) if blocks.is_empty() => LoadState::Empty,
            Ok(blocks) => LoadState::Loaded(blocks),
            Err(err) => {
                log::error!("Loading blocks for {} failed: {}", self.page.as_str(), err);
                LoadState::Failed(err.message().to_string())
            }
        };
    }

    pub async fn load(&mut self, content: &ContentService) -> Result<(), LoadInProgress> {
        let page = self.begin_load()?;
        let result = content.fetch_page(page).await;
        self.finish_load(result);
        Ok(())
    }
}
