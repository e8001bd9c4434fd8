use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named page of the public site that content blocks attach to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageKey {
    Home,
    Quests,
    Cafe,
    PartyGuide,
    News,
    Reviews,
    Faq,
    About,
    Contacts,
}

impl PageKey {
    /// Navigation order.
    pub const ALL: [PageKey; 9] = [
        PageKey::Home,
        PageKey::Quests,
        PageKey::Cafe,
        PageKey::PartyGuide,
        PageKey::News,
        PageKey::Reviews,
        PageKey::Faq,
        PageKey::About,
        PageKey::Contacts,
    ];

    /// The key as stored in `page_blocks.page_key` and passed in `?pageKey=`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Home => "HOME",
            PageKey::Quests => "QUESTS",
            PageKey::Cafe => "CAFE",
            PageKey::PartyGuide => "PARTY_GUIDE",
            PageKey::News => "NEWS",
            PageKey::Reviews => "REVIEWS",
            PageKey::Faq => "FAQ",
            PageKey::About => "ABOUT",
            PageKey::Contacts => "CONTACTS",
        }
    }

    /// Path segment on the public site; the home page lives at `/`.
    pub fn slug(&self) -> &'static str {
        match self {
            PageKey::Home => "",
            PageKey::Quests => "quests",
            PageKey::Cafe => "cafe",
            PageKey::PartyGuide => "party-guide",
            PageKey::News => "news",
            PageKey::Reviews => "reviews",
            PageKey::Faq => "faq",
            PageKey::About => "about",
            PageKey::Contacts => "contacts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageKey::Home => "Home",
            PageKey::Quests => "Quests",
            PageKey::Cafe => "Cafe",
            PageKey::PartyGuide => "Party guide",
            PageKey::News => "News",
            PageKey::Reviews => "Reviews",
            PageKey::Faq => "FAQ",
            PageKey::About => "About us",
            PageKey::Contacts => "Contacts",
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.slug())
    }

    /// Unknown keys are not an error; callers treat them as pages without content.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.as_str() == key)
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.slug() == slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: i32,
    pub url: String,
    pub alt: String,
}

/// A unit of editable content: title, HTML body and an optional media list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PageBlock {
    pub id: i32,
    pub title: String,
    pub content: String,
    /// Filled from `page_block_media` after the blocks are read.
    #[sqlx(skip)]
    #[serde(default)]
    pub media: Vec<Media>,
}
