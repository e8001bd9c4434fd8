use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Corresponds to the `quest_difficulty` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "quest_difficulty", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// A bookable quest room.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Duration in minutes.
    pub duration: i32,
    pub min_players: i32,
    pub max_players: i32,
    pub difficulty: Difficulty,
    /// Price in whole currency units.
    pub price: i32,
    pub is_active: bool,
}
