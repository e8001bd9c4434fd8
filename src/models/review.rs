use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A visitor review, optionally about a specific quest.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub user_name: String,
    /// 1 to 5.
    pub rating: i16,
    pub text: String,
    pub quest_id: Option<i32>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}
