use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A cafe table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: i32,
    pub number: i32,
    pub capacity: i32,
    pub location: String,
    pub is_active: bool,
}
