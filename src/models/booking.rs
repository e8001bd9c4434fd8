use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// What is being booked. Corresponds to the `booking_type` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "booking_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Quest,
    Cafe,
}

/// Corresponds to the `booking_status` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingType {
    pub fn label(&self) -> &'static str {
        match self {
            BookingType::Quest => "Quest",
            BookingType::Cafe => "Cafe",
        }
    }
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
        }
    }
}

/// A quest or cafe reservation. `user_id` and `quest_id` are weak references.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub quest_id: Option<i32>,
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests_count: i32,
    pub status: BookingStatus,
    pub total_price: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
