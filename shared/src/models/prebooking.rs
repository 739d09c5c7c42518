//! Prebooking Model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Advance order for pickup on a given date/time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Prebooking {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    /// Free text, not a reference to the menu
    pub item_name: String,
    pub quantity: i64,
    pub special_requests: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Admin listing view with the fixed display formats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrebookingView {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub item_name: String,
    pub quantity: i64,
    pub special_requests: Option<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub comment: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
}

impl From<Prebooking> for PrebookingView {
    fn from(pb: Prebooking) -> Self {
        Self {
            id: pb.id,
            username: pb.username,
            email: pb.email,
            phone: pb.phone,
            item_name: pb.item_name,
            quantity: pb.quantity,
            special_requests: pb.special_requests,
            date: pb.date.format("%Y-%m-%d").to_string(),
            time: pb.time.format("%H:%M").to_string(),
            comment: pb.comment,
            created_at: pb.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Create prebooking payload
///
/// Required fields are plain types: a body missing one of them is rejected
/// while decoding. `date` and `time` are parsed by the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrebookingCreate {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub item_name: String,
    pub quantity: i64,
    pub special_requests: Option<String>,
    pub date: String,
    pub time: String,
    pub comment: Option<String>,
}

/// Prebooking with its schedule parsed, ready to persist
#[derive(Debug, Clone)]
pub struct NewPrebooking {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub item_name: String,
    pub quantity: i64,
    pub special_requests: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub comment: Option<String>,
}
