//! Feedback Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer feedback entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Feedback {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create feedback payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackCreate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<i64>,
}
