//! Contact Message Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Create contact message payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactMessageCreate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}
