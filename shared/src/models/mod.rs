//! Data models
//!
//! Shared between the server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod contact_message;
pub mod feedback;
pub mod menu_item;
pub mod order;
pub mod prebooking;
pub mod serde_helpers;
pub mod user;

// Re-exports
pub use contact_message::*;
pub use feedback::*;
pub use menu_item::*;
pub use order::*;
pub use prebooking::*;
pub use user::*;
