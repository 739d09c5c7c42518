//! Shared types for the bakery backend
//!
//! Error system and data models used by the HTTP server and its tests.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
