//! Utilities: logging setup, request extraction and input validation

pub mod json;
pub mod logger;
pub mod validation;

pub use json::AppJson;
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};
