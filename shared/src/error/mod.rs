//! Unified error system for the bakery backend
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with code, message and details
//! - [`ApiResponse`]: JSON body shared by errors and message-only replies
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::MenuItemNotFound);
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//!
//! let err = AppError::required("username").with_detail("reason", "empty");
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(7));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
