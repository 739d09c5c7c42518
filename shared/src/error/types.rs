//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// Every handler returns this. The message is what the client sees, so
/// constructors for system failures take a short description rather than
/// the underlying driver error text.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a missing-field error for one field
    pub fn required(field: impl Into<String>) -> Self {
        let f = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{f} is required"))
            .with_detail("field", f)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Create an admin-only rejection
    pub fn admin_required() -> Self {
        Self::new(ErrorCode::AdminRequired)
    }
}

/// Unified API response structure
///
/// - `code`: Error code (0 for success)
/// - `message`: Human-readable message
/// - `data`: Response payload (on success)
/// - `details`: Additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 for success, non-zero for errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse<()> {
    /// Create a success response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            message: message.into(),
            data: None,
            details: None,
        }
    }

    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = match self.code {
            None | Some(0) => StatusCode::OK,
            Some(code) => ErrorCode::try_from(code)
                .map(|c| c.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::MenuItemNotFound);
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
        assert_eq!(err.message, "Menu item not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::required("username");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "username is required");
        assert_eq!(err.details.unwrap().get("field").unwrap(), "username");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::invalid_credentials().http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::admin_required().http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::new(ErrorCode::MenuItemNotFound).http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::database("insert failed").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::OrderEmpty, "No data provided");
        assert_eq!(format!("{}", err), "No data provided");
    }

    #[test]
    fn test_api_response_message() {
        let response = ApiResponse::message("Order placed successfully");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["message"], "Order placed successfully");
        assert!(json.get("data").is_none());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", 42);
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.code, Some(6001));
        assert_eq!(response.message, "Menu item not found");
        assert_eq!(response.details.unwrap().get("id").unwrap(), 42);
    }

    #[test]
    fn test_api_response_error_status() {
        let err = AppError::new(ErrorCode::UsernameExists);
        let response =
            axum::response::IntoResponse::into_response(ApiResponse::<()>::error(&err));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
