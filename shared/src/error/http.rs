//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::UserNotFound
            | Self::MenuItemNotFound
            | Self::ContactMessageNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::UsernameExists | Self::MenuItemExists => {
                StatusCode::CONFLICT
            }

            // 401 Unauthorized
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::AdminRequired => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and malformed input)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::MenuItemNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::ContactMessageNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(
            ErrorCode::UsernameExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::MenuItemExists.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_auth_statuses() {
        assert_eq!(
            ErrorCode::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::AdminRequired.http_status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::RequiredField.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::OrderEmpty.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::OrderItemInvalid.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::PrebookingInvalidSchedule.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
