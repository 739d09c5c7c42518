//! Error codes for the bakery backend
//!
//! Codes are grouped by the leading digit:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: User account errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 7xxx: Guest message errors (contact, feedback, prebooking)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` so the storefront frontend can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,

    // ==================== 2xxx: Permission ====================
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: User ====================
    /// User not found
    UserNotFound = 3001,
    /// Username already taken
    UsernameExists = 3002,

    // ==================== 4xxx: Order ====================
    /// Order has no items
    OrderEmpty = 4001,
    /// Order line item could not be read
    OrderItemInvalid = 4002,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item already exists
    MenuItemExists = 6002,
    /// Menu item price is missing or not a number
    MenuItemInvalidPrice = 6003,

    // ==================== 7xxx: Guest messages ====================
    /// Contact message not found
    ContactMessageNotFound = 7001,
    /// Feedback field missing or empty (rating zero)
    FeedbackIncomplete = 7101,
    /// Prebooking date/time could not be parsed
    PrebookingInvalidSchedule = 7201,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "All fields are required!",

            // Auth
            ErrorCode::InvalidCredentials => "Invalid username or password",

            // Permission
            ErrorCode::AdminRequired => "Access forbidden: Admins only",

            // User
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UsernameExists => "Username already exists",

            // Order
            ErrorCode::OrderEmpty => "Missing order_items",
            ErrorCode::OrderItemInvalid => "Invalid data format",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemExists => "Menu item already exists",
            ErrorCode::MenuItemInvalidPrice => "Menu item price must be a number",

            // Guest messages
            ErrorCode::ContactMessageNotFound => "Message not found",
            ErrorCode::FeedbackIncomplete => "Missing required fields",
            ErrorCode::PrebookingInvalidSchedule => "Invalid prebooking date or time",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1002 => Ok(ErrorCode::InvalidCredentials),

            // Permission
            2003 => Ok(ErrorCode::AdminRequired),

            // User
            3001 => Ok(ErrorCode::UserNotFound),
            3002 => Ok(ErrorCode::UsernameExists),

            // Order
            4001 => Ok(ErrorCode::OrderEmpty),
            4002 => Ok(ErrorCode::OrderItemInvalid),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::MenuItemExists),
            6003 => Ok(ErrorCode::MenuItemInvalidPrice),

            // Guest messages
            7001 => Ok(ErrorCode::ContactMessageNotFound),
            7101 => Ok(ErrorCode::FeedbackIncomplete),
            7201 => Ok(ErrorCode::PrebookingInvalidSchedule),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::RequiredField.code(), 7);

        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::AdminRequired.code(), 2003);
        assert_eq!(ErrorCode::UsernameExists.code(), 3002);
        assert_eq!(ErrorCode::OrderEmpty.code(), 4001);
        assert_eq!(ErrorCode::MenuItemNotFound.code(), 6001);
        assert_eq!(ErrorCode::ContactMessageNotFound.code(), 7001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_every_variant() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::InvalidRequest,
            ErrorCode::RequiredField,
            ErrorCode::InvalidCredentials,
            ErrorCode::AdminRequired,
            ErrorCode::UserNotFound,
            ErrorCode::UsernameExists,
            ErrorCode::OrderEmpty,
            ErrorCode::OrderItemInvalid,
            ErrorCode::MenuItemNotFound,
            ErrorCode::MenuItemExists,
            ErrorCode::MenuItemInvalidPrice,
            ErrorCode::ContactMessageNotFound,
            ErrorCode::FeedbackIncomplete,
            ErrorCode::PrebookingInvalidSchedule,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(9999), Err(InvalidErrorCode(9999)));
        assert_eq!(ErrorCode::try_from(5001), Err(InvalidErrorCode(5001)));
        assert_eq!(ErrorCode::try_from(1001), Err(InvalidErrorCode(1001)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::MenuItemNotFound).unwrap();
        assert_eq!(json, "6001");

        let parsed: ErrorCode = serde_json::from_str("2003").unwrap();
        assert_eq!(parsed, ErrorCode::AdminRequired);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::RequiredField.message(), "All fields are required!");
        assert_eq!(
            ErrorCode::AdminRequired.message(),
            "Access forbidden: Admins only"
        );
        assert_eq!(
            ErrorCode::InvalidCredentials.message(),
            "Invalid username or password"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::OrderEmpty), "4001");
        assert_eq!(
            format!("{}", InvalidErrorCode(999)),
            "invalid error code: 999"
        );
    }
}
