//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category, derived from the leading digit of the error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// User account errors (3xxx)
    User,
    /// Order errors (4xxx)
    Order,
    /// Menu errors (6xxx)
    Menu,
    /// Contact, feedback and prebooking errors (7xxx)
    Guest,
    /// System errors (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::User,
            4000..5000 => Self::Order,
            6000..7000 => Self::Menu,
            7000..8000 => Self::Guest,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::User => "user",
            Self::Order => "order",
            Self::Menu => "menu",
            Self::Guest => "guest",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2003), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3002), ErrorCategory::User);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Menu);
        assert_eq!(ErrorCategory::from_code(7101), ErrorCategory::Guest);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::InvalidCredentials.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::AdminRequired.category(),
            ErrorCategory::Permission
        );
        assert_eq!(ErrorCode::UsernameExists.category(), ErrorCategory::User);
        assert_eq!(ErrorCode::OrderEmpty.category(), ErrorCategory::Order);
        assert_eq!(ErrorCode::MenuItemExists.category(), ErrorCategory::Menu);
        assert_eq!(
            ErrorCode::ContactMessageNotFound.category(),
            ErrorCategory::Guest
        );
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        assert_eq!(
            serde_json::to_string(&ErrorCategory::Guest).unwrap(),
            "\"guest\""
        );
        let category: ErrorCategory = serde_json::from_str("\"menu\"").unwrap();
        assert_eq!(category, ErrorCategory::Menu);
        assert_eq!(category.name(), "menu");
    }
}
