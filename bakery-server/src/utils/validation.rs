//! Input validation helpers
//!
//! Length limits mirror the sized columns of the storefront schema.
//! SQLite TEXT has no built-in length enforcement. Free-text columns
//! (messages, comments, descriptions) are unbounded.

use shared::AppError;

// ── Text length limits ──────────────────────────────────────────────

pub const MAX_USERNAME_LEN: usize = 50;

pub const MAX_ROLE_LEN: usize = 20;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Menu item names, contact names
pub const MAX_NAME_LEN: usize = 100;

/// Contact and feedback emails
pub const MAX_EMAIL_LEN: usize = 100;

/// Prebooking emails
pub const MAX_PREBOOKING_EMAIL_LEN: usize = 50;

pub const MAX_PHONE_LEN: usize = 15;

/// Prebooking item names
pub const MAX_ITEM_NAME_LEN: usize = 20;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    validate_text_len(value, field, max_len)
}

/// Validate only the length limit; empty strings pass.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Keep a string only if it has non-whitespace content
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
