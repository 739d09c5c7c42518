//! Repository Module
//!
//! Free functions over a `SqlitePool`, one file per table.

pub mod contact_message;
pub mod feedback;
pub mod menu_item;
pub mod order;
pub mod prebooking;
pub mod user;

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => {
                AppError::new(ErrorCode::AlreadyExists).with_detail("reason", msg)
            }
            RepoError::Database(msg) => {
                // Driver text stays in the log
                tracing::error!(error = %msg, "Repository failure");
                AppError::database("Database error")
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    crate::db::DbService::in_memory().await.unwrap().pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_failures_hide_driver_text() {
        let err: AppError = RepoError::Database("disk I/O error at page 42".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database error");
    }

    #[test]
    fn duplicates_map_to_conflict() {
        let err: AppError = RepoError::Duplicate("UNIQUE constraint failed".into()).into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
        assert_eq!(err.http_status(), http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn unique_violation_becomes_duplicate() {
        let pool = test_pool().await;
        let insert = "INSERT INTO users (username, password_hash, role) VALUES ('ana', 'x', 'user')";
        sqlx::query(insert).execute(&pool).await.unwrap();
        let err: RepoError = sqlx::query(insert).execute(&pool).await.unwrap_err().into();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}
