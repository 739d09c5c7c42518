//! Feedback Repository

use super::{RepoError, RepoResult};
use chrono::Utc;
use shared::models::Feedback;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, username, email, rating, comment, created_at";

/// Newest first; id breaks ties between equal timestamps
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Feedback>> {
    let entries = sqlx::query_as::<_, Feedback>(&format!(
        "SELECT {COLUMNS} FROM feedback ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Feedback>> {
    let entry = sqlx::query_as::<_, Feedback>(&format!(
        "SELECT {COLUMNS} FROM feedback WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(entry)
}

pub async fn create(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    rating: i64,
    comment: &str,
) -> RepoResult<Feedback> {
    let id = sqlx::query(
        "INSERT INTO feedback (username, email, rating, comment, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(username)
    .bind(email)
    .bind(rating)
    .bind(comment)
    .bind(Utc::now())
    .execute(pool)
    .await?
    .last_insert_rowid();
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create feedback".into()))
}
