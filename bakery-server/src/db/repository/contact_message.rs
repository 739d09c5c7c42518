//! Contact Message Repository

use super::{RepoError, RepoResult};
use chrono::Utc;
use shared::models::ContactMessage;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, email, message, created_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ContactMessage>> {
    let messages = sqlx::query_as::<_, ContactMessage>(&format!(
        "SELECT {COLUMNS} FROM contact_messages ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(messages)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ContactMessage>> {
    let message = sqlx::query_as::<_, ContactMessage>(&format!(
        "SELECT {COLUMNS} FROM contact_messages WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(message)
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    message: &str,
) -> RepoResult<ContactMessage> {
    let id = sqlx::query(
        "INSERT INTO contact_messages (name, email, message, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(name)
    .bind(email)
    .bind(message)
    .bind(Utc::now())
    .execute(pool)
    .await?
    .last_insert_rowid();
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create contact message".into()))
}

/// Returns `false` when no row had that id
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_pool;

    #[tokio::test]
    async fn create_list_delete() {
        let pool = test_pool().await;
        let msg = create(&pool, "Ana", "ana@example.com", "Open on Sunday?")
            .await
            .unwrap();
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);

        assert!(delete(&pool, msg.id).await.unwrap());
        assert!(!delete(&pool, msg.id).await.unwrap());
        assert!(find_all(&pool).await.unwrap().is_empty());
    }
}
