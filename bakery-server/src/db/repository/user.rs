//! User Repository

use super::{RepoError, RepoResult};
use shared::models::User;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, username, password_hash, role";

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM users WHERE username = ? LIMIT 1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Insert a user; `password_hash` must already be hashed
///
/// A taken username surfaces as [`RepoError::Duplicate`].
pub async fn create(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    role: &str,
) -> RepoResult<User> {
    let id = sqlx::query("INSERT INTO users (username, password_hash, role) VALUES (?, ?, ?)")
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .execute(pool)
        .await?
        .last_insert_rowid();
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_pool;

    async fn count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_then_find() {
        let pool = test_pool().await;
        let user = create(&pool, "ana", "hash", "admin").await.unwrap();
        assert!(user.is_admin());

        let found = find_by_username(&pool, "ana").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.password_hash, "hash");
        assert!(find_by_username(&pool, "bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_keeps_count() {
        let pool = test_pool().await;
        create(&pool, "ana", "hash", "user").await.unwrap();
        let err = create(&pool, "ana", "other", "admin").await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(count(&pool).await, 1);
    }
}
