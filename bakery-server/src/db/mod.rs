//! Database Module
//!
//! Handles the SQLite connection pool and embedded migrations

pub mod repository;

use crate::core::ServerError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

/// Database service, owns the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database and apply migrations
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, ServerError> {
        if database_url.contains(":memory:") {
            return Self::in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| ServerError::Database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;

        // busy_timeout: wait 5s on write contention instead of failing
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to set busy_timeout: {e}")))?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    /// Single-connection in-memory database with the schema applied
    ///
    /// Every connection to `sqlite::memory:` sees its own database, so the
    /// pool is pinned to one connection that never expires.
    pub async fn in_memory() -> Result<Self, ServerError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;

        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    async fn migrate(pool: &SqlitePool) -> Result<(), ServerError> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");
        Ok(())
    }
}
