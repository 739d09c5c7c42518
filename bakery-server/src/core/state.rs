use std::sync::Arc;

use sqlx::SqlitePool;

use super::{Config, Result};
use crate::auth::JwtService;
use crate::db::DbService;

/// Shared handler state
///
/// Cloned into every request; all cross-request data lives in the pool.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// Open the database (running migrations) and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        Ok(Self::new(config.clone(), db.pool))
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
