use super::{Result, ServerError};
use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Notes |
/// |----------|---------|-------|
/// | DATABASE_URL | sqlite:bakery.db | SQLite connection string |
/// | HTTP_PORT | 5000 | |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | JWT_SECRET | dev key in development | required elsewhere, at least 32 chars |
/// | JWT_EXPIRATION_MINUTES | 1440 | |
/// | ADMIN_GUARD_ENABLED | false | true/1/yes/on or false/0/no/off; anything else is an error |
/// | LOG_LEVEL | info | |
/// | LOG_DIR | unset | daily rolling file when set |
/// | DB_MAX_CONNECTIONS | 5 | |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 ADMIN_GUARD_ENABLED=true cargo run -p bakery-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub jwt: JwtConfig,
    /// Reject non-admin callers on `/api/admin/*`
    pub admin_guard_enabled: bool,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub db_max_connections: u32,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset variables fall back to their defaults. Fails when the JWT
    /// secret is missing outside development or is too short, and when
    /// `ADMIN_GUARD_ENABLED` is not a recognizable flag.
    pub fn from_env() -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let jwt = JwtConfig::from_env(&environment)
            .map_err(|e| ServerError::Config(e.to_string()))?;
        let admin_guard_enabled = match std::env::var("ADMIN_GUARD_ENABLED") {
            Ok(value) => parse_flag("ADMIN_GUARD_ENABLED", &value)?,
            Err(_) => false,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:bakery.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment,
            jwt,
            admin_guard_enabled,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
        })
    }

    /// Development defaults that never read the environment
    ///
    /// Used by tests to build a state around an in-memory pool.
    pub fn development(jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            http_port: 5000,
            environment: "development".into(),
            jwt: JwtConfig::new(jwt_secret),
            admin_guard_enabled: false,
            log_level: "info".into(),
            log_dir: None,
            db_max_connections: 1,
        }
    }

    pub fn with_admin_guard(mut self, enabled: bool) -> Self {
        self.admin_guard_enabled = enabled;
        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// Boolean env flag; empty counts as unset
fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => Err(ServerError::Config(format!(
            "{name} must be true or false, got '{other}'"
        ))),
    }
}
