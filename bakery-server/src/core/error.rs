//! Startup errors
//!
//! Request-time failures are [`shared::AppError`]; this type only covers
//! what can go wrong before the router is serving.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
