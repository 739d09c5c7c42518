//! Health check
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /health | GET | none |
//!
//! ```json
//! { "status": "ok", "service": "bakery-server", "version": "0.1.0", "database": "ok" }
//! ```

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(handler::health))
}
