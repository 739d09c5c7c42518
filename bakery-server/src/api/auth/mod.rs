//! Account API
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /api/register | POST | 201, 400 missing field, 409 taken username |
//! | /api/login | POST | 200 with bearer token, 401 on any mismatch |
//! | /api/user?username= | GET | public profile |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/register", post(handler::register))
        .route("/api/login", post(handler::login))
        .route("/api/user", get(handler::get_user))
}
