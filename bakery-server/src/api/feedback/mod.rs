//! Feedback API
//!
//! Listings are newest first.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/feedback", get(handler::list).post(handler::create))
}

pub fn admin_router() -> Router<ServerState> {
    Router::new().route("/api/admin/feedback", get(handler::list))
}
