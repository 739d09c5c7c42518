//! Prebooking API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/prebookings", post(handler::create))
}

pub fn admin_router() -> Router<ServerState> {
    Router::new().route("/api/admin/prebookings", get(handler::list))
}
