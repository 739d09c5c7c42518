//! Order API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/place_order", post(handler::place_order))
}

pub fn admin_router() -> Router<ServerState> {
    Router::new().route("/api/admin/orders", get(handler::list))
}
