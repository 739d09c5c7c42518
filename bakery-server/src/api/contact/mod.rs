//! Contact message API

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/contact_messages",
        get(handler::list).post(handler::create),
    )
}

pub fn admin_router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/contact_messages", get(handler::list))
        .route("/api/admin/contact_messages/{id}", delete(handler::delete))
}
