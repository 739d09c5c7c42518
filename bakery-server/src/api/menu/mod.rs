//! Menu API
//!
//! Storefront listings show the price as a 2dp string, the admin listing as
//! a number.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/menu", get(handler::list))
        .route("/api/user/menu", get(handler::list))
        .route("/api/menu_items", get(handler::list_available))
}

pub fn admin_router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/admin/menu",
            get(handler::list_admin).post(handler::create),
        )
        .route(
            "/api/admin/menu/{id}",
            put(handler::update).delete(handler::delete),
        )
}
