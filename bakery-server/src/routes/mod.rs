//! Router assembly
//!
//! `/api/admin/*` routes share one sub-router so the admin guard can be
//! attached to all of them at once.

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::auth::require_admin;
use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Public routes (no middleware, no state)
pub fn public_router() -> Router<ServerState> {
    Router::new()
        .merge(api::health::router())
        .merge(api::auth::router())
        .merge(api::menu::router())
        .merge(api::orders::router())
        .merge(api::contact::router())
        .merge(api::feedback::router())
        .merge(api::prebookings::router())
}

/// `/api/admin/*` routes (no middleware, no state)
pub fn admin_router() -> Router<ServerState> {
    Router::new()
        .merge(api::menu::admin_router())
        .merge(api::orders::admin_router())
        .merge(api::contact::admin_router())
        .merge(api::feedback::admin_router())
        .merge(api::prebookings::admin_router())
}

/// All routes; the admin guard is attached when the config enables it
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    let admin = if state.config.admin_guard_enabled {
        admin_router().layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ))
    } else {
        admin_router()
    };

    public_router().merge(admin)
}

/// Fully configured application with middleware and state
///
/// Used by the HTTP server and by the integration tests.
pub fn build_app(state: &ServerState) -> Router {
    build_router(state)
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Gzip responses when the client asks for it
        .layer(CompressionLayer::new())
        // Request spans (INFO)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - generate a unique ID for each request (outermost)
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state.clone())
}
