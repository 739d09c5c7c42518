use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// `ok` or `error`
    database: &'static str,
}

/// GET /health
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Health check database probe failed");
            "error"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
