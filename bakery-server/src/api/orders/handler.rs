//! Order API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use shared::models::{OrderView, PlaceOrderRequest};

use crate::core::ServerState;
use crate::db::repository::order;
use crate::order_money;
use crate::utils::{ApiResponse, AppJson, AppResult};

/// POST /api/place_order - record an order from its line items
///
/// No stock decrement and no catalogue lookup: the submitted prices are
/// taken as given.
pub async fn place_order(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<PlaceOrderRequest>,
) -> AppResult<(StatusCode, ApiResponse<()>)> {
    let data = order_money::build_order(payload.items.as_ref()).inspect_err(|e| {
        tracing::warn!(code = %e.code, message = %e.message, "Order rejected");
    })?;

    let created = order::create(&state.pool, &data).await?;
    tracing::info!(
        order_id = created.id,
        total_amount = created.total_amount,
        quantity = created.quantity,
        "Order placed"
    );

    Ok((
        StatusCode::CREATED,
        ApiResponse::message("Order placed successfully"),
    ))
}

/// GET /api/admin/orders
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderView>>> {
    let orders = order::find_all(&state.pool).await?;
    Ok(Json(orders.into_iter().map(OrderView::from).collect()))
}
