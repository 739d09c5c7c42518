//! Contact message API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use shared::models::{ContactMessage, ContactMessageCreate};

use crate::core::ServerState;
use crate::db::repository::contact_message;
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, non_empty, validate_required_text};
use crate::utils::{ApiResponse, AppError, AppJson, AppResult, ErrorCode};

/// POST /api/contact_messages - returns the stored record
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ContactMessageCreate>,
) -> AppResult<(StatusCode, Json<ContactMessage>)> {
    let name = non_empty(payload.name).ok_or_else(|| AppError::required("name"))?;
    let email = non_empty(payload.email).ok_or_else(|| AppError::required("email"))?;
    let message = non_empty(payload.message).ok_or_else(|| AppError::required("message"))?;
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    validate_required_text(&email, "email", MAX_EMAIL_LEN)?;

    let created = contact_message::create(&state.pool, &name, &email, &message).await?;
    tracing::info!(contact_message_id = created.id, "Contact message received");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/contact_messages, GET /api/admin/contact_messages
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = contact_message::find_all(&state.pool).await?;
    Ok(Json(messages))
}

/// DELETE /api/admin/contact_messages/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    if !contact_message::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::ContactMessageNotFound).with_detail("id", id));
    }
    tracing::info!(contact_message_id = id, "Contact message deleted");
    Ok(ApiResponse::message("Message deleted successfully"))
}
