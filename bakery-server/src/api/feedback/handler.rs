//! Feedback API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use shared::models::{Feedback, FeedbackCreate};

use crate::core::ServerState;
use crate::db::repository::feedback;
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_USERNAME_LEN, non_empty, validate_required_text};
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};

/// POST /api/feedback - every field required, rating non-zero
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<FeedbackCreate>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    let (Some(username), Some(email), Some(comment), Some(rating)) = (
        non_empty(payload.username),
        non_empty(payload.email),
        non_empty(payload.comment),
        payload.rating.filter(|r| *r != 0),
    ) else {
        return Err(AppError::new(ErrorCode::FeedbackIncomplete));
    };
    validate_required_text(&username, "username", MAX_USERNAME_LEN)?;
    validate_required_text(&email, "email", MAX_EMAIL_LEN)?;

    let created = feedback::create(&state.pool, &username, &email, rating, &comment).await?;
    tracing::info!(feedback_id = created.id, rating = created.rating, "Feedback received");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/feedback, GET /api/admin/feedback
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Feedback>>> {
    let entries = feedback::find_all(&state.pool).await?;
    Ok(Json(entries))
}
