//! Account API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use http::StatusCode;
use shared::models::{LoginRequest, LoginResponse, RegisterRequest, UserProfile, UserQuery};

use crate::auth::{hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::{RepoError, user};
use crate::security_log;
use crate::utils::validation::{
    MAX_PASSWORD_LEN, MAX_ROLE_LEN, MAX_USERNAME_LEN, non_empty, validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppJson, AppResult, ErrorCode};

/// POST /api/register - create an account
pub async fn register(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, ApiResponse<()>)> {
    let (Some(username), Some(password), Some(role)) = (
        non_empty(payload.username),
        non_empty(payload.password),
        non_empty(payload.role),
    ) else {
        return Err(AppError::new(ErrorCode::RequiredField));
    };

    validate_required_text(&username, "username", MAX_USERNAME_LEN)?;
    validate_required_text(&password, "password", MAX_PASSWORD_LEN)?;
    validate_required_text(&role, "role", MAX_ROLE_LEN)?;

    let password_hash = hash_password(&password).map_err(|e| {
        tracing::error!(error = %e, "Password hashing failed");
        AppError::internal("Failed to register user")
    })?;

    match user::create(&state.pool, &username, &password_hash, &role).await {
        Ok(created) => {
            tracing::info!(user_id = created.id, username = %created.username, role = %created.role, "User registered");
            Ok((
                StatusCode::CREATED,
                ApiResponse::message("User registered successfully!"),
            ))
        }
        Err(RepoError::Duplicate(_)) => {
            Err(AppError::new(ErrorCode::UsernameExists).with_detail("username", username))
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /api/login - verify credentials and issue a token
pub async fn login(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let found = user::find_by_username(&state.pool, &username).await?;
    let Some(account) = found.filter(|u| verify_password(&password, &u.password_hash)) else {
        security_log!("WARN", "login_failed", username = username.as_str());
        return Err(AppError::invalid_credentials());
    };

    let token = state
        .get_jwt_service()
        .generate_token(&account.id.to_string(), &account.username, &account.role)
        .map_err(|e| {
            tracing::error!(error = %e, "Token generation failed");
            AppError::internal("Failed to issue token")
        })?;

    tracing::info!(user_id = account.id, username = %account.username, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        role: account.role,
        token,
    }))
}

/// GET /api/user?username= - public profile lookup
pub async fn get_user(
    State(state): State<ServerState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<UserProfile>> {
    let Some(username) = non_empty(query.username) else {
        return Err(AppError::with_message(
            ErrorCode::InvalidRequest,
            "Username not provided",
        ));
    };

    let account = user::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    Ok(Json(UserProfile::from(account)))
}
