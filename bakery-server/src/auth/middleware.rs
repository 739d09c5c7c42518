//! Admin guard
//!
//! Attached to `/api/admin/*` when `ADMIN_GUARD_ENABLED` is set.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::AppError;
use shared::models::ADMIN_ROLE;

use crate::auth::JwtService;
use crate::core::ServerState;
use crate::security_log;

/// Require a valid bearer token whose role is `admin`
///
/// | Case | Result |
/// |------|--------|
/// | no / malformed Authorization header | 403 |
/// | invalid or expired token | 403 |
/// | role other than `admin` | 403 |
pub async fn require_admin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header);

    let Some(token) = token else {
        security_log!("WARN", "admin_token_missing", path = req.uri().path());
        return Err(AppError::admin_required());
    };

    let verdict = state.get_jwt_service().validate_token(token);
    match verdict {
        Ok(claims) if claims.role == ADMIN_ROLE => Ok(next.run(req).await),
        Ok(claims) => {
            security_log!(
                "WARN",
                "admin_role_rejected",
                username = claims.username.as_str(),
                role = claims.role.as_str()
            );
            Err(AppError::admin_required())
        }
        Err(e) => {
            security_log!("WARN", "admin_token_invalid", error = e.to_string().as_str());
            Err(AppError::admin_required())
        }
    }
}
