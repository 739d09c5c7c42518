//! JSON body extractor with the application error shape

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use shared::{AppError, ErrorCode};

/// `Json<T>` that rejects malformed bodies with a 400 [`AppError`]
///
/// Plain `Json` answers with 415/422 and a text body; handlers use this so
/// every failure carries `{code, message}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(AppError::with_message(
                    ErrorCode::InvalidRequest,
                    "Invalid request body",
                )
                .with_detail("reason", rejection.body_text()))
            }
        }
    }
}
