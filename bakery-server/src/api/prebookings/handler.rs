//! Prebooking API Handlers

use axum::{Json, extract::State};
use chrono::{NaiveDate, NaiveTime};
use http::StatusCode;
use shared::models::{NewPrebooking, PrebookingCreate, PrebookingView};

use crate::core::ServerState;
use crate::db::repository::prebooking;
use crate::utils::validation::{
    MAX_ITEM_NAME_LEN, MAX_PHONE_LEN, MAX_PREBOOKING_EMAIL_LEN, MAX_USERNAME_LEN, validate_text_len,
};
use crate::utils::{ApiResponse, AppError, AppJson, AppResult, ErrorCode};

/// `YYYY-MM-DD`
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::new(ErrorCode::PrebookingInvalidSchedule).with_detail("date", value)
    })
}

/// `HH:MM`, seconds optional
pub fn parse_time(value: &str) -> AppResult<NaiveTime> {
    let value_trimmed = value.trim();
    NaiveTime::parse_from_str(value_trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value_trimmed, "%H:%M"))
        .map_err(|_| {
            AppError::new(ErrorCode::PrebookingInvalidSchedule).with_detail("time", value)
        })
}

/// POST /api/prebookings
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<PrebookingCreate>,
) -> AppResult<(StatusCode, ApiResponse<()>)> {
    validate_text_len(&payload.username, "username", MAX_USERNAME_LEN)?;
    validate_text_len(&payload.email, "email", MAX_PREBOOKING_EMAIL_LEN)?;
    validate_text_len(&payload.phone, "phone", MAX_PHONE_LEN)?;
    validate_text_len(&payload.item_name, "item_name", MAX_ITEM_NAME_LEN)?;

    let data = NewPrebooking {
        date: parse_date(&payload.date)?,
        time: parse_time(&payload.time)?,
        username: payload.username,
        email: payload.email,
        phone: payload.phone,
        item_name: payload.item_name,
        quantity: payload.quantity,
        special_requests: payload.special_requests,
        comment: payload.comment,
    };

    let created = prebooking::create(&state.pool, &data).await?;
    tracing::info!(
        prebooking_id = created.id,
        date = %created.date,
        item_name = %created.item_name,
        "Prebooking created"
    );

    Ok((
        StatusCode::CREATED,
        ApiResponse::message("Prebooking created successfully!"),
    ))
}

/// GET /api/admin/prebookings
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PrebookingView>>> {
    let bookings = prebooking::find_all(&state.pool).await?;
    Ok(Json(bookings.into_iter().map(PrebookingView::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_format() {
        assert_eq!(
            parse_date("2026-12-24").unwrap(),
            NaiveDate::from_ymd_opt(2026, 12, 24).unwrap()
        );
        assert!(parse_date("24/12/2026").is_err());
        assert!(parse_date("2026-02-30").is_err());
    }

    #[test]
    fn time_accepts_optional_seconds() {
        assert_eq!(
            parse_time("08:30").unwrap(),
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("08:30:15").unwrap(),
            NaiveTime::from_hms_opt(8, 30, 15).unwrap()
        );
        let err = parse_time("8am").unwrap_err();
        assert_eq!(err.code, ErrorCode::PrebookingInvalidSchedule);
    }
}
