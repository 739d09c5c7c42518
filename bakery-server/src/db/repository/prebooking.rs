//! Prebooking Repository

use super::{RepoError, RepoResult};
use chrono::Utc;
use shared::models::{NewPrebooking, Prebooking};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, username, email, phone, item_name, quantity, special_requests, \
                       date, time, comment, created_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Prebooking>> {
    let bookings = sqlx::query_as::<_, Prebooking>(&format!(
        "SELECT {COLUMNS} FROM prebookings ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(bookings)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Prebooking>> {
    let booking = sqlx::query_as::<_, Prebooking>(&format!(
        "SELECT {COLUMNS} FROM prebookings WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(booking)
}

pub async fn create(pool: &SqlitePool, data: &NewPrebooking) -> RepoResult<Prebooking> {
    let id = sqlx::query(
        "INSERT INTO prebookings (username, email, phone, item_name, quantity, special_requests, \
         date, time, comment, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.username)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.item_name)
    .bind(data.quantity)
    .bind(data.special_requests.as_deref())
    .bind(data.date)
    .bind(data.time)
    .bind(data.comment.as_deref())
    .bind(Utc::now())
    .execute(pool)
    .await?
    .last_insert_rowid();
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create prebooking".into()))
}
