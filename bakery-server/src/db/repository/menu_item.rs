//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, description, price, availability";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_items ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_available(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_items WHERE availability = 1 ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_items WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    description: &str,
    price: f64,
    availability: bool,
) -> RepoResult<MenuItem> {
    let id = sqlx::query(
        "INSERT INTO menu_items (name, description, price, availability) VALUES (?, ?, ?, ?)",
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(availability)
    .execute(pool)
    .await?
    .last_insert_rowid();
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

/// Overwrite the supplied fields, keep the rest
pub async fn update(pool: &SqlitePool, id: i64, data: &MenuItemUpdate) -> RepoResult<MenuItem> {
    let rows = sqlx::query(
        "UPDATE menu_items SET name = COALESCE(?1, name), description = COALESCE(?2, description), \
         price = COALESCE(?3, price), availability = COALESCE(?4, availability) WHERE id = ?5",
    )
    .bind(data.name.as_deref())
    .bind(data.description.as_deref())
    .bind(data.price)
    .bind(data.availability)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

/// Returns `false` when no row had that id
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu_items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
