//! Order Repository

use super::{RepoError, RepoResult};
use chrono::Utc;
use shared::models::{Order, OrderCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, order_date, total_amount, quantity, order_items";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!("SELECT {COLUMNS} FROM orders ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(orders)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!("SELECT {COLUMNS} FROM orders WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(order)
}

pub async fn create(pool: &SqlitePool, data: &OrderCreate) -> RepoResult<Order> {
    let id = sqlx::query(
        "INSERT INTO orders (order_date, total_amount, quantity, order_items) VALUES (?, ?, ?, ?)",
    )
    .bind(Utc::now())
    .bind(data.total_amount)
    .bind(data.quantity)
    .bind(&data.order_items)
    .execute(pool)
    .await?
    .last_insert_rowid();
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_pool;

    async fn count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_keeps_items_text() {
        let pool = test_pool().await;
        let data = OrderCreate {
            total_amount: 13.0,
            quantity: 3,
            order_items: r#"[{"price":5,"quantity":2}]"#.into(),
        };
        let order = create(&pool, &data).await.unwrap();
        assert_eq!(order.total_amount, 13.0);
        assert_eq!(order.quantity, 3);
        assert_eq!(order.order_items, data.order_items);
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);
        assert_eq!(count(&pool).await, 1);
    }
}
