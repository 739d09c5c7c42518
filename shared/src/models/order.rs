//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub order_date: DateTime<Utc>,
    pub total_amount: f64,
    pub quantity: i64,
    /// Submitted line items, kept verbatim as JSON text
    pub order_items: String,
}

/// Admin listing view (total as a 2dp string)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
    pub id: i64,
    pub order_date: DateTime<Utc>,
    pub total_amount: String,
    pub quantity: i64,
    pub order_items: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_date: order.order_date,
            total_amount: format!("{:.2}", order.total_amount),
            quantity: order.quantity,
            order_items: order.order_items,
        }
    }
}

/// Place order payload
///
/// `items` stays untyped: each entry is checked by the order handler so that
/// a bad line item yields a 400 with a readable message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub items: Option<serde_json::Value>,
}

/// Aggregate computed from the submitted items, ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub total_amount: f64,
    pub quantity: i64,
    pub order_items: String,
}
