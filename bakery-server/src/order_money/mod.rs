//! Order money calculation using rust_decimal
//!
//! Line items arrive as loose JSON. Totals are summed as `Decimal`, then
//! rounded to 2 decimal places and converted to `f64` for storage.

use rust_decimal::prelude::*;
use serde_json::Value;
use shared::models::OrderCreate;
use shared::{AppError, AppResult, ErrorCode};


/// Rounding: 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

/// One submitted line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    pub price: Decimal,
    pub quantity: i64,
}

/// Convert f64 to Decimal; `None` for NaN or infinity
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round an incoming price to 2 decimal places
pub fn round_price(value: f64) -> Option<f64> {
    to_decimal(value).map(to_f64)
}

fn invalid_item(index: usize, reason: &str) -> AppError {
    AppError::new(ErrorCode::OrderItemInvalid)
        .with_detail("index", index)
        .with_detail("reason", reason)
}

/// Parse one line item
///
/// Absent `price`/`quantity` count as 0. A present field must be a number
/// (price) or an integer (quantity).
pub fn parse_line_item(index: usize, item: &Value) -> AppResult<LineItem> {
    let Some(fields) = item.as_object() else {
        return Err(invalid_item(index, "item must be an object"));
    };

    let price = match fields.get("price") {
        None => Decimal::ZERO,
        Some(v) => v
            .as_f64()
            .and_then(to_decimal)
            .ok_or_else(|| invalid_item(index, "price must be a number"))?,
    };

    let quantity = match fields.get("quantity") {
        None => 0,
        Some(v) => v
            .as_i64()
            .ok_or_else(|| invalid_item(index, "quantity must be an integer"))?,
    };

    Ok(LineItem { price, quantity })
}

/// Absent, null, `false`, `0` and empty containers count as no items
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Parse the `items` field of a place-order body
///
/// A blank value is rejected as empty; any other non-list is malformed.
pub fn parse_items(items: Option<&Value>) -> AppResult<Vec<LineItem>> {
    let items = match items {
        Some(items) if !is_blank(items) => items,
        _ => return Err(AppError::new(ErrorCode::OrderEmpty)),
    };
    let Some(list) = items.as_array() else {
        return Err(
            AppError::new(ErrorCode::OrderItemInvalid).with_detail("reason", "items must be a list")
        );
    };

    list.iter()
        .enumerate()
        .map(|(index, item)| parse_line_item(index, item))
        .collect()
}

/// Σ price × quantity and Σ quantity
pub fn summarize(items: &[LineItem]) -> AppResult<(Decimal, i64)> {
    let mut total = Decimal::ZERO;
    let mut quantity: i64 = 0;
    for (index, item) in items.iter().enumerate() {
        let line = item
            .price
            .checked_mul(Decimal::from(item.quantity))
            .ok_or_else(|| invalid_item(index, "line total overflow"))?;
        total = total
            .checked_add(line)
            .ok_or_else(|| invalid_item(index, "order total overflow"))?;
        quantity = quantity
            .checked_add(item.quantity)
            .ok_or_else(|| invalid_item(index, "quantity overflow"))?;
    }
    Ok((total, quantity))
}

/// Build the row to persist from a raw `items` value
///
/// `order_items` keeps the submitted list verbatim as JSON text.
pub fn build_order(items: Option<&Value>) -> AppResult<OrderCreate> {
    let lines = parse_items(items)?;
    let (total, quantity) = summarize(&lines)?;

    let raw = items.cloned().unwrap_or(Value::Null);
    let order_items = serde_json::to_string(&raw)
        .map_err(|e| AppError::internal(format!("Failed to serialize order items: {e}")))?;

    Ok(OrderCreate {
        total_amount: to_f64(total),
        quantity,
        order_items,
    })
}
