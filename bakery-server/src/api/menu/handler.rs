//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use shared::models::{AvailableMenuItem, MenuItem, MenuItemCreate, MenuItemUpdate, MenuItemView};

use crate::core::ServerState;
use crate::db::repository::{RepoError, menu_item};
use crate::order_money::round_price;
use crate::utils::validation::{MAX_NAME_LEN, non_empty, validate_required_text};
use crate::utils::{ApiResponse, AppError, AppJson, AppResult, ErrorCode};

/// Rounded, non-negative price or a 400
fn checked_price(price: Option<f64>) -> AppResult<f64> {
    price
        .and_then(round_price)
        .filter(|p| *p >= 0.0)
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemInvalidPrice))
}

/// GET /api/menu, GET /api/user/menu - storefront listing
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItemView>>> {
    let items = menu_item::find_all(&state.pool).await?;
    Ok(Json(items.into_iter().map(MenuItemView::from).collect()))
}

/// GET /api/menu_items - available items for the order form
pub async fn list_available(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<AvailableMenuItem>>> {
    let items = menu_item::find_available(&state.pool).await?;
    Ok(Json(items.into_iter().map(AvailableMenuItem::from).collect()))
}

/// GET /api/admin/menu - full listing, numeric prices
pub async fn list_admin(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu_item::find_all(&state.pool).await?;
    Ok(Json(items))
}

/// POST /api/admin/menu - add an item
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<MenuItemCreate>,
) -> AppResult<(StatusCode, ApiResponse<()>)> {
    let Some(name) = non_empty(payload.name) else {
        return Err(AppError::required("name"));
    };
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    let price = checked_price(payload.price)?;
    let description = payload.description.unwrap_or_default();
    let availability = payload.availability.unwrap_or(true);

    match menu_item::create(&state.pool, &name, &description, price, availability).await {
        Ok(item) => {
            tracing::info!(menu_item_id = item.id, name = %item.name, price = item.price, "Menu item added");
            Ok((
                StatusCode::CREATED,
                ApiResponse::message("Menu item added successfully"),
            ))
        }
        Err(RepoError::Duplicate(_)) => Err(AppError::new(ErrorCode::MenuItemExists)),
        Err(e) => Err(e.into()),
    }
}

/// PUT /api/admin/menu/{id} - overwrite the supplied fields
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    AppJson(mut payload): AppJson<MenuItemUpdate>,
) -> AppResult<ApiResponse<()>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if payload.price.is_some() {
        payload.price = Some(checked_price(payload.price)?);
    }

    match menu_item::update(&state.pool, id, &payload).await {
        Ok(item) => {
            tracing::info!(menu_item_id = item.id, "Menu item updated");
            Ok(ApiResponse::message("Menu item updated successfully"))
        }
        Err(RepoError::NotFound(_)) => {
            Err(AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", id))
        }
        Err(e) => Err(e.into()),
    }
}

/// DELETE /api/admin/menu/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    if !menu_item::delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", id));
    }
    tracing::info!(menu_item_id = id, "Menu item deleted");
    Ok(ApiResponse::message("Menu item deleted successfully"))
}
