use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Ingredient, InventoryItem, InventoryItemChanges, NewInventoryItem};
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddInventoryItemRequest {
    pub ingredient_id: Uuid,
    pub quantity: String,
    pub unit_id: Uuid,
    pub expires_on: Option<NaiveDate>,
}

/// An inventory row with the referenced ingredient resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryEntry {
    pub ingredient: Ingredient,
    pub quantity: String,
    pub unit_id: Uuid,
    pub expires_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryResponse {
    pub items: Vec<InventoryEntry>,
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/inventory",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's inventory", body = InventoryResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_inventory(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InventoryResponse>, ApiError> {
    let mut conn = pool.get()?;
    let items = repo::inventory::list_for_user(&mut conn, id)?
        .into_iter()
        .map(|(item, ingredient)| InventoryEntry {
            ingredient,
            quantity: item.quantity,
            unit_id: item.unit_id,
            expires_on: item.expires_on,
        })
        .collect();
    Ok(Json(InventoryResponse { items }))
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/inventory",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = AddInventoryItemRequest,
    responses(
        (status = 201, description = "Inventory item added", body = InventoryItem),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User, ingredient or unit not found", body = ErrorResponse),
        (status = 409, description = "Ingredient already in inventory", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn add_inventory_item(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddInventoryItemRequest>,
) -> Result<(StatusCode, Json<InventoryItem>), ApiError> {
    if request.quantity.trim().is_empty() {
        return Err(ApiError::validation("quantity cannot be empty"));
    }

    let mut conn = pool.get()?;
    let item = repo::inventory::add(
        &mut conn,
        NewInventoryItem {
            user_id: id,
            ingredient_id: request.ingredient_id,
            quantity: request.quantity,
            unit_id: request.unit_id,
            expires_on: request.expires_on,
        },
    )?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/inventory/{ingredient_id}",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID")
    ),
    request_body = InventoryItemChanges,
    responses(
        (status = 200, description = "Inventory item updated", body = InventoryItem),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Inventory item not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_inventory_item(
    State(pool): State<AppState>,
    Path((id, ingredient_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<InventoryItemChanges>,
) -> Result<Json<InventoryItem>, ApiError> {
    if request.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::inventory::update(
        &mut conn,
        id,
        ingredient_id,
        request,
    )?))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}/inventory/{ingredient_id}",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 204, description = "Inventory item removed"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Inventory item not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn remove_inventory_item(
    State(pool): State<AppState>,
    Path((id, ingredient_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::inventory::remove(&mut conn, id, ingredient_id)?;
    Ok(StatusCode::NO_CONTENT)
}
