//! Handlers for a shopping list's items (/api/shopping-lists/{id}/items).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Ingredient, ListIngredient, ListIngredientChanges, NewListIngredient};
use crate::repo;
use crate::AppState;

fn default_status() -> String {
    "pending".to_owned()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddListItemRequest {
    pub ingredient_id: Uuid,
    pub quantity: Option<String>,
    pub unit_id: Option<Uuid>,
    /// "pending" or "purchased" (default: "pending")
    #[serde(default = "default_status")]
    pub status: String,
}

/// A list item resolved against the ingredient it points at.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListItemEntry {
    pub ingredient: Ingredient,
    pub quantity: Option<String>,
    pub unit_id: Option<Uuid>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListItemsResponse {
    pub items: Vec<ListItemEntry>,
}

#[utoipa::path(
    post,
    path = "/api/shopping-lists/{id}/items",
    tag = "shopping-lists",
    params(
        ("id" = Uuid, Path, description = "Shopping list ID")
    ),
    request_body = AddListItemRequest,
    responses(
        (status = 201, description = "Item added to the list", body = ListIngredient),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Shopping list, ingredient or unit not found", body = ErrorResponse),
        (status = 409, description = "Ingredient already on the list", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn add_shopping_list_item(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddListItemRequest>,
) -> Result<(StatusCode, Json<ListIngredient>), ApiError> {
    if request.status.trim().is_empty() {
        return Err(ApiError::validation("status cannot be empty"));
    }

    let mut conn = pool.get()?;
    let item = repo::shopping_lists::add_item(
        &mut conn,
        NewListIngredient {
            shopping_list_id: id,
            ingredient_id: request.ingredient_id,
            quantity: request.quantity,
            unit_id: request.unit_id,
            status: request.status,
        },
    )?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get,
    path = "/api/shopping-lists/{id}/items",
    tag = "shopping-lists",
    params(
        ("id" = Uuid, Path, description = "Shopping list ID")
    ),
    responses(
        (status = 200, description = "Items on the list, ordered by ingredient name", body = ListItemsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Shopping list not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_shopping_list_items(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ListItemsResponse>, ApiError> {
    let mut conn = pool.get()?;
    let rows = repo::shopping_lists::list_items(&mut conn, id)?;
    Ok(Json(ListItemsResponse {
        items: rows
            .into_iter()
            .map(|(item, ingredient)| ListItemEntry {
                ingredient,
                quantity: item.quantity,
                unit_id: item.unit_id,
                status: item.status,
            })
            .collect(),
    }))
}

#[utoipa::path(
    put,
    path = "/api/shopping-lists/{id}/items/{ingredient_id}",
    tag = "shopping-lists",
    params(
        ("id" = Uuid, Path, description = "Shopping list ID"),
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID")
    ),
    request_body = ListIngredientChanges,
    responses(
        (status = 200, description = "Item updated", body = ListIngredient),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "List item or unit not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_shopping_list_item(
    State(pool): State<AppState>,
    Path((id, ingredient_id)): Path<(Uuid, Uuid)>,
    Json(changes): Json<ListIngredientChanges>,
) -> Result<Json<ListIngredient>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(status) = &changes.status {
        if status.trim().is_empty() {
            return Err(ApiError::validation("status cannot be empty"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::shopping_lists::update_item(
        &mut conn,
        id,
        ingredient_id,
        changes,
    )?))
}

#[utoipa::path(
    delete,
    path = "/api/shopping-lists/{id}/items/{ingredient_id}",
    tag = "shopping-lists",
    params(
        ("id" = Uuid, Path, description = "Shopping list ID"),
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 204, description = "Item removed from the list"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "List item not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn remove_shopping_list_item(
    State(pool): State<AppState>,
    Path((id, ingredient_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::shopping_lists::remove_item(&mut conn, id, ingredient_id)?;
    Ok(StatusCode::NO_CONTENT)
}
