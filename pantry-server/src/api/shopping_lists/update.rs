use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{ShoppingList, ShoppingListChanges};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/shopping-lists/{id}",
    tag = "shopping-lists",
    params(
        ("id" = Uuid, Path, description = "Shopping list ID")
    ),
    request_body = ShoppingListChanges,
    responses(
        (status = 200, description = "Shopping list updated", body = ShoppingList),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Shopping list not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_shopping_list(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<ShoppingListChanges>,
) -> Result<Json<ShoppingList>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::shopping_lists::update(&mut conn, id, changes)?))
}
