use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{Ingredient, IngredientChanges};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/ingredients/{id}",
    tag = "ingredients",
    params(
        ("id" = Uuid, Path, description = "Ingredient ID")
    ),
    request_body = IngredientChanges,
    responses(
        (status = 200, description = "Ingredient updated", body = Ingredient),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Ingredient or referenced category not found", body = ErrorResponse),
        (status = 409, description = "Ingredient name already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_ingredient(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<IngredientChanges>,
) -> Result<Json<Ingredient>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(name) = &changes.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name cannot be empty"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::ingredients::update(&mut conn, id, changes)?))
}
