use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{Recipe, RecipeChanges};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = RecipeChanges,
    responses(
        (status = 200, description = "Recipe updated", body = Recipe),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_recipe(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<RecipeChanges>,
) -> Result<Json<Recipe>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(name) = &changes.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name cannot be empty"));
        }
    }
    if let Some(instructions) = &changes.instructions {
        if instructions.trim().is_empty() {
            return Err(ApiError::validation("instructions cannot be empty"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::recipes::update(&mut conn, id, changes)?))
}
