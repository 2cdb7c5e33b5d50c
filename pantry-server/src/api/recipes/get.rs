use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::Recipe;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = Recipe),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_recipe(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Recipe>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::recipes::get(&mut conn, id)?))
}
