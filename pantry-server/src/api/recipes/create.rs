use axum::{extract::State, http::StatusCode, Json};
use mesa_core::{ApiError, ErrorResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{NewRecipe, Recipe};
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    /// User who will own the new recipe
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub instructions: String,
    pub difficulty: Option<String>,
    pub prep_time_minutes: Option<i32>,
    #[serde(default)]
    pub is_public: bool,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created with the caller as owner", body = Recipe),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Owner not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_recipe(
    State(pool): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }
    if request.instructions.trim().is_empty() {
        return Err(ApiError::validation("instructions cannot be empty"));
    }

    let mut conn = pool.get()?;
    let recipe = repo::recipes::create(
        &mut conn,
        request.owner_id,
        NewRecipe {
            name: request.name,
            description: request.description,
            instructions: request.instructions,
            difficulty: request.difficulty,
            prep_time_minutes: request.prep_time_minutes,
            is_public: request.is_public,
        },
    )?;
    Ok((StatusCode::CREATED, Json(recipe)))
}
