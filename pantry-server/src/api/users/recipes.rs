use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Recipe;
use crate::repo;
use crate::AppState;

/// A recipe visible to a user, with their ownership flag from `user_recipes`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SharedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub is_owner: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserRecipesResponse {
    pub recipes: Vec<SharedRecipe>,
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/recipes",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Recipes owned by or shared with the user", body = UserRecipesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_user_recipes(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserRecipesResponse>, ApiError> {
    let mut conn = pool.get()?;
    let recipes = repo::recipes::list_for_user(&mut conn, id)?
        .into_iter()
        .map(|(recipe, is_owner)| SharedRecipe { recipe, is_owner })
        .collect();
    Ok(Json(UserRecipesResponse { recipes }))
}
