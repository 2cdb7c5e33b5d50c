//! Handlers for recipe ownership and sharing (/api/recipes/{id}/owners).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{NewUserRecipe, UserRecipe};
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddRecipeOwnerRequest {
    pub user_id: Uuid,
    /// True grants ownership, false grants shared read access
    #[serde(default)]
    pub is_owner: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRecipeOwnerRequest {
    /// True grants ownership, false demotes to shared read access
    pub is_owner: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeOwnersResponse {
    pub owners: Vec<UserRecipe>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/owners",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = AddRecipeOwnerRequest,
    responses(
        (status = 201, description = "Recipe shared with the user", body = UserRecipe),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe or user not found", body = ErrorResponse),
        (status = 409, description = "Recipe already shared with the user", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn add_recipe_owner(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddRecipeOwnerRequest>,
) -> Result<(StatusCode, Json<UserRecipe>), ApiError> {
    let mut conn = pool.get()?;
    let row = repo::recipes::add_owner(
        &mut conn,
        NewUserRecipe {
            user_id: request.user_id,
            recipe_id: id,
            is_owner: request.is_owner,
        },
    )?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/owners",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Users the recipe is shared with", body = RecipeOwnersResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_recipe_owners(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecipeOwnersResponse>, ApiError> {
    let mut conn = pool.get()?;
    let owners = repo::recipes::list_owners(&mut conn, id)?;
    Ok(Json(RecipeOwnersResponse { owners }))
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}/owners/{user_id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateRecipeOwnerRequest,
    responses(
        (status = 200, description = "Ownership flag updated", body = UserRecipe),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe share not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_recipe_owner(
    State(pool): State<AppState>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateRecipeOwnerRequest>,
) -> Result<Json<UserRecipe>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::recipes::update_owner(
        &mut conn,
        id,
        user_id,
        request.is_owner,
    )?))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/owners/{user_id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Share removed"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe share not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn remove_recipe_owner(
    State(pool): State<AppState>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::recipes::remove_owner(&mut conn, id, user_id)?;
    Ok(StatusCode::NO_CONTENT)
}
