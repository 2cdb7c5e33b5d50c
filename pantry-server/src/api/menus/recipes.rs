//! Handlers for a menu's recipe links (/api/menus/{id}/recipes).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Recipe;
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMenuRecipeRequest {
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MenuRecipesResponse {
    pub recipes: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/api/menus/{id}/recipes",
    tag = "menus",
    params(
        ("id" = Uuid, Path, description = "Menu ID")
    ),
    request_body = AddMenuRecipeRequest,
    responses(
        (status = 201, description = "Recipe added to the menu"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Menu or recipe not found", body = ErrorResponse),
        (status = 409, description = "Recipe already on the menu", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn add_menu_recipe(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddMenuRecipeRequest>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::menus::add_recipe(&mut conn, id, request.recipe_id)?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/api/menus/{id}/recipes",
    tag = "menus",
    params(
        ("id" = Uuid, Path, description = "Menu ID")
    ),
    responses(
        (status = 200, description = "Recipes on the menu", body = MenuRecipesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Menu not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_menu_recipes(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MenuRecipesResponse>, ApiError> {
    let mut conn = pool.get()?;
    let recipes = repo::menus::list_recipes(&mut conn, id)?;
    Ok(Json(MenuRecipesResponse { recipes }))
}

#[utoipa::path(
    delete,
    path = "/api/menus/{id}/recipes/{recipe_id}",
    tag = "menus",
    params(
        ("id" = Uuid, Path, description = "Menu ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe removed from the menu"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Menu recipe link not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn remove_menu_recipe(
    State(pool): State<AppState>,
    Path((id, recipe_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::menus::remove_recipe(&mut conn, id, recipe_id)?;
    Ok(StatusCode::NO_CONTENT)
}
