//! Handlers for a recipe's category links (/api/recipes/{id}/categories).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Category;
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddRecipeCategoryRequest {
    pub category_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeCategoriesResponse {
    pub categories: Vec<Category>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/categories",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = AddRecipeCategoryRequest,
    responses(
        (status = 201, description = "Category linked to the recipe"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe or category not found", body = ErrorResponse),
        (status = 409, description = "Category already linked", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn add_recipe_category(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddRecipeCategoryRequest>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::recipes::add_category(&mut conn, id, request.category_id)?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/categories",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Categories linked to the recipe", body = RecipeCategoriesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_recipe_categories(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecipeCategoriesResponse>, ApiError> {
    let mut conn = pool.get()?;
    let categories = repo::recipes::list_categories(&mut conn, id)?;
    Ok(Json(RecipeCategoriesResponse { categories }))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/categories/{category_id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category unlinked from the recipe"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe category link not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn remove_recipe_category(
    State(pool): State<AppState>,
    Path((id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::recipes::remove_category(&mut conn, id, category_id)?;
    Ok(StatusCode::NO_CONTENT)
}
