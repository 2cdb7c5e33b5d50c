//! Handlers for a recipe's ingredient list (/api/recipes/{id}/ingredients).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Ingredient, NewRecipeIngredient, RecipeIngredient, RecipeIngredientChanges, Unit};
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddRecipeIngredientRequest {
    pub ingredient_id: Uuid,
    /// Free-form amount, e.g. "200" or "1/2"
    pub quantity: String,
    pub unit_id: Uuid,
}

/// A join row resolved against the ingredient and unit it points at.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeIngredientEntry {
    pub ingredient: Ingredient,
    pub quantity: String,
    pub unit: Unit,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeIngredientsResponse {
    pub ingredients: Vec<RecipeIngredientEntry>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/ingredients",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = AddRecipeIngredientRequest,
    responses(
        (status = 201, description = "Ingredient added to the recipe", body = RecipeIngredient),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe, ingredient or unit not found", body = ErrorResponse),
        (status = 409, description = "Ingredient already part of the recipe", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn add_recipe_ingredient(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddRecipeIngredientRequest>,
) -> Result<(StatusCode, Json<RecipeIngredient>), ApiError> {
    if request.quantity.trim().is_empty() {
        return Err(ApiError::validation("quantity cannot be empty"));
    }

    let mut conn = pool.get()?;
    let row = repo::recipes::add_ingredient(
        &mut conn,
        NewRecipeIngredient {
            recipe_id: id,
            ingredient_id: request.ingredient_id,
            quantity: request.quantity,
            unit_id: request.unit_id,
        },
    )?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/ingredients",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Ingredients with quantities and units", body = RecipeIngredientsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_recipe_ingredients(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecipeIngredientsResponse>, ApiError> {
    let mut conn = pool.get()?;
    let rows = repo::recipes::list_ingredients(&mut conn, id)?;
    Ok(Json(RecipeIngredientsResponse {
        ingredients: rows
            .into_iter()
            .map(|(link, ingredient, unit)| RecipeIngredientEntry {
                ingredient,
                quantity: link.quantity,
                unit,
            })
            .collect(),
    }))
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}/ingredients/{ingredient_id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID")
    ),
    request_body = RecipeIngredientChanges,
    responses(
        (status = 200, description = "Quantity or unit updated", body = RecipeIngredient),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe ingredient or unit not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_recipe_ingredient(
    State(pool): State<AppState>,
    Path((id, ingredient_id)): Path<(Uuid, Uuid)>,
    Json(changes): Json<RecipeIngredientChanges>,
) -> Result<Json<RecipeIngredient>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(quantity) = &changes.quantity {
        if quantity.trim().is_empty() {
            return Err(ApiError::validation("quantity cannot be empty"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::recipes::update_ingredient(
        &mut conn,
        id,
        ingredient_id,
        changes,
    )?))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/ingredients/{ingredient_id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 204, description = "Ingredient removed from the recipe"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe ingredient not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn remove_recipe_ingredient(
    State(pool): State<AppState>,
    Path((id, ingredient_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::recipes::remove_ingredient(&mut conn, id, ingredient_id)?;
    Ok(StatusCode::NO_CONTENT)
}
