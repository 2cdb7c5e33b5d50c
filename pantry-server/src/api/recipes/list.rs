use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Recipe;
use crate::repo::{self, recipes::RecipeFilter};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Only public (true) or private (false) recipes
    pub is_public: Option<bool>,
    /// Exact match on the difficulty label
    pub difficulty: Option<String>,
    /// Case-insensitive substring match on the recipe name
    pub q: Option<String>,
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<Recipe>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Recipes ordered by creation time, newest first", body = ListRecipesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_recipes(
    State(pool): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> Result<Json<ListRecipesResponse>, ApiError> {
    let (limit, offset) = PageParams {
        limit: params.limit,
        offset: params.offset,
    }
    .clamp();

    let filter = RecipeFilter {
        is_public: params.is_public,
        difficulty: params.difficulty,
        q: params.q,
    };

    let mut conn = pool.get()?;
    let (recipes, total) = repo::recipes::list(&mut conn, filter, limit, offset)?;

    Ok(Json(ListRecipesResponse {
        recipes,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
