use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::Ingredient;
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListIngredientsParams {
    /// Only ingredients in this category
    pub category_id: Option<Uuid>,
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListIngredientsResponse {
    pub ingredients: Vec<Ingredient>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = "ingredients",
    params(ListIngredientsParams),
    responses(
        (status = 200, description = "Ingredients ordered by name", body = ListIngredientsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_ingredients(
    State(pool): State<AppState>,
    Query(params): Query<ListIngredientsParams>,
) -> Result<Json<ListIngredientsResponse>, ApiError> {
    let (limit, offset) = PageParams {
        limit: params.limit,
        offset: params.offset,
    }
    .clamp();

    let mut conn = pool.get()?;
    let (ingredients, total) =
        repo::ingredients::list(&mut conn, params.category_id, limit, offset)?;

    Ok(Json(ListIngredientsResponse {
        ingredients,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
