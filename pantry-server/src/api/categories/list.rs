use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Category;
use crate::repo;
use crate::AppState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListCategoriesResponse {
    pub categories: Vec<Category>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    params(PageParams),
    responses(
        (status = 200, description = "Categories ordered by name", body = ListCategoriesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_categories(
    State(pool): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListCategoriesResponse>, ApiError> {
    let (limit, offset) = params.clamp();
    let mut conn = pool.get()?;
    let (categories, total) = repo::categories::list(&mut conn, limit, offset)?;

    Ok(Json(ListCategoriesResponse {
        categories,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
