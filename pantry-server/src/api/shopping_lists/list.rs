use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::ShoppingList;
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListShoppingListsParams {
    /// Only lists belonging to this user
    pub user_id: Option<Uuid>,
    /// Only completed (true) or open (false) lists
    pub completed: Option<bool>,
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListShoppingListsResponse {
    pub shopping_lists: Vec<ShoppingList>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/shopping-lists",
    tag = "shopping-lists",
    params(ListShoppingListsParams),
    responses(
        (status = 200, description = "Shopping lists, newest first", body = ListShoppingListsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_shopping_lists(
    State(pool): State<AppState>,
    Query(params): Query<ListShoppingListsParams>,
) -> Result<Json<ListShoppingListsResponse>, ApiError> {
    let (limit, offset) = PageParams {
        limit: params.limit,
        offset: params.offset,
    }
    .clamp();

    let mut conn = pool.get()?;
    let (shopping_lists, total) = repo::shopping_lists::list(
        &mut conn,
        params.user_id,
        params.completed,
        limit,
        offset,
    )?;

    Ok(Json(ListShoppingListsResponse {
        shopping_lists,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
