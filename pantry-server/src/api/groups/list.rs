use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Group;
use crate::repo;
use crate::AppState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListGroupsResponse {
    pub groups: Vec<Group>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/groups",
    tag = "groups",
    params(PageParams),
    responses(
        (status = 200, description = "Groups ordered by name", body = ListGroupsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_groups(
    State(pool): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListGroupsResponse>, ApiError> {
    let (limit, offset) = params.clamp();
    let mut conn = pool.get()?;
    let (groups, total) = repo::groups::list(&mut conn, limit, offset)?;

    Ok(Json(ListGroupsResponse {
        groups,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
