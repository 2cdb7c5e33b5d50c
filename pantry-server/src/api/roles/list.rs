use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Role;
use crate::repo;
use crate::AppState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRolesResponse {
    pub roles: Vec<Role>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/roles",
    tag = "roles",
    params(PageParams),
    responses(
        (status = 200, description = "Roles ordered by name", body = ListRolesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_roles(
    State(pool): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListRolesResponse>, ApiError> {
    let (limit, offset) = params.clamp();
    let mut conn = pool.get()?;
    let (roles, total) = repo::roles::list(&mut conn, limit, offset)?;

    Ok(Json(ListRolesResponse {
        roles,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
