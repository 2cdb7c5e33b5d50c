use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Project;
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListProjectsParams {
    /// Case-insensitive substring match on the project name
    pub q: Option<String>,
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListProjectsResponse {
    pub projects: Vec<Project>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(ListProjectsParams),
    responses(
        (status = 200, description = "Projects ordered by creation time, newest first", body = ListProjectsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_projects(
    State(pool): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> Result<Json<ListProjectsResponse>, ApiError> {
    let (limit, offset) = PageParams {
        limit: params.limit,
        offset: params.offset,
    }
    .clamp();

    let mut conn = pool.get()?;
    let (projects, total) = repo::projects::list(&mut conn, params.q, limit, offset)?;

    Ok(Json(ListProjectsResponse {
        projects,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
