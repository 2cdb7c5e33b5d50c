use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::Task;
use crate::repo::{self, tasks::TaskFilter};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTasksParams {
    /// Only tasks in this project
    pub project_id: Option<Uuid>,
    /// Only tasks assigned to this employee
    pub employee_id: Option<Uuid>,
    /// Exact match on the task status
    pub status: Option<String>,
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListTasksResponse {
    pub tasks: Vec<Task>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "tasks",
    params(ListTasksParams),
    responses(
        (status = 200, description = "Tasks ordered by creation time, newest first", body = ListTasksResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_tasks(
    State(pool): State<AppState>,
    Query(params): Query<ListTasksParams>,
) -> Result<Json<ListTasksResponse>, ApiError> {
    let (limit, offset) = PageParams {
        limit: params.limit,
        offset: params.offset,
    }
    .clamp();

    let filter = TaskFilter {
        project_id: params.project_id,
        employee_id: params.employee_id,
        status: params.status,
    };

    let mut conn = pool.get()?;
    let (tasks, total) = repo::tasks::list(&mut conn, filter, limit, offset)?;

    Ok(Json(ListTasksResponse {
        tasks,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
