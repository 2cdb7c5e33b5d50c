use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{Task, TaskChanges};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = TaskChanges,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Task, project or employee not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_task(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<TaskChanges>,
) -> Result<Json<Task>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(title) = &changes.title {
        if title.trim().is_empty() {
            return Err(ApiError::validation("title cannot be empty"));
        }
    }
    if let Some(status) = &changes.status {
        if status.trim().is_empty() {
            return Err(ApiError::validation("status cannot be empty"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::tasks::update(&mut conn, id, changes)?))
}
