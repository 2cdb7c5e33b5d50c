use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::repo;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn delete_task(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::tasks::delete(&mut conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
