use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::Task;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task details", body = Task),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_task(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Task>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::tasks::get(&mut conn, id)?))
}
