use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use mesa_core::{ApiError, ErrorResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{NewTask, Task};
use crate::repo;
use crate::AppState;

fn default_status() -> String {
    "open".to_owned()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub project_id: Uuid,
    pub employee_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    /// e.g. "open", "in_progress", "done" (default: "open")
    #[serde(default = "default_status")]
    pub status: String,
}

#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created and assigned", body = Task),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Project or employee not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_task(
    State(pool): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::validation("title cannot be empty"));
    }
    if request.status.trim().is_empty() {
        return Err(ApiError::validation("status cannot be empty"));
    }

    let mut conn = pool.get()?;
    let task = repo::tasks::create(
        &mut conn,
        NewTask {
            project_id: request.project_id,
            employee_id: request.employee_id,
            title: request.title,
            description: request.description,
            deadline: request.deadline,
            status: request.status,
        },
    )?;
    Ok((StatusCode::CREATED, Json(task)))
}
