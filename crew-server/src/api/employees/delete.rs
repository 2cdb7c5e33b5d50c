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
    path = "/api/employees/{id}",
    tag = "employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 409, description = "Employee still has assigned tasks", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn delete_employee(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::employees::delete(&mut conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
