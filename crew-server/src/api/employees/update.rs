use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{Employee, EmployeeChanges};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    request_body = EmployeeChanges,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 409, description = "Email already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_employee(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<EmployeeChanges>,
) -> Result<Json<Employee>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(name) = &changes.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name cannot be empty"));
        }
    }
    if let Some(email) = &changes.email {
        if !email.contains('@') {
            return Err(ApiError::validation("email must be a valid address"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::employees::update(&mut conn, id, changes)?))
}
