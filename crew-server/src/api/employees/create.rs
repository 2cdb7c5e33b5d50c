use axum::{extract::State, http::StatusCode, Json};
use mesa_core::{ApiError, ErrorResponse};

use crate::models::{Employee, NewEmployee};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Email already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_employee(
    State(pool): State<AppState>,
    Json(request): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }
    if !request.email.contains('@') {
        return Err(ApiError::validation("email must be a valid address"));
    }

    let mut conn = pool.get()?;
    let employee = repo::employees::create(&mut conn, request)?;
    Ok((StatusCode::CREATED, Json(employee)))
}
