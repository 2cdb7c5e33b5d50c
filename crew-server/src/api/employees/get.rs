use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::Employee;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee details", body = Employee),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_employee(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::employees::get(&mut conn, id)?))
}
