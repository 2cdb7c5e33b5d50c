use axum::{extract::State, http::StatusCode, Json};
use mesa_core::{ApiError, ErrorResponse};

use crate::models::{NewRole, Role};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/roles",
    tag = "roles",
    request_body = NewRole,
    responses(
        (status = 201, description = "Role created", body = Role),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Role name already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_role(
    State(pool): State<AppState>,
    Json(request): Json<NewRole>,
) -> Result<(StatusCode, Json<Role>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }

    let mut conn = pool.get()?;
    let role = repo::roles::create(&mut conn, request)?;
    Ok((StatusCode::CREATED, Json(role)))
}
