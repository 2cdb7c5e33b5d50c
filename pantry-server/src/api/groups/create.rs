use axum::{extract::State, http::StatusCode, Json};
use mesa_core::{ApiError, ErrorResponse};

use crate::models::{Group, NewGroup};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/groups",
    tag = "groups",
    request_body = NewGroup,
    responses(
        (status = 201, description = "Group created", body = Group),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Group name already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_group(
    State(pool): State<AppState>,
    Json(request): Json<NewGroup>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }

    let mut conn = pool.get()?;
    let group = repo::groups::create(&mut conn, request)?;
    Ok((StatusCode::CREATED, Json(group)))
}
