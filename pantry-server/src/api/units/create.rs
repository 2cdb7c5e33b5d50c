use axum::{extract::State, http::StatusCode, Json};
use mesa_core::{ApiError, ErrorResponse};

use crate::models::{NewUnit, Unit};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/units",
    tag = "units",
    request_body = NewUnit,
    responses(
        (status = 201, description = "Unit created", body = Unit),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Unit name already taken", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_unit(
    State(pool): State<AppState>,
    Json(request): Json<NewUnit>,
) -> Result<(StatusCode, Json<Unit>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }

    let mut conn = pool.get()?;
    let unit = repo::units::create(&mut conn, request)?;
    Ok((StatusCode::CREATED, Json(unit)))
}
