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
    path = "/api/categories/{id}",
    tag = "categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Category still referenced", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn delete_category(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::categories::delete(&mut conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
