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
    path = "/api/menus/{id}",
    tag = "menus",
    params(
        ("id" = Uuid, Path, description = "Menu ID")
    ),
    responses(
        (status = 204, description = "Menu deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Menu not found", body = ErrorResponse),
        (status = 409, description = "Menu still has recipes", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn delete_menu(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::menus::delete(&mut conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
