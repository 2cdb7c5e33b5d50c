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
    path = "/api/shopping-lists/{id}",
    tag = "shopping-lists",
    params(
        ("id" = Uuid, Path, description = "Shopping list ID")
    ),
    responses(
        (status = 204, description = "Shopping list deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Shopping list not found", body = ErrorResponse),
        (status = 409, description = "Shopping list still has items", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn delete_shopping_list(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::shopping_lists::delete(&mut conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
