use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::Role;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    tag = "roles",
    params(
        ("id" = Uuid, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role details", body = Role),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_role(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Role>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::roles::get(&mut conn, id)?))
}
