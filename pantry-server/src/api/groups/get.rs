use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::Group;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = "groups",
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group details", body = Group),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_group(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Group>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::groups::get(&mut conn, id)?))
}
