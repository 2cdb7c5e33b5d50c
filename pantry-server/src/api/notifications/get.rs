use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::Notification;
use crate::repo;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/notifications/{id}",
    tag = "notifications",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification details", body = Notification),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Notification not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn get_notification(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(repo::notifications::get(&mut conn, id)?))
}
