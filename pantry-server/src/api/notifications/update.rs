use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use uuid::Uuid;

use crate::models::{Notification, NotificationChanges};
use crate::repo;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/notifications/{id}",
    tag = "notifications",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    request_body = NotificationChanges,
    responses(
        (status = 200, description = "Notification updated", body = Notification),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Notification not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_notification(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<NotificationChanges>,
) -> Result<Json<Notification>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }
    if let Some(message) = &changes.message {
        if message.trim().is_empty() {
            return Err(ApiError::validation("message cannot be empty"));
        }
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::notifications::update(&mut conn, id, changes)?))
}
