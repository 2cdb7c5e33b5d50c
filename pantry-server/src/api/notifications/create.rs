use axum::{extract::State, http::StatusCode, Json};
use mesa_core::{ApiError, ErrorResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{NewNotification, Notification};
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNotificationRequest {
    pub user_id: Uuid,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = "notifications",
    request_body = CreateNotificationRequest,
    responses(
        (status = 201, description = "Notification recorded", body = Notification),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_notification(
    State(pool): State<AppState>,
    Json(request): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<Notification>), ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::validation("message cannot be empty"));
    }

    let mut conn = pool.get()?;
    let notification = repo::notifications::create(
        &mut conn,
        NewNotification {
            user_id: request.user_id,
            message: request.message,
        },
    )?;
    Ok((StatusCode::CREATED, Json(notification)))
}
