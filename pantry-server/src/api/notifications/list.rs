use axum::{
    extract::{Query, State},
    Json,
};
use mesa_core::pagination::{PageParams, PaginationMetadata};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::Notification;
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListNotificationsParams {
    /// Only notifications for this user
    pub user_id: Option<Uuid>,
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListNotificationsResponse {
    pub notifications: Vec<Notification>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "notifications",
    params(ListNotificationsParams),
    responses(
        (status = 200, description = "Notifications, newest first", body = ListNotificationsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_notifications(
    State(pool): State<AppState>,
    Query(params): Query<ListNotificationsParams>,
) -> Result<Json<ListNotificationsResponse>, ApiError> {
    let (limit, offset) = PageParams {
        limit: params.limit,
        offset: params.offset,
    }
    .clamp();

    let mut conn = pool.get()?;
    let (notifications, total) =
        repo::notifications::list(&mut conn, params.user_id, limit, offset)?;

    Ok(Json(ListNotificationsResponse {
        notifications,
        pagination: PaginationMetadata {
            total,
            limit,
            offset,
        },
    }))
}
