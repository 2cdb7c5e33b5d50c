pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/notifications endpoints (mounted at /api/notifications)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list::list_notifications).post(create::create_notification),
        )
        .route(
            "/{id}",
            get(get::get_notification)
                .put(update::update_notification)
                .delete(delete::delete_notification),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_notification,
        list::list_notifications,
        get::get_notification,
        update::update_notification,
        delete::delete_notification,
    ),
    components(schemas(
        crate::models::Notification,
        crate::models::NotificationChanges,
        create::CreateNotificationRequest,
        list::ListNotificationsResponse,
    ))
)]
pub struct ApiDoc;
