use axum::{response::IntoResponse, Json};
use mesa_core::ErrorResponse;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/test/ping",
    tag = "testing",
    responses(
        (status = 200, description = "Authenticated ping response", body = PingResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("api_key" = [])
    )
)]
pub async fn ping() -> impl IntoResponse {
    Json(PingResponse {
        message: "ping".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/test/unauthed-ping",
    tag = "testing",
    responses(
        (status = 200, description = "Unauthenticated ping response", body = PingResponse)
    )
)]
pub async fn unauthed_ping() -> impl IntoResponse {
    Json(PingResponse {
        message: "ping".to_string(),
    })
}
