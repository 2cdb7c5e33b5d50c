pub mod ping;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for authenticated /api/test endpoints (mounted at /api/test)
pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(ping::ping))
}

/// Returns the router for /api/test endpoints served without authentication
/// (mounted at /api/test)
pub fn public_router() -> Router<AppState> {
    Router::new().route("/unauthed-ping", get(ping::unauthed_ping))
}

#[derive(OpenApi)]
#[openapi(
    paths(ping::ping, ping::unauthed_ping),
    components(schemas(ping::PingResponse))
)]
pub struct ApiDoc;
