//! Pre-shared API-key gate.
//!
//! A single global credential, injected from configuration, checked on every
//! protected route before any handler or repository code runs. This is not
//! per-resource authorization; a request either holds the key or it doesn't.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::error::ApiError;

/// Header carrying the credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The expected key, wrapped so it can be cloned into middleware state cheaply.
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Arc::from(key.into()))
    }

    /// Constant-time comparison so the gate leaks nothing about key prefixes.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

/// Middleware that rejects any request without a valid `x-api-key` header.
/// Apply with `middleware::from_fn_with_state(api_key, require_api_key)`.
pub async fn require_api_key(
    State(key): State<ApiKey>,
    request: Request,
    next: Next,
) -> Response {
    let header = match request.headers().get(API_KEY_HEADER) {
        Some(h) => h,
        None => return ApiError::Unauthorized("missing x-api-key header").into_response(),
    };

    let candidate = match header.to_str() {
        Ok(v) => v,
        Err(_) => return ApiError::Unauthorized("invalid x-api-key header").into_response(),
    };

    if !key.matches(candidate) {
        return ApiError::Unauthorized("invalid API key").into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;

    fn gated_router(key: &str) -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn_with_state(
                ApiKey::new(key),
                require_api_key,
            ))
    }

    #[tokio::test]
    async fn missing_key_is_unauthorized() {
        let app = gated_router("sekrit");
        let response = app
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_key_is_unauthorized() {
        let app = gated_router("sekrit");
        let response = app
            .oneshot(
                Request::get("/ping")
                    .header(API_KEY_HEADER, "wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn correct_key_passes_through() {
        let app = gated_router("sekrit");
        let response = app
            .oneshot(
                Request::get("/ping")
                    .header(API_KEY_HEADER, "sekrit")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn matches_rejects_prefixes_and_extensions() {
        let key = ApiKey::new("sekrit");
        assert!(key.matches("sekrit"));
        assert!(!key.matches("sekri"));
        assert!(!key.matches("sekrit2"));
        assert!(!key.matches(""));
    }
}
