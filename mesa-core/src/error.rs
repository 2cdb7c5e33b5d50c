//! The error taxonomy shared by both services.
//!
//! Repository functions return [`ApiError`] directly; handlers bubble it up
//! with `?` and axum turns it into a structured JSON response. Each variant
//! maps to exactly one HTTP status and one machine-readable `code`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::result::DatabaseErrorKind;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Shared error body used by all endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable classification code (`validation_error`, `not_found`,
    /// `conflict`, `unauthorized`, `server_error`).
    pub code: String,
    /// Human-readable description.
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("database error: {0}")]
    Database(diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// `what` is the entity name, e.g. `not_found("recipe")` renders as
    /// "recipe not found".
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Pool(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Unauthorized(_) => "unauthorized",
            Self::Database(_) | Self::Pool(_) => "server_error",
        }
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::NotFound => Self::NotFound("resource".to_string()),
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::Conflict(info.message().to_string())
            }
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                Self::Conflict(info.message().to_string())
            }
            other => Self::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Storage failures are logged server-side and surfaced as an opaque
        // server_error; everything else carries its own message.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (
            status,
            Json(ErrorResponse {
                code: self.code().to_string(),
                error: message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_maps_to_a_distinct_classification() {
        let cases = [
            (
                ApiError::validation("name cannot be empty"),
                StatusCode::BAD_REQUEST,
                "validation_error",
            ),
            (
                ApiError::not_found("recipe"),
                StatusCode::NOT_FOUND,
                "not_found",
            ),
            (
                ApiError::conflict("email already in use"),
                StatusCode::CONFLICT,
                "conflict",
            ),
            (
                ApiError::Unauthorized("missing x-api-key header"),
                StatusCode::UNAUTHORIZED,
                "unauthorized",
            ),
            (
                ApiError::Database(diesel::result::Error::RollbackTransaction),
                StatusCode::INTERNAL_SERVER_ERROR,
                "server_error",
            ),
        ];

        for (err, status, code) in cases {
            assert_eq!(err.status(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn diesel_not_found_becomes_not_found() {
        let err = ApiError::from(diesel::result::Error::NotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_found_message_names_the_entity() {
        assert_eq!(ApiError::not_found("plan").to_string(), "plan not found");
    }
}
