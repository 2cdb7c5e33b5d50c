//! Shared plumbing for the mesa services: the error taxonomy every handler
//! speaks, the API-key gate, and pagination types used by list endpoints.

pub mod auth;
pub mod error;
pub mod pagination;

pub use error::{ApiError, ErrorResponse};
