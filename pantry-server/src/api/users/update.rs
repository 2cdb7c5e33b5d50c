use axum::{
    extract::{Path, State},
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{User, UserChanges};
use crate::passwords;
use crate::repo;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// New plaintext credential; re-hashed before storage.
    pub password: Option<String>,
    pub profile_photo: Option<String>,
    pub account_type: Option<String>,
    pub role_id: Option<Uuid>,
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User or referenced role not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn update_user(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name cannot be empty"));
        }
    }
    if let Some(email) = &request.email {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(ApiError::validation("email must be a valid address"));
        }
    }

    let password_hash = match &request.password {
        Some(password) if password.is_empty() => {
            return Err(ApiError::validation("password cannot be empty"));
        }
        Some(password) => Some(passwords::hash_password(password)?),
        None => None,
    };

    let changes = UserChanges {
        name: request.name,
        email: request.email,
        password_hash,
        profile_photo: request.profile_photo,
        account_type: request.account_type,
        role_id: request.role_id,
    };
    if changes.is_empty() {
        return Err(ApiError::validation("at least one field must be provided"));
    }

    let mut conn = pool.get()?;
    Ok(Json(repo::users::update(&mut conn, id, changes)?))
}
