use axum::{extract::State, http::StatusCode, Json};
use mesa_core::{ApiError, ErrorResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{NewUser, User};
use crate::passwords;
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    /// Plaintext credential; only its argon2 hash is stored.
    pub password: String,
    pub profile_photo: Option<String>,
    #[serde(default = "default_account_type")]
    pub account_type: String,
    pub role_id: Uuid,
}

fn default_account_type() -> String {
    "standard".to_string()
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Referenced role not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn create_user(
    State(pool): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }
    if request.email.trim().is_empty() || !request.email.contains('@') {
        return Err(ApiError::validation("email must be a valid address"));
    }
    if request.password.is_empty() {
        return Err(ApiError::validation("password cannot be empty"));
    }

    let password_hash = passwords::hash_password(&request.password)?;

    let mut conn = pool.get()?;
    let user = repo::users::create(
        &mut conn,
        NewUser {
            name: request.name,
            email: request.email,
            password_hash,
            profile_photo: request.profile_photo,
            account_type: request.account_type,
            role_id: request.role_id,
        },
    )?;
    Ok((StatusCode::CREATED, Json(user)))
}
