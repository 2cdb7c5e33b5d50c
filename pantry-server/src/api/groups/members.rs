use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mesa_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{User, UserGroup};
use crate::repo;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMemberRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MembersResponse {
    pub members: Vec<User>,
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}/members",
    tag = "groups",
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group members ordered by name", body = MembersResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn list_members(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MembersResponse>, ApiError> {
    let mut conn = pool.get()?;
    let members = repo::groups::list_members(&mut conn, id)?;
    Ok(Json(MembersResponse { members }))
}

#[utoipa::path(
    post,
    path = "/api/groups/{id}/members",
    tag = "groups",
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Member added", body = UserGroup),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Group or user not found", body = ErrorResponse),
        (status = 409, description = "User is already a member", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn add_member(
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<UserGroup>), ApiError> {
    let mut conn = pool.get()?;
    let membership = repo::groups::add_member(&mut conn, id, request.user_id)?;
    Ok((StatusCode::CREATED, Json(membership)))
}

#[utoipa::path(
    delete,
    path = "/api/groups/{id}/members/{user_id}",
    tag = "groups",
    params(
        ("id" = Uuid, Path, description = "Group ID"),
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Membership not found", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
pub async fn remove_member(
    State(pool): State<AppState>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get()?;
    repo::groups::remove_member(&mut conn, id, user_id)?;
    Ok(StatusCode::NO_CONTENT)
}
