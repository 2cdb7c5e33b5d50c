pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod members;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/groups endpoints (mounted at /api/groups)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_groups).post(create::create_group))
        .route(
            "/{id}",
            get(get::get_group)
                .put(update::update_group)
                .delete(delete::delete_group),
        )
        .route(
            "/{id}/members",
            get(members::list_members).post(members::add_member),
        )
        .route(
            "/{id}/members/{user_id}",
            axum::routing::delete(members::remove_member),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_group,
        list::list_groups,
        get::get_group,
        update::update_group,
        delete::delete_group,
        members::list_members,
        members::add_member,
        members::remove_member,
    ),
    components(schemas(
        crate::models::Group,
        crate::models::NewGroup,
        crate::models::GroupChanges,
        crate::models::UserGroup,
        list::ListGroupsResponse,
        members::MembersResponse,
        members::AddMemberRequest,
    ))
)]
pub struct ApiDoc;
