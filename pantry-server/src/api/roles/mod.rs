pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/roles endpoints (mounted at /api/roles)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_roles).post(create::create_role))
        .route(
            "/{id}",
            get(get::get_role)
                .put(update::update_role)
                .delete(delete::delete_role),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_role,
        list::list_roles,
        get::get_role,
        update::update_role,
        delete::delete_role,
    ),
    components(schemas(
        crate::models::Role,
        crate::models::NewRole,
        crate::models::RoleChanges,
        list::ListRolesResponse,
    ))
)]
pub struct ApiDoc;
