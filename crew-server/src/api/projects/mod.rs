pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/projects endpoints (mounted at /api/projects)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_projects).post(create::create_project))
        .route(
            "/{id}",
            get(get::get_project)
                .put(update::update_project)
                .delete(delete::delete_project),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_project,
        list::list_projects,
        get::get_project,
        update::update_project,
        delete::delete_project,
    ),
    components(schemas(
        crate::models::Project,
        crate::models::NewProject,
        crate::models::ProjectChanges,
        list::ListProjectsResponse,
    ))
)]
pub struct ApiDoc;
