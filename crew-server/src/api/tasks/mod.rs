pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/tasks endpoints (mounted at /api/tasks)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_tasks).post(create::create_task))
        .route(
            "/{id}",
            get(get::get_task)
                .put(update::update_task)
                .delete(delete::delete_task),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_task,
        list::list_tasks,
        get::get_task,
        update::update_task,
        delete::delete_task,
    ),
    components(schemas(
        crate::models::Task,
        crate::models::TaskChanges,
        create::CreateTaskRequest,
        list::ListTasksResponse,
    ))
)]
pub struct ApiDoc;
