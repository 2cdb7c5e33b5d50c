pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/employees endpoints (mounted at /api/employees)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list::list_employees).post(create::create_employee),
        )
        .route(
            "/{id}",
            get(get::get_employee)
                .put(update::update_employee)
                .delete(delete::delete_employee),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_employee,
        list::list_employees,
        get::get_employee,
        update::update_employee,
        delete::delete_employee,
    ),
    components(schemas(
        crate::models::Employee,
        crate::models::NewEmployee,
        crate::models::EmployeeChanges,
        list::ListEmployeesResponse,
    ))
)]
pub struct ApiDoc;
