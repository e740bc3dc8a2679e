//! Route definitions for `/api/v1/companies/{companyId}/employees`.

use axum::routing::get;
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

/// Employee routes mounted under a company.
///
/// ```text
/// GET     /         -> get_employees
/// POST    /         -> create_employee
/// OPTIONS /         -> get_employees_options
/// GET     /{id}     -> get_employee
/// PUT     /{id}     -> update_employee
/// PATCH   /{id}     -> partially_update_employee
/// DELETE  /{id}     -> delete_employee
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employees::get_employees)
                .post(employees::create_employee)
                .options(employees::get_employees_options),
        )
        .route(
            "/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .patch(employees::partially_update_employee)
                .delete(employees::delete_employee),
        )
}
