//! Route definitions for the employee directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

/// Employee routes.
///
/// ```text
/// GET /employees              -> list_employees
/// GET /employees/search?name= -> search_employees
/// GET /employees/{id}         -> get_employee
/// ```
///
/// `/employees/search` is a literal segment and takes precedence over `{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employees", get(employees::list_employees))
        .route("/employees/search", get(employees::search_employees))
        .route("/employees/{id}", get(employees::get_employee))
}
