//! Handlers for the employee directory.
//!
//! Bodies are bare JSON (no envelope) so the camelCase employee fields are the
//! response contract.

use axum::extract::{Path, Query, State};
use axum::Json;
use hrdir_core::error::CoreError;
use hrdir_core::types::EmployeeId;
use hrdir_db::models::employee::Employee;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /employees/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: String,
}

/// GET /employees
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.get_all().await?;
    Ok(Json(employees))
}

/// GET /employees/{id}
///
/// Responds 404 with an empty body when no employee has this id.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<EmployeeId>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .get_by_id(employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: employee_id,
        }))?;

    Ok(Json(employee))
}

/// GET /employees/search?name=
///
/// Partial match on last name. A missing `name` is rejected by the `Query`
/// extractor before this runs.
pub async fn search_employees(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.get_by_name(&params.name).await?;
    Ok(Json(employees))
}
