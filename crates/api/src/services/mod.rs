//! Query layer sitting between the HTTP handlers and the data-access layer.

pub mod employee_service;
pub mod logging;

pub use employee_service::{EmployeeQueries, EmployeeService};
pub use logging::Logged;
