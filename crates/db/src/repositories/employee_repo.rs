//! Repository for the `employees` table.
//!
//! Read-only: the directory never writes employee rows.

use hrdir_core::types::EmployeeId;
use sqlx::PgPool;

use crate::models::employee::Employee;

/// Column list for `employees` queries.
const COLUMNS: &str = "\
    employee_id, first_name, last_name, email, phone_number, \
    job_id, salary, department_id";

/// Provides data access for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// List every employee in the table's natural order.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Find an employee by primary key.
    ///
    /// Returns `None` if no row has that id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EmployeeId,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE employee_id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find employees whose `last_name` contains `fragment`.
    ///
    /// The fragment is wrapped as `%fragment%` and compared with `LIKE`, so
    /// an empty fragment matches every row with a non-null `last_name`.
    /// Rows with a null `last_name` never match.
    pub async fn select_by_name(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employees \
             WHERE last_name LIKE '%' || $1 || '%'"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(fragment)
            .fetch_all(pool)
            .await
    }
}
