//! Employee entity.

use hrdir_core::types::EmployeeId;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `employees` table.
///
/// Field names serialize in camelCase (`employeeId`, `firstName`, ...), which
/// is the public JSON shape of the directory API. Every column is nullable at
/// the type level; rows read from the table always carry `employee_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: Option<EmployeeId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub job_id: Option<String>,
    /// `NUMERIC` salary, written to JSON as an exact number.
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub salary: Option<Decimal>,
    pub department_id: Option<i32>,
}
