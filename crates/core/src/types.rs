/// Primary key of the `employees` table (PostgreSQL `INTEGER`).
pub type EmployeeId = i32;
