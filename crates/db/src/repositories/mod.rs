//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod employee_repo;

pub use employee_repo::EmployeeRepo;
