//! Employee queries.
//!
//! [`EmployeeService`] forwards each call to an [`EmployeeStore`] unchanged.
//! Cross-cutting behaviour (see [`crate::services::Logged`]) is layered on by
//! wrapping an [`EmployeeQueries`] implementation.

use async_trait::async_trait;
use hrdir_core::types::EmployeeId;
use hrdir_db::models::employee::Employee;
use hrdir_db::store::EmployeeStore;

/// The three read operations served by the directory.
#[async_trait]
pub trait EmployeeQueries: Send + Sync {
    /// Every employee, in the store's natural order.
    async fn get_all(&self) -> Result<Vec<Employee>, sqlx::Error>;

    /// One employee by id; `Ok(None)` when no such employee exists.
    async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, sqlx::Error>;

    /// Employees whose last name contains `name`.
    async fn get_by_name(&self, name: &str) -> Result<Vec<Employee>, sqlx::Error>;
}

/// Stateless facade over an [`EmployeeStore`].
pub struct EmployeeService<S> {
    store: S,
}

impl<S: EmployeeStore> EmployeeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: EmployeeStore> EmployeeQueries for EmployeeService<S> {
    async fn get_all(&self) -> Result<Vec<Employee>, sqlx::Error> {
        self.store.find_all().await
    }

    async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, sqlx::Error> {
        self.store.find_by_id(id).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Vec<Employee>, sqlx::Error> {
        self.store.select_by_name(name).await
    }
}
