//! Logging decorator for [`EmployeeQueries`].
//!
//! Emits one `info` event when a query starts and one when it completes.
//! Failures are logged at `warn` and returned untouched.

use async_trait::async_trait;
use hrdir_core::types::EmployeeId;
use hrdir_db::models::employee::Employee;

use super::EmployeeQueries;

/// Wraps any [`EmployeeQueries`] and records its calls as tracing events.
pub struct Logged<Q> {
    inner: Q,
}

impl<Q: EmployeeQueries> Logged<Q> {
    pub fn new(inner: Q) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<Q: EmployeeQueries> EmployeeQueries for Logged<Q> {
    async fn get_all(&self) -> Result<Vec<Employee>, sqlx::Error> {
        tracing::info!("get_all called");
        let result = self.inner.get_all().await;
        match &result {
            Ok(employees) => tracing::info!(count = employees.len(), "get_all completed"),
            Err(err) => tracing::warn!(error = %err, "get_all failed"),
        }
        result
    }

    async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, sqlx::Error> {
        tracing::info!(employee_id = id, "get_by_id called");
        let result = self.inner.get_by_id(id).await;
        match &result {
            Ok(employee) => tracing::info!(
                employee_id = id,
                found = employee.is_some(),
                "get_by_id completed"
            ),
            Err(err) => tracing::warn!(employee_id = id, error = %err, "get_by_id failed"),
        }
        result
    }

    async fn get_by_name(&self, name: &str) -> Result<Vec<Employee>, sqlx::Error> {
        tracing::info!(fragment = name, "get_by_name called");
        let result = self.inner.get_by_name(name).await;
        match &result {
            Ok(employees) => {
                tracing::info!(fragment = name, count = employees.len(), "get_by_name completed")
            }
            Err(err) => tracing::warn!(fragment = name, error = %err, "get_by_name failed"),
        }
        result
    }
}
