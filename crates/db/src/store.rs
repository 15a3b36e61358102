//! Trait seam over the employee repository.
//!
//! The query layer depends on [`EmployeeStore`] rather than on a pool so it
//! can be exercised against in-memory stores.

use async_trait::async_trait;
use hrdir_core::types::EmployeeId;

use crate::models::employee::Employee;
use crate::repositories::EmployeeRepo;
use crate::DbPool;

/// Read access to employee records.
///
/// Absence from [`EmployeeStore::find_by_id`] is `Ok(None)`. Every other
/// failure is returned as the underlying `sqlx::Error`.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, sqlx::Error>;
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, sqlx::Error>;
    async fn select_by_name(&self, fragment: &str) -> Result<Vec<Employee>, sqlx::Error>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: DbPool,
}

impl PgEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn find_all(&self) -> Result<Vec<Employee>, sqlx::Error> {
        let rows = EmployeeRepo::find_all(&self.pool).await?;
        trace_rows(&rows);
        Ok(rows)
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, sqlx::Error> {
        let row = EmployeeRepo::find_by_id(&self.pool, id).await?;
        trace_rows(row.as_slice());
        Ok(row)
    }

    async fn select_by_name(&self, fragment: &str) -> Result<Vec<Employee>, sqlx::Error> {
        let rows = EmployeeRepo::select_by_name(&self.pool, fragment).await?;
        trace_rows(&rows);
        Ok(rows)
    }
}

/// Per-row diagnostics, only emitted when `trace` is enabled for this crate.
fn trace_rows(rows: &[Employee]) {
    if tracing::enabled!(tracing::Level::TRACE) {
        for row in rows {
            tracing::trace!(employee = ?row, "Materialized employee row");
        }
    }
}
