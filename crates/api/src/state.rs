use std::sync::Arc;

use hrdir_db::store::PgEmployeeStore;

use crate::config::ServerConfig;
use crate::services::{EmployeeQueries, EmployeeService, Logged};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by the health check).
    pub pool: hrdir_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Employee query layer.
    pub employees: Arc<dyn EmployeeQueries>,
}

impl AppState {
    /// Wire the production query stack: logged service over the PostgreSQL store.
    pub fn new(pool: hrdir_db::DbPool, config: ServerConfig) -> Self {
        let store = PgEmployeeStore::new(pool.clone());
        let employees = Arc::new(Logged::new(EmployeeService::new(store)));
        Self {
            pool,
            config: Arc::new(config),
            employees,
        }
    }
}
