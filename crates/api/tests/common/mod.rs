#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use hrdir_api::app::build_app;
use hrdir_api::config::ServerConfig;
use hrdir_api::services::{EmployeeService, Logged};
use hrdir_api::state::AppState;
use hrdir_core::types::EmployeeId;
use hrdir_db::models::employee::Employee;
use hrdir_db::store::EmployeeStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

// ---------------------------------------------------------------------------
// In-memory stores
// ---------------------------------------------------------------------------

/// Store backed by a vector, matching `last_name` the way `LIKE '%f%'` does.
pub struct InMemoryStore {
    rows: Vec<Employee>,
}

impl InMemoryStore {
    pub fn new(rows: Vec<Employee>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Employee>, sqlx::Error> {
        Ok(self.rows.clone())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, sqlx::Error> {
        Ok(self
            .rows
            .iter()
            .find(|e| e.employee_id == Some(id))
            .cloned())
    }

    async fn select_by_name(&self, fragment: &str) -> Result<Vec<Employee>, sqlx::Error> {
        Ok(self
            .rows
            .iter()
            .filter(|e| e.last_name.as_deref().is_some_and(|n| n.contains(fragment)))
            .cloned()
            .collect())
    }
}

/// Store whose every call fails as if the database were unreachable.
pub struct UnavailableStore;

#[async_trait]
impl EmployeeStore for UnavailableStore {
    async fn find_all(&self) -> Result<Vec<Employee>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_id(&self, _id: EmployeeId) -> Result<Option<Employee>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn select_by_name(&self, _fragment: &str) -> Result<Vec<Employee>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Store whose every call fails with `sqlx::Error::RowNotFound`.
pub struct RowNotFoundStore;

#[async_trait]
impl EmployeeStore for RowNotFoundStore {
    async fn find_all(&self) -> Result<Vec<Employee>, sqlx::Error> {
        Err(sqlx::Error::RowNotFound)
    }

    async fn find_by_id(&self, _id: EmployeeId) -> Result<Option<Employee>, sqlx::Error> {
        Err(sqlx::Error::RowNotFound)
    }

    async fn select_by_name(&self, _fragment: &str) -> Result<Vec<Employee>, sqlx::Error> {
        Err(sqlx::Error::RowNotFound)
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn john_doe() -> Employee {
    Employee {
        employee_id: Some(1),
        first_name: Some("John".into()),
        last_name: Some("Doe".into()),
        email: Some("john.doe@example.com".into()),
        phone_number: Some("123-456-7890".into()),
        job_id: Some("IT_PROG".into()),
        salary: Some(Decimal::new(50_000, 0)),
        department_id: Some(10),
    }
}

pub fn jane_smith() -> Employee {
    Employee {
        employee_id: Some(2),
        first_name: Some("Jane".into()),
        last_name: Some("Smith".into()),
        email: Some("jane.smith@example.com".into()),
        phone_number: Some("098-765-4321".into()),
        job_id: Some("SA_REP".into()),
        salary: Some(Decimal::new(4_500_050, 2)),
        department_id: Some(20),
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// A pool that is never reachable; only the health check touches it.
fn unreachable_pool() -> sqlx::PgPool {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy("postgres://hrdir@127.0.0.1:1/hrdir")
        .expect("valid connection URL")
}

/// Build the full application router over the given store.
///
/// Uses the same middleware stack and the same logged query layer as
/// production; only the store differs.
pub fn build_test_app<S: EmployeeStore + 'static>(store: S) -> Router {
    let state = AppState {
        pool: unreachable_pool(),
        config: Arc::new(test_config()),
        employees: Arc::new(Logged::new(EmployeeService::new(store))),
    };
    build_app(state)
}

/// App over the two-employee roster (John Doe, Jane Smith).
pub fn roster_app() -> Router {
    build_test_app(InMemoryStore::new(vec![john_doe(), jane_smith()]))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
