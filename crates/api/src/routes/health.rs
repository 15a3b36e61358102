//! Liveness endpoint for load balancers and operators.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// Always served with 200; `db_healthy` tells whether `SELECT 1` succeeded.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthStatus {
    fn from_probe(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let db_healthy = match hrdir_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Employee database unreachable");
            false
        }
    };

    Json(HealthStatus::from_probe(db_healthy))
}

/// `/health`, mounted next to the employee routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
