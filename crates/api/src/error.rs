use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hrdir_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and `sqlx::Error` for backend
/// failures. Not-found outcomes become a bare 404 with an empty body. Every
/// `sqlx::Error`, `RowNotFound` included, becomes a 500 with a sanitized JSON
/// body: absence is only ever `Ok(None)` from the store.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hrdir_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                let body = json!({
                    "error": "An internal error occurred",
                    "code": "INTERNAL_ERROR",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
