use crate::types::EmployeeId;

/// Domain-level failures shared across crates.
///
/// Backend failures are not modelled here; they stay as `sqlx::Error` until
/// the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: EmployeeId,
    },
}
