//! Shared types and domain errors for the employee directory.

pub mod error;
pub mod types;
