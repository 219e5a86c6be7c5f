//! Domain-level error taxonomy.
//!
//! Each variant corresponds to one class of observable failure. The HTTP
//! layer maps these onto status codes; this crate stays transport-agnostic.

use crate::types::DbId;

/// Domain errors shared by the DB and API layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist. Always names the entity kind.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed or out-of-range input, rejected before any database write.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A trip's end date would precede its start date.
    #[error("Invalid date range: {0}")]
    DateRange(String),

    /// A uniqueness invariant was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
