//! Field-level validation helpers shared across handlers.

use crate::error::CoreError;

/// Validate that a required string field is non-empty (after trimming).
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

/// Validate that an optional integer field, when present, is >= 1.
///
/// Used for itinerary `day` and `planned_order`.
pub fn validate_positive(field: &'static str, value: Option<i32>) -> Result<(), CoreError> {
    match value {
        Some(v) if v < 1 => Err(CoreError::Validation(format!(
            "{field} must be a positive integer, got {v}"
        ))),
        _ => Ok(()),
    }
}
