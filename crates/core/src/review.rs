//! Review domain rules.

use crate::error::CoreError;

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// Validate that a rating falls within the accepted `[1, 5]` range.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_ratings_accepted() {
        assert!(validate_rating(MIN_RATING).is_ok());
        assert!(validate_rating(MAX_RATING).is_ok());
        assert!(validate_rating(3).is_ok());
    }

    #[test]
    fn test_out_of_range_ratings_rejected() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-1).is_err());
    }

    #[test]
    fn test_error_message_reports_value() {
        let err = validate_rating(9).unwrap_err();
        assert!(err.to_string().contains('9'));
    }
}
