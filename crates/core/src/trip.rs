//! Trip domain rules.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Validate the trip date-ordering invariant: `end_date >= start_date`.
///
/// Equal dates are a valid single-day trip. Callers performing partial
/// updates must pass the *effective* dates (stored values merged with the
/// update payload), not just the supplied fields.
pub fn validate_date_range(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), CoreError> {
    if end_date < start_date {
        Err(CoreError::DateRange(format!(
            "end_date {end_date} precedes start_date {start_date}"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ordered_range_accepted() {
        assert!(validate_date_range(date(2026, 6, 1), date(2026, 6, 14)).is_ok());
    }

    #[test]
    fn test_single_day_trip_accepted() {
        assert!(validate_date_range(date(2026, 6, 1), date(2026, 6, 1)).is_ok());
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err = validate_date_range(date(2026, 6, 14), date(2026, 6, 1)).unwrap_err();
        assert!(matches!(err, CoreError::DateRange(_)));
    }
}
