//! Error types for the rainsim-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the rainsim-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a date range starts after it ends.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// First day of the requested range.
        start: NaiveDate,
        /// Last day of the requested range.
        end: NaiveDate,
    },

    /// Returned when a string cannot be parsed as a `YYYY-MM` key.
    #[error("invalid year-month key: {input:?} (expected YYYY-MM)")]
    InvalidYearMonth {
        /// The rejected input.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_range() {
        let err = CalendarError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2023, 9, 30).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date range: start 2023-09-30 is after end 2023-04-01"
        );
    }

    #[test]
    fn error_invalid_year_month() {
        let err = CalendarError::InvalidYearMonth {
            input: "2023/04".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid year-month key: \"2023/04\" (expected YYYY-MM)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
