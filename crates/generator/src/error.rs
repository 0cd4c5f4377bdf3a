//! Error types for the rainsim-generator crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the rainsim-generator crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// Returned when the start date is after the end date.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// First day of the requested range.
        start: NaiveDate,
        /// Last day of the requested range.
        end: NaiveDate,
    },

    /// Returned when a month covered by the range has no climatological parameters.
    #[error("missing climatological parameters for month {month}")]
    MissingParameter {
        /// 1-indexed month lacking an entry.
        month: u8,
    },

    /// Returned when a month value is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Returned when a rainy-day probability is outside (0, 1].
    #[error("invalid rainy-day probability for month {month}: {value} (must be in (0, 1])")]
    InvalidProbability {
        /// 1-indexed month.
        month: u8,
        /// The invalid value.
        value: f64,
    },

    /// Returned when a monthly average is negative or non-finite.
    #[error("invalid average rainfall for month {month}: {value} (must be finite and >= 0)")]
    InvalidAverage {
        /// 1-indexed month.
        month: u8,
        /// The invalid value.
        value: f64,
    },

    /// Returned when a generator setting is out of range.
    #[error("invalid generator configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a fixed uniform sequence is empty or holds values outside [0, 1).
    #[error("invalid uniform sequence: {reason}")]
    InvalidSequence {
        /// Description of the problem.
        reason: String,
    },
}
