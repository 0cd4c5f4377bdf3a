//! Error types for the rainsim-aggregate crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the rainsim-aggregate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    /// Returned when the daily series is empty.
    #[error("daily series is empty")]
    EmptyInput,

    /// Returned when a record carries a negative or non-finite rainfall value.
    #[error("invalid rainfall on {date}: {value} (must be finite and >= 0)")]
    InvalidRainfall {
        /// Date of the offending record.
        date: NaiveDate,
        /// The rejected value.
        value: f64,
    },
}
