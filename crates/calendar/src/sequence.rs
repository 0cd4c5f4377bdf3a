//! Inclusive daily date sequences.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Generates every date from `start` to `end`, both inclusive.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidRange`] if `start` is after `end`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rainsim_calendar::date_sequence;
///
/// let day = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
/// assert_eq!(date_sequence(day, day).unwrap(), vec![day]);
/// ```
pub fn date_sequence(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, CalendarError> {
    let n_days = inclusive_day_count(start, end)?;
    Ok(start.iter_days().take(n_days).collect())
}

/// Number of calendar days in `[start, end]`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidRange`] if `start` is after `end`.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> Result<usize, CalendarError> {
    if start > end {
        return Err(CalendarError::InvalidRange { start, end });
    }
    Ok((end - start).num_days() as usize + 1)
}
