//! Daily rainfall record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use rainsim_calendar::YearMonth;

/// Rainfall for one calendar day, in mm rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    date: NaiveDate,
    rainfall: f64,
}

impl DailyRecord {
    /// Creates a record.
    pub fn new(date: NaiveDate, rainfall: f64) -> Self {
        Self { date, rainfall }
    }

    /// Returns the date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the rainfall in mm.
    pub fn rainfall(&self) -> f64 {
        self.rainfall
    }

    /// `YYYY-MM` key of the month this record belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }

    /// Returns `true` if no rain fell.
    pub fn is_dry(&self) -> bool {
        self.rainfall == 0.0
    }
}
