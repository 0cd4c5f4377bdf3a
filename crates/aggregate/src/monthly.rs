//! Monthly grouping of daily records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use rainsim_calendar::YearMonth;
use rainsim_generator::DailyRecord;
use rainsim_stats::round1;

/// Total rainfall for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    period: YearMonth,
    month: String,
    rainfall: f64,
}

impl MonthlyRecord {
    /// Creates a record for `period`, naming it after its month.
    pub fn new(period: YearMonth, rainfall: f64) -> Self {
        Self {
            period,
            month: period.month_name().to_string(),
            rainfall,
        }
    }

    /// Returns the `YYYY-MM` key.
    pub fn period(&self) -> YearMonth {
        self.period
    }

    /// Returns the full English month name.
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Returns the monthly total in mm, rounded to one decimal place.
    pub fn rainfall(&self) -> f64 {
        self.rainfall
    }
}

/// Running per-month sums that remember the order keys were first seen.
#[derive(Debug, Clone, Default)]
pub struct MonthlyTotals {
    order: Vec<YearMonth>,
    sums: HashMap<YearMonth, f64>,
}

impl MonthlyTotals {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `rainfall` to the total for `key`.
    pub fn add(&mut self, key: YearMonth, rainfall: f64) {
        match self.sums.get_mut(&key) {
            Some(total) => *total += rainfall,
            None => {
                self.order.push(key);
                self.sums.insert(key, rainfall);
            }
        }
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> &[YearMonth] {
        &self.order
    }

    /// Unrounded total for `key`.
    pub fn get(&self, key: YearMonth) -> Option<f64> {
        self.sums.get(&key).copied()
    }

    /// Number of distinct months seen.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// One rounded [`MonthlyRecord`] per key, in first-seen order.
    pub fn into_records(self) -> Vec<MonthlyRecord> {
        let Self { order, sums } = self;
        order
            .into_iter()
            .map(|key| MonthlyRecord::new(key, round1(sums.get(&key).copied().unwrap_or(0.0))))
            .collect()
    }
}

/// Sums daily rainfall per `YYYY-MM` key.
///
/// Output order is the order in which each month first appears in `daily`,
/// not calendar order.
pub fn group_monthly(daily: &[DailyRecord]) -> Vec<MonthlyRecord> {
    let mut totals = MonthlyTotals::new();
    for rec in daily {
        totals.add(rec.year_month(), rec.rainfall());
    }
    totals.into_records()
}
