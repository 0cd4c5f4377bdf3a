//! Summary statistics over a daily series and its monthly totals.

use serde::{Deserialize, Serialize};

use rainsim_generator::DailyRecord;
use rainsim_stats::{count_zero, first_max_index, mean, round1, sum};

use crate::error::AggregateError;
use crate::monthly::MonthlyRecord;

/// Totals, extremes and dry/wet day counts for a daily series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    total_rainfall: f64,
    average_rainfall: f64,
    rainiest_day: DailyRecord,
    rainiest_month: MonthlyRecord,
    dry_day_count: usize,
    wet_day_count: usize,
}

impl StatisticsSummary {
    /// Total rainfall in mm, rounded to one decimal place.
    pub fn total_rainfall(&self) -> f64 {
        self.total_rainfall
    }

    /// Mean daily rainfall in mm, rounded to one decimal place.
    pub fn average_rainfall(&self) -> f64 {
        self.average_rainfall
    }

    /// The wettest day; the earliest one on ties.
    pub fn rainiest_day(&self) -> &DailyRecord {
        &self.rainiest_day
    }

    /// The wettest month; the first-listed one on ties.
    pub fn rainiest_month(&self) -> &MonthlyRecord {
        &self.rainiest_month
    }

    /// Days with exactly zero rainfall.
    pub fn dry_day_count(&self) -> usize {
        self.dry_day_count
    }

    /// Days with non-zero rainfall.
    pub fn wet_day_count(&self) -> usize {
        self.wet_day_count
    }
}

/// Computes summary statistics.
///
/// The average divides the unrounded total by the number of days and is
/// rounded once. Extremes are taken from a stable descending sort, so ties
/// resolve to the element that comes first in the input.
///
/// # Errors
///
/// Returns [`AggregateError::EmptyInput`] if `daily` or `monthly` is empty.
pub fn summarize(
    daily: &[DailyRecord],
    monthly: &[MonthlyRecord],
) -> Result<StatisticsSummary, AggregateError> {
    let values: Vec<f64> = daily.iter().map(DailyRecord::rainfall).collect();
    let month_values: Vec<f64> = monthly.iter().map(MonthlyRecord::rainfall).collect();

    let (Some(average), Some(day_idx), Some(month_idx)) = (
        mean(&values),
        first_max_index(&values),
        first_max_index(&month_values),
    ) else {
        return Err(AggregateError::EmptyInput);
    };
    let total = sum(&values);
    let dry = count_zero(&values);

    Ok(StatisticsSummary {
        total_rainfall: round1(total),
        average_rainfall: round1(average),
        rainiest_day: daily[day_idx],
        rainiest_month: monthly[month_idx].clone(),
        dry_day_count: dry,
        wet_day_count: values.len() - dry,
    })
}
