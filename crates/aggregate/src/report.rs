//! Full aggregation pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use rainsim_generator::DailyRecord;

use crate::error::AggregateError;
use crate::monthly::{MonthlyRecord, group_monthly};
use crate::summary::{StatisticsSummary, summarize};

/// Daily series, monthly totals and summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainfallReport {
    #[serde(rename = "dailyData")]
    daily: Vec<DailyRecord>,
    #[serde(rename = "monthlyArray")]
    monthly: Vec<MonthlyRecord>,
    stats: StatisticsSummary,
}

impl RainfallReport {
    /// The daily series, unchanged from the input.
    pub fn daily(&self) -> &[DailyRecord] {
        &self.daily
    }

    /// Monthly totals in first-seen order.
    pub fn monthly(&self) -> &[MonthlyRecord] {
        &self.monthly
    }

    /// Summary statistics.
    pub fn stats(&self) -> &StatisticsSummary {
        &self.stats
    }

    /// Consumes the report, returning the daily series.
    pub fn into_daily(self) -> Vec<DailyRecord> {
        self.daily
    }
}

/// Aggregates an ordered daily series.
///
/// Pure: the input is copied, never modified, and repeated calls on the
/// same input return equal reports.
///
/// # Errors
///
/// * [`AggregateError::EmptyInput`] if `daily` is empty.
/// * [`AggregateError::InvalidRainfall`] if any value is negative or non-finite.
pub fn aggregate(daily: &[DailyRecord]) -> Result<RainfallReport, AggregateError> {
    if daily.is_empty() {
        return Err(AggregateError::EmptyInput);
    }
    if let Some(bad) = daily
        .iter()
        .find(|r| !r.rainfall().is_finite() || r.rainfall() < 0.0)
    {
        return Err(AggregateError::InvalidRainfall {
            date: bad.date(),
            value: bad.rainfall(),
        });
    }

    let monthly = group_monthly(daily);
    let stats = summarize(daily, &monthly)?;
    debug!(
        n_days = daily.len(),
        n_months = monthly.len(),
        total = stats.total_rainfall(),
        "aggregated daily rainfall"
    );

    Ok(RainfallReport {
        daily: daily.to_vec(),
        monthly,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(m: u32, d: u32, mm: f64) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(2023, m, d).unwrap(), mm)
    }

    #[test]
    fn daily_passes_through() {
        let daily = vec![rec(4, 1, 0.0), rec(4, 2, 1.3), rec(5, 1, 0.7)];
        let report = aggregate(&daily).unwrap();
        assert_eq!(report.daily(), daily.as_slice());
        assert_eq!(report.clone().into_daily(), daily);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(aggregate(&[]).unwrap_err(), AggregateError::EmptyInput);
    }

    #[test]
    fn negative_rejected() {
        let daily = vec![rec(4, 1, 0.0), rec(4, 2, -0.1)];
        assert_eq!(
            aggregate(&daily).unwrap_err(),
            AggregateError::InvalidRainfall {
                date: NaiveDate::from_ymd_opt(2023, 4, 2).unwrap(),
                value: -0.1
            }
        );
    }

    #[test]
    fn nan_rejected() {
        let daily = vec![rec(4, 1, f64::NAN)];
        assert!(matches!(
            aggregate(&daily),
            Err(AggregateError::InvalidRainfall { .. })
        ));
    }

    #[test]
    fn json_shape() {
        let report = aggregate(&[rec(4, 1, 0.5)]).unwrap();
        let v = serde_json::to_value(&report).unwrap();
        assert!(v["dailyData"].is_array());
        assert!(v["monthlyArray"].is_array());
        assert_eq!(v["monthlyArray"][0]["month"], "April");
        assert_eq!(v["stats"]["wetDayCount"], 1);

        let back: RainfallReport = serde_json::from_value(v).unwrap();
        assert_eq!(back, report);
    }
}
