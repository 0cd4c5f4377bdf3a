//! Monthly aggregation and summary statistics for daily rainfall series.
//!
//! [`aggregate`] turns an ordered daily series into a [`RainfallReport`]:
//! the daily series itself, monthly totals in first-seen order, and a
//! [`StatisticsSummary`].
//!
//! # Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rainsim_aggregate::aggregate;
//! use rainsim_generator::DailyRecord;
//!
//! let daily: Vec<DailyRecord> = (1..=3)
//!     .map(|d| DailyRecord::new(NaiveDate::from_ymd_opt(2023, 4, d).unwrap(), 0.5))
//!     .collect();
//!
//! let report = aggregate(&daily).unwrap();
//! assert_eq!(report.monthly().len(), 1);
//! assert_eq!(report.stats().wet_day_count(), 3);
//! ```

pub mod error;
pub mod monthly;
pub mod report;
pub mod summary;

pub use error::AggregateError;
pub use monthly::{MonthlyRecord, MonthlyTotals, group_monthly};
pub use report::{RainfallReport, aggregate};
pub use summary::{StatisticsSummary, summarize};
