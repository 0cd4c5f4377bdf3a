//! # rainsim-calendar
//!
//! Gregorian date arithmetic used by the rainfall generator and aggregator.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(start, end)"] -->|"date_sequence()"| B["Vec of NaiveDate"]
//!     B -->|"YearMonth::from_date()"| C["YearMonth (YYYY-MM)"]
//!     C -->|".month_name()"| D["April"]
//!     C -->|".days_in_month()"| E["30"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use rainsim_calendar::{YearMonth, date_sequence, days_in_month, month_name};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 4, 29).unwrap();
//! let end = NaiveDate::from_ymd_opt(2023, 5, 2).unwrap();
//! let dates = date_sequence(start, end).unwrap();
//! assert_eq!(dates.len(), 4);
//!
//! assert_eq!(days_in_month(2024, 2).unwrap(), 29);
//! assert_eq!(month_name(9).unwrap(), "September");
//!
//! let key = YearMonth::from_date(end);
//! assert_eq!(key.to_string(), "2023-05");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month lengths and English month names |
//! | `sequence` | Inclusive daily date sequences |
//! | `year_month` | `YYYY-MM` grouping key |
//! | `error` | Error types |

mod error;
mod month;
mod sequence;
mod year_month;

pub use error::CalendarError;
pub use month::{MONTH_NAMES, days_in_month, is_leap_year, month_name};
pub use sequence::{date_sequence, inclusive_day_count};
pub use year_month::YearMonth;
