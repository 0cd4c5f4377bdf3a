//! Synthetic daily rainfall generation from monthly climatology.
//!
//! Each day in an inclusive date range is simulated independently: an
//! occurrence draw against the month's rainy-day probability, then, on rainy
//! days, an amount scaled from the month's average total with an occasional
//! heavy-rain doubling.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │ ClimateTable │────▶│ GeneratorConfig│────▶│  generate_daily  │
//!  │ (per month)  │     │  (validate)    │     │ (UniformSource)  │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rainsim_generator::{GeneratorConfig, generate_daily};
//!
//! let config = GeneratorConfig::seattle_2023();
//! let mut rng = StdRng::seed_from_u64(42);
//! let daily = generate_daily(&config, &mut rng).unwrap();
//!
//! assert_eq!(daily.len(), 183);
//! assert!(daily.iter().all(|d| d.rainfall() >= 0.0));
//! ```

pub mod climate;
pub mod config;
pub mod error;
pub mod generate;
pub mod record;
pub mod source;

pub use climate::{ClimateTable, MonthParams};
pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use generate::{DayOutcome, generate_daily, simulate_day};
pub use record::DailyRecord;
pub use source::{SequenceSource, UniformSource};
