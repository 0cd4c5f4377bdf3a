//! Configuration for daily rainfall generation.

use chrono::NaiveDate;

use rainsim_calendar::YearMonth;

use crate::climate::ClimateTable;
use crate::error::GenerateError;
use crate::generate::MULTIPLIER_MAX;

/// Default probability that a rainy day becomes a heavy-rain event.
pub const DEFAULT_HEAVY_RAIN_PROBABILITY: f64 = 0.08;

/// Default multiplier applied to heavy-rain days.
pub const DEFAULT_HEAVY_RAIN_FACTOR: f64 = 2.0;

/// Configuration for [`generate_daily`](crate::generate_daily).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rainsim_generator::{ClimateTable, GeneratorConfig, MonthParams};
///
/// let start = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 4, 3).unwrap();
/// let table = ClimateTable::new()
///     .with_month(4, MonthParams::new(30.0, 1.0))
///     .unwrap();
///
/// let config = GeneratorConfig::new(start, end).with_climate(table);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    start: NaiveDate,
    end: NaiveDate,
    climate: ClimateTable,
    heavy_rain_probability: f64,
    heavy_rain_factor: f64,
}

impl GeneratorConfig {
    /// Creates a configuration for `[start, end]` with defaults.
    ///
    /// Defaults: `climate = ClimateTable::seattle()`,
    /// `heavy_rain_probability = 0.08`, `heavy_rain_factor = 2.0`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            climate: ClimateTable::seattle(),
            heavy_rain_probability: DEFAULT_HEAVY_RAIN_PROBABILITY,
            heavy_rain_factor: DEFAULT_HEAVY_RAIN_FACTOR,
        }
    }

    /// Seattle, 2023-04-01 through 2023-09-30.
    pub fn seattle_2023() -> Self {
        Self::new(default_start(), default_end())
    }

    /// Sets the inclusive date range.
    pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the climatological parameter table.
    pub fn with_climate(mut self, climate: ClimateTable) -> Self {
        self.climate = climate;
        self
    }

    /// Sets the probability that a rainy day is a heavy-rain event.
    pub fn with_heavy_rain_probability(mut self, p: f64) -> Self {
        self.heavy_rain_probability = p;
        self
    }

    /// Sets the multiplier applied on heavy-rain days.
    pub fn with_heavy_rain_factor(mut self, factor: f64) -> Self {
        self.heavy_rain_factor = factor;
        self
    }

    // --- Accessors ---

    /// Returns the first day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the climatological parameter table.
    pub fn climate(&self) -> &ClimateTable {
        &self.climate
    }

    /// Returns the heavy-rain probability.
    pub fn heavy_rain_probability(&self) -> f64 {
        self.heavy_rain_probability
    }

    /// Returns the heavy-rain multiplier.
    pub fn heavy_rain_factor(&self) -> f64 {
        self.heavy_rain_factor
    }

    /// Months touched by the range, in chronological order.
    pub fn covered_months(&self) -> Vec<YearMonth> {
        let mut out: Vec<YearMonth> = Vec::new();
        if self.start > self.end {
            return out;
        }
        for date in self.start.iter_days().take_while(|d| *d <= self.end) {
            let key = YearMonth::from_date(date);
            if out.last() != Some(&key) {
                out.push(key);
            }
        }
        out
    }

    /// Validates this configuration.
    ///
    /// Checks, in order: the range is not reversed, the heavy-rain settings
    /// are in range, and every month touched by the range has valid
    /// parameters in the table. The largest amount a covered month can
    /// produce (baseline times the top multiplier and the heavy-rain factor)
    /// must be finite.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.start > self.end {
            return Err(GenerateError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }

        let p = self.heavy_rain_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(GenerateError::InvalidConfig {
                reason: format!("heavy_rain_probability must be in [0, 1], got {p}"),
            });
        }
        let f = self.heavy_rain_factor;
        if !f.is_finite() || f < 1.0 {
            return Err(GenerateError::InvalidConfig {
                reason: format!("heavy_rain_factor must be finite and >= 1, got {f}"),
            });
        }

        for key in self.covered_months() {
            let month = key.month();
            let params = self.climate.require(month)?;
            params.validate(month)?;

            let peak = params.baseline_per_rainy_day(key.days_in_month()) * MULTIPLIER_MAX * f;
            if !peak.is_finite() {
                return Err(GenerateError::InvalidConfig {
                    reason: format!(
                        "rainfall for month {month} overflows: average {} mm, probability {}, heavy_rain_factor {f}",
                        params.average_rainfall_mm(),
                        params.rainy_day_probability(),
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::seattle_2023()
    }
}

/// 2023-04-01.
pub fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 4, 1).expect("2023-04-01 is a valid date")
}

/// 2023-09-30.
pub fn default_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 9, 30).expect("2023-09-30 is a valid date")
}
