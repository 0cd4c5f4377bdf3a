//! Monthly climatological parameters.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Climatology for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthParams {
    average_rainfall_mm: f64,
    rainy_day_probability: f64,
}

impl MonthParams {
    /// Creates parameters from the month's average total (mm) and the
    /// probability that any given day in the month is rainy.
    ///
    /// Values are checked by [`MonthParams::validate`], not here.
    pub fn new(average_rainfall_mm: f64, rainy_day_probability: f64) -> Self {
        Self {
            average_rainfall_mm,
            rainy_day_probability,
        }
    }

    /// Returns the average monthly rainfall total in mm.
    pub fn average_rainfall_mm(&self) -> f64 {
        self.average_rainfall_mm
    }

    /// Returns the rainy-day probability.
    pub fn rainy_day_probability(&self) -> f64 {
        self.rainy_day_probability
    }

    /// Expected rainfall on a rainy day if the monthly average were spread
    /// evenly over the month's expected rainy days.
    pub fn baseline_per_rainy_day(&self, days_in_month: u8) -> f64 {
        self.average_rainfall_mm / (days_in_month as f64 * self.rainy_day_probability)
    }

    /// Checks that the probability lies in (0, 1] and the average is finite
    /// and non-negative.
    pub fn validate(&self, month: u8) -> Result<(), GenerateError> {
        let p = self.rainy_day_probability;
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(GenerateError::InvalidProbability { month, value: p });
        }
        let avg = self.average_rainfall_mm;
        if !avg.is_finite() || avg < 0.0 {
            return Err(GenerateError::InvalidAverage { month, value: avg });
        }
        Ok(())
    }
}

/// Per-month parameter table, indexed by 1-based month.
///
/// Months without an entry are allowed; generating over such a month fails
/// with [`GenerateError::MissingParameter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClimateTable {
    months: [Option<MonthParams>; 12],
}

impl ClimateTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seattle growing-season climatology, April through September.
    ///
    /// | Month | Average (mm) | Rainy-day probability |
    /// |-------|--------------|-----------------------|
    /// | Apr | 74.7 | 0.50 |
    /// | May | 48.8 | 0.40 |
    /// | Jun | 40.9 | 0.33 |
    /// | Jul | 17.5 | 0.20 |
    /// | Aug | 23.6 | 0.25 |
    /// | Sep | 38.9 | 0.35 |
    pub fn seattle() -> Self {
        let mut months = [None; 12];
        months[3] = Some(MonthParams::new(74.7, 0.5));
        months[4] = Some(MonthParams::new(48.8, 0.4));
        months[5] = Some(MonthParams::new(40.9, 0.33));
        months[6] = Some(MonthParams::new(17.5, 0.2));
        months[7] = Some(MonthParams::new(23.6, 0.25));
        months[8] = Some(MonthParams::new(38.9, 0.35));
        Self { months }
    }

    /// Sets the parameters for `month`, replacing any existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidMonth`] if `month` is outside 1..=12.
    pub fn with_month(mut self, month: u8, params: MonthParams) -> Result<Self, GenerateError> {
        self.set(month, params)?;
        Ok(self)
    }

    /// Sets the parameters for `month` in place.
    pub fn set(&mut self, month: u8, params: MonthParams) -> Result<(), GenerateError> {
        if !(1..=12).contains(&month) {
            return Err(GenerateError::InvalidMonth { month });
        }
        self.months[month as usize - 1] = Some(params);
        Ok(())
    }

    /// Returns the parameters for `month`, if present.
    pub fn get(&self, month: u8) -> Option<&MonthParams> {
        if !(1..=12).contains(&month) {
            return None;
        }
        self.months[month as usize - 1].as_ref()
    }

    /// Returns the parameters for `month` or [`GenerateError::MissingParameter`].
    pub fn require(&self, month: u8) -> Result<&MonthParams, GenerateError> {
        self.get(month)
            .ok_or(GenerateError::MissingParameter { month })
    }

    /// Iterates `(month, params)` over the populated entries in month order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &MonthParams)> {
        self.months
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.as_ref().map(|p| ((i + 1) as u8, p)))
    }

    /// Number of populated months.
    pub fn len(&self) -> usize {
        self.months.iter().filter(|p| p.is_some()).count()
    }

    /// Returns `true` if no month is populated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
