//! Daily rainfall simulation.

use tracing::debug;

use rainsim_calendar::{YearMonth, date_sequence};
use rainsim_stats::round1;

use crate::climate::MonthParams;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::record::DailyRecord;
use crate::source::UniformSource;

/// Lower bound of the rainy-day amount multiplier.
const MULTIPLIER_MIN: f64 = 0.5;

/// Width of the multiplier range; draws map onto [0.5, 2.0).
const MULTIPLIER_SPAN: f64 = 1.5;

/// Upper bound (exclusive) of the multiplier.
pub(crate) const MULTIPLIER_MAX: f64 = MULTIPLIER_MIN + MULTIPLIER_SPAN;

/// How a simulated day turned out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayOutcome {
    /// No rain.
    Dry,
    /// Rain, in mm before rounding.
    Rainy(f64),
    /// Rain scaled by the heavy-rain factor, in mm before rounding.
    Heavy(f64),
}

impl DayOutcome {
    /// Rainfall in mm, rounded to one decimal place and never negative.
    pub fn rainfall(self) -> f64 {
        match self {
            Self::Dry => 0.0,
            Self::Rainy(mm) | Self::Heavy(mm) => round1(mm).max(0.0),
        }
    }
}

/// Simulates one day.
///
/// Draws are taken in a fixed order: occurrence, then (rainy days only)
/// amount multiplier, then heavy-rain check. A day is rainy when the first
/// draw is below the rainy-day probability. A heavy-rain event happens when
/// the third draw lands in the top `heavy_rain_probability` of the unit
/// interval, so a draw of 0.0 never triggers one.
///
/// # Arguments
///
/// * `params` - Climatology for the day's month; assumed validated.
/// * `days_in_month` - Length of the day's month.
/// * `heavy_rain_probability` - Chance that a rainy day is a heavy-rain event.
/// * `heavy_rain_factor` - Multiplier applied on heavy-rain days.
/// * `source` - Uniform random source.
pub fn simulate_day(
    params: &MonthParams,
    days_in_month: u8,
    heavy_rain_probability: f64,
    heavy_rain_factor: f64,
    source: &mut impl UniformSource,
) -> DayOutcome {
    let p = params.rainy_day_probability();
    if source.next_uniform() >= p {
        return DayOutcome::Dry;
    }

    let baseline = params.baseline_per_rainy_day(days_in_month);
    let multiplier = MULTIPLIER_MIN + MULTIPLIER_SPAN * source.next_uniform();
    let amount = baseline * multiplier;

    if source.next_uniform() >= 1.0 - heavy_rain_probability {
        DayOutcome::Heavy(amount * heavy_rain_factor)
    } else {
        DayOutcome::Rainy(amount)
    }
}

/// Generates one [`DailyRecord`] per day in the configured range.
///
/// The configuration is validated before any draw is taken, so a failure
/// never yields a partial series.
///
/// # Errors
///
/// * [`GenerateError::InvalidRange`] if the start date is after the end date.
/// * [`GenerateError::MissingParameter`] if a covered month has no table entry.
/// * [`GenerateError::InvalidProbability`] / [`GenerateError::InvalidAverage`]
///   for out-of-range parameters of a covered month.
/// * [`GenerateError::InvalidConfig`] for out-of-range heavy-rain settings.
pub fn generate_daily(
    config: &GeneratorConfig,
    source: &mut impl UniformSource,
) -> Result<Vec<DailyRecord>, GenerateError> {
    config.validate()?;

    let dates =
        date_sequence(config.start(), config.end()).map_err(|_| GenerateError::InvalidRange {
            start: config.start(),
            end: config.end(),
        })?;
    debug!(
        start = %config.start(),
        end = %config.end(),
        n_days = dates.len(),
        "generating daily rainfall"
    );

    let mut records = Vec::with_capacity(dates.len());
    let mut n_rainy = 0usize;
    let mut n_heavy = 0usize;

    for date in dates {
        let key = YearMonth::from_date(date);
        let params = config.climate().require(key.month())?;
        let outcome = simulate_day(
            params,
            key.days_in_month(),
            config.heavy_rain_probability(),
            config.heavy_rain_factor(),
            source,
        );
        match outcome {
            DayOutcome::Dry => {}
            DayOutcome::Rainy(_) => n_rainy += 1,
            DayOutcome::Heavy(_) => {
                n_rainy += 1;
                n_heavy += 1;
            }
        }
        records.push(DailyRecord::new(date, outcome.rainfall()));
    }

    debug!(n_rainy, n_heavy, "daily rainfall generated");
    Ok(records)
}
