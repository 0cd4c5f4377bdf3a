//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use rainsim_generator::{ClimateTable, GeneratorConfig, MonthParams};

use crate::config::{MonthToml, RainsimConfig};

/// Builds a [`ClimateTable`] from `[[climate]]` entries.
///
/// Each month may appear at most once.
pub fn build_climate_table(months: &[MonthToml]) -> Result<ClimateTable> {
    let mut table = ClimateTable::new();
    for entry in months {
        if table.get(entry.month).is_some() {
            bail!("duplicate [[climate]] entry for month {}", entry.month);
        }
        table
            .set(
                entry.month,
                MonthParams::new(entry.average_rainfall_mm, entry.rainy_day_probability),
            )
            .context("invalid [[climate]] entry")?;
    }
    Ok(table)
}

/// Builds a validated [`GeneratorConfig`].
///
/// `start` and `end` override `[range]` when given.
pub fn build_generator_config(
    config: &RainsimConfig,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<GeneratorConfig> {
    let climate = build_climate_table(&config.climate)?;
    let start = start.unwrap_or(config.range.start);
    let end = end.unwrap_or(config.range.end);

    let cfg = GeneratorConfig::new(start, end)
        .with_climate(climate)
        .with_heavy_rain_probability(config.generator.heavy_rain_probability)
        .with_heavy_rain_factor(config.generator.heavy_rain_factor);
    cfg.validate().context("invalid generator configuration")?;
    Ok(cfg)
}
