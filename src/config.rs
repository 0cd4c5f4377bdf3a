use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level rainsim configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RainsimConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Location label.
    #[serde(default)]
    pub location: LocationToml,

    /// Date range.
    #[serde(default)]
    pub range: RangeToml,

    /// Heavy-rain settings.
    #[serde(default)]
    pub generator: GeneratorToml,

    /// Per-month climatology.
    #[serde(default = "default_climate")]
    pub climate: Vec<MonthToml>,

    /// Report output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl Default for RainsimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            location: LocationToml::default(),
            range: RangeToml::default(),
            generator: GeneratorToml::default(),
            climate: default_climate(),
            output: OutputToml::default(),
        }
    }
}

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<RainsimConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    #[serde(default = "default_location_name")]
    pub name: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            name: default_location_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

fn default_location_name() -> String {
    "Seattle".to_string()
}
fn default_latitude() -> f64 {
    47.6062
}
fn default_longitude() -> f64 {
    -122.3321
}

/// Inclusive date range. Dates are quoted `"YYYY-MM-DD"` strings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    #[serde(default = "rainsim_generator::config::default_start")]
    pub start: NaiveDate,
    #[serde(default = "rainsim_generator::config::default_end")]
    pub end: NaiveDate,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            start: rainsim_generator::config::default_start(),
            end: rainsim_generator::config::default_end(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorToml {
    #[serde(default = "default_heavy_rain_probability")]
    pub heavy_rain_probability: f64,
    #[serde(default = "default_heavy_rain_factor")]
    pub heavy_rain_factor: f64,
}

impl Default for GeneratorToml {
    fn default() -> Self {
        Self {
            heavy_rain_probability: default_heavy_rain_probability(),
            heavy_rain_factor: default_heavy_rain_factor(),
        }
    }
}

fn default_heavy_rain_probability() -> f64 {
    rainsim_generator::config::DEFAULT_HEAVY_RAIN_PROBABILITY
}
fn default_heavy_rain_factor() -> f64 {
    rainsim_generator::config::DEFAULT_HEAVY_RAIN_FACTOR
}

/// One `[[climate]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthToml {
    pub month: u8,
    pub average_rainfall_mm: f64,
    pub rainy_day_probability: f64,
}

fn default_climate() -> Vec<MonthToml> {
    rainsim_generator::ClimateTable::seattle()
        .iter()
        .map(|(month, p)| MonthToml {
            month,
            average_rainfall_mm: p.average_rainfall_mm(),
            rainy_day_probability: p.rainy_day_probability(),
        })
        .collect()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub pretty: bool,
}
