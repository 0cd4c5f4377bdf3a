//! Summarize command: aggregate a daily series read from JSON.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, info_span};

use rainsim_aggregate::aggregate;
use rainsim_generator::DailyRecord;

use crate::cli::SummarizeArgs;
use crate::display;
use crate::export;

/// Accepted input shapes: a bare array of daily records, or any object
/// carrying them under `dailyData` (e.g. a report written by `generate`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DailyInput {
    Records(Vec<DailyRecord>),
    Report {
        #[serde(rename = "dailyData")]
        daily: Vec<DailyRecord>,
    },
}

impl DailyInput {
    fn into_records(self) -> Vec<DailyRecord> {
        match self {
            Self::Records(daily) | Self::Report { daily } => daily,
        }
    }
}

/// Reads a daily series from a JSON file.
pub fn read_daily(path: &Path) -> Result<Vec<DailyRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let input: DailyInput = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse daily series: {}", path.display()))?;
    Ok(input.into_records())
}

/// Run the summarize command.
pub fn run(args: SummarizeArgs) -> Result<()> {
    let _cmd = info_span!("summarize").entered();

    info!(path = %args.input.display(), "reading daily series");
    let daily = read_daily(&args.input)?;
    info!(n_days = daily.len(), "daily series loaded");

    let report = aggregate(&daily)
        .with_context(|| format!("failed to aggregate {}", args.input.display()))?;

    let title = args
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    print!("{}", display::render(&title, &report));

    if let Some(path) = args.output {
        export::write_json(&path, &report, args.pretty)?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
