//! JSON report export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use rainsim_aggregate::RainfallReport;

use crate::config::LocationToml;

/// Report written by `generate`: the aggregated series plus provenance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReport<'a> {
    pub location: &'a LocationToml,
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub report: &'a RainfallReport,
}

/// Serialises `value` as JSON to `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    };
    written.with_context(|| format!("failed to serialise report to {}", path.display()))?;
    writeln!(writer).with_context(|| format!("failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
