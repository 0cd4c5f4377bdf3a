use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Synthetic daily rainfall simulator.
#[derive(Parser)]
#[command(
    name = "rainsim",
    version,
    about = "Synthetic daily rainfall simulator and summariser"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a synthetic season, then print its statistics.
    Generate(GenerateArgs),
    /// Aggregate an existing daily series read from JSON.
    Summarize(SummarizeArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file. Built-in Seattle defaults if omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the JSON report here (overrides [output].path).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override first day of the range (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Override last day of the range, inclusive (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `summarize` subcommand.
#[derive(clap::Args)]
pub struct SummarizeArgs {
    /// JSON file holding a daily series or a previously written report.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the JSON report here.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pub pretty: bool,
}
