//! CLI argument definitions for the CSV fixture generator.

use clap::Args;
use std::path::PathBuf;

/// Arguments for CSV fixture generation.
///
/// Defaults: `large.csv` in the working directory, 10,000 rows.
#[derive(Args, Clone, Debug)]
pub struct CsvFixtureArgs {
    /// Output CSV file path
    #[arg(long, short = 'o', default_value = "large.csv")]
    pub output: PathBuf,

    /// Number of data rows to generate
    #[arg(long, default_value = "10000")]
    pub rows: u64,

    /// Random seed for deterministic generation (entropy-seeded when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}
