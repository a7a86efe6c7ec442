//! CLI argument definitions for the JSON fixture generator.

use clap::Args;
use std::path::PathBuf;

/// Arguments for JSON fixture generation.
///
/// Defaults: `large.json` in the working directory, 1000 records.
#[derive(Args, Clone, Debug)]
pub struct JsonFixtureArgs {
    /// Output JSON file path
    #[arg(long, short = 'o', default_value = "large.json")]
    pub output: PathBuf,

    /// Number of request records to generate
    #[arg(long, default_value = "1000")]
    pub count: u64,
}
