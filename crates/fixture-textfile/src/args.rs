//! CLI argument definitions for the text file generator.

use clap::Args;
use std::path::PathBuf;

/// Arguments for exact-size text file generation.
///
/// Defaults: `large_file.txt` in the working directory, 50 MB.
#[derive(Args, Clone, Debug)]
pub struct TextFileArgs {
    /// Output text file path
    #[arg(long, short = 'o', default_value = "large_file.txt")]
    pub output: PathBuf,

    /// Target file size in megabytes
    #[arg(long, default_value = "50")]
    pub size_mb: u64,

    /// Random seed for deterministic generation (entropy-seeded when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}
