//! Command-line interface for fixture-gen
//!
//! # Usage Examples
//!
//! ```bash
//! # CSV of 10,000 synthetic employee records (large.csv)
//! fixture-gen csv
//!
//! # JSON array of 1000 synthetic request records (large.json)
//! fixture-gen json
//!
//! # 50 MB random text file, byte-exact (large_file.txt)
//! fixture-gen text
//!
//! # Overriding the defaults
//! fixture-gen csv --output /tmp/employees.csv --rows 500 --seed 42
//! fixture-gen text --size-mb 2 --seed 42
//! ```

use clap::{Parser, Subcommand};
use fixture_csv::{CsvFixtureArgs, CsvFixtureGenerator};
use fixture_json::JsonFixtureArgs;
use fixture_textfile::{TextFileArgs, TextFileGenerator};

#[derive(Parser)]
#[command(name = "fixture-gen")]
#[command(about = "Generate large synthetic test fixture files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a CSV file of synthetic employee records
    Csv(CsvFixtureArgs),

    /// Generate a JSON array of synthetic HTTP request records
    Json(JsonFixtureArgs),

    /// Generate a random text file of an exact byte size
    Text(TextFileArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Csv(args) => {
            let mut generator = match args.seed {
                Some(seed) => CsvFixtureGenerator::with_seed(seed),
                None => CsvFixtureGenerator::new(),
            };
            let metrics = generator.generate(&args.output, args.rows)?;
            println!(
                "Generated {} with {} rows",
                args.output.display(),
                metrics.records_written
            );
        }

        Commands::Json(args) => {
            fixture_json::generate(&args.output, args.count)?;
        }

        Commands::Text(args) => {
            let mut generator = match args.seed {
                Some(seed) => TextFileGenerator::with_seed(seed),
                None => TextFileGenerator::new(),
            };
            let metrics = generator.generate(&args.output, args.size_mb)?;
            println!(
                "Generated {} with actual size {:.2} MB",
                args.output.display(),
                metrics.size_in_mb()
            );
        }
    }

    Ok(())
}
