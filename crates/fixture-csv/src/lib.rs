//! CSV fixture file generator.
//!
//! This crate generates a large CSV file of synthetic employee-like records
//! for exercising streaming CSV readers. Records are written through one at
//! a time, so memory use stays flat regardless of the row count.
//!
//! # Example
//!
//! ```ignore
//! use fixture_csv::CsvFixtureGenerator;
//!
//! let mut generator = CsvFixtureGenerator::with_seed(42);
//! let metrics = generator.generate("large.csv", 10_000)?;
//! println!("Generated {} rows", metrics.records_written);
//! ```

pub mod args;
mod error;
mod generator;

pub use args::CsvFixtureArgs;
pub use error::CsvFixtureError;
pub use generator::{CsvFixtureGenerator, COLUMNS};
