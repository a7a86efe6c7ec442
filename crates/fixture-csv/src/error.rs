//! Error types for the CSV fixture generator.

use thiserror::Error;

/// Errors that can occur during CSV fixture generation.
#[derive(Error, Debug)]
pub enum CsvFixtureError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
