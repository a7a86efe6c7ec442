//! Error types for the text file generator.

use thiserror::Error;

/// Errors that can occur during text file generation.
#[derive(Error, Debug)]
pub enum TextFileError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
