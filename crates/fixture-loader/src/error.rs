//! Error types for the fixture loaders.

use thiserror::Error;

/// Errors that can occur while loading or converting fixture files.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSONL line that is not a valid JSON value.
    #[error("invalid JSON at line {line}: {source}")]
    InvalidJsonLine {
        line: usize,
        source: serde_json::Error,
    },

    /// Strict quote checking found a misplaced quote.
    #[error("bare quote in CSV at line {0}")]
    BareQuote(usize),

    /// An input that was expected to hold a JSON array.
    #[error("failed to parse JSON array file '{path}': {source}")]
    ArrayFile {
        path: String,
        source: serde_json::Error,
    },

    /// Base64 decode error for compressed payloads.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}
