//! Error types for the JSON fixture generator.

use thiserror::Error;

/// Errors that can occur during JSON fixture generation.
#[derive(Error, Debug)]
pub enum JsonFixtureError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
