//! Streaming loaders and converters for fixture files.
//!
//! The generator crates produce large CSV, JSON, and text fixtures; this
//! crate is the consuming side. It loads those files with a small, fixed
//! buffer and provides the JSONL conversion utilities used to move data
//! between line-oriented and array-oriented JSON representations, with or
//! without gzip compression.
//!
//! # Modules
//!
//! - [`csv`]: row-by-row CSV loading with configurable quote and whitespace
//!   handling.
//! - [`json`]: JSON loading with format detection (array, NDJSON, object).
//! - [`jsonl`]: JSON Lines <-> JSON array file conversion.
//! - [`gzip`]: the same conversions over base64-encoded gzip payloads.
//!
//! # Example
//!
//! ```ignore
//! use fixture_loader::csv::{load_csv, CsvOptions};
//!
//! let rows = load_csv("large.csv", &CsvOptions::default())?;
//! println!("Loaded {} rows (including header)", rows.len());
//! ```

pub mod csv;
mod error;
pub mod gzip;
pub mod json;
pub mod jsonl;

pub use self::csv::{load_csv, CsvOptions};
pub use self::json::{load_json, JsonContent};
pub use error::LoaderError;
