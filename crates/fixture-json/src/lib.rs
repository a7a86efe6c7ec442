//! JSON fixture file generator.
//!
//! Generates a single pretty-printed JSON array of synthetic HTTP request
//! descriptors. Unlike the CSV and text generators there is no randomness:
//! every field is derived from the record's index, so the output shape is
//! fully determined by the count.
//!
//! # Example
//!
//! ```ignore
//! let metrics = fixture_json::generate("large.json", 1000)?;
//! println!("Generated {} records", metrics.records_written);
//! ```

pub mod args;
mod error;
mod generator;

pub use args::JsonFixtureArgs;
pub use error::JsonFixtureError;
pub use generator::{generate, RequestFixture, RequestHeaders};
