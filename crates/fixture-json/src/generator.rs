//! Synthetic HTTP request record generator.

use crate::error::JsonFixtureError;
use fixture_core::GenerateMetrics;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Default buffer size for JSON writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Headers carried by a synthetic request record.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    /// The record index, as a string.
    #[serde(rename = "X")]
    pub x: String,
}

/// A synthetic HTTP request descriptor.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestFixture {
    /// Always "GET".
    pub method: String,
    /// `/bulk/{index}`.
    #[serde(rename = "requestURI")]
    pub request_uri: String,
    /// Single header "X" holding the index.
    pub headers: RequestHeaders,
    /// The record index, as a string.
    pub content: String,
}

impl RequestFixture {
    /// Build the record for the given 0-based index.
    pub fn new(index: u64) -> Self {
        Self {
            method: "GET".to_string(),
            request_uri: format!("/bulk/{index}"),
            headers: RequestHeaders {
                x: index.to_string(),
            },
            content: index.to_string(),
        }
    }
}

/// Generate a pretty-printed JSON array of `count` request records.
///
/// Record `i` carries the index `i` in its `requestURI`, `headers` and
/// `content` fields. An existing file at `output_path` is overwritten.
///
/// # Returns
///
/// Metrics about the generate operation.
pub fn generate<P: AsRef<Path>>(
    output_path: P,
    count: u64,
) -> Result<GenerateMetrics, JsonFixtureError> {
    let start_time = Instant::now();
    let mut metrics = GenerateMetrics::default();

    let output_path = output_path.as_ref();
    info!(
        "Generating JSON file '{}' with {} records",
        output_path.display(),
        count
    );

    let records: Vec<RequestFixture> = (0..count).map(RequestFixture::new).collect();
    metrics.records_written = records.len() as u64;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;
    drop(writer);

    metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
    metrics.total_duration = start_time.elapsed();

    info!(
        "JSON generation complete: {} records, {} bytes in {:?}",
        metrics.records_written, metrics.file_size_bytes, metrics.total_duration
    );

    Ok(metrics)
}
