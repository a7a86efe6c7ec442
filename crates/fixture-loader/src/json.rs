//! JSON loading with format detection.

use crate::error::LoaderError;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Buffer size for reading JSON files.
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Parsed content of a JSON fixture file.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonContent {
    /// A JSON array, or the objects of an NDJSON file in input order.
    Array(Vec<Value>),
    /// A single top-level JSON object.
    Object(Map<String, Value>),
}

impl JsonContent {
    /// The array values, if this is array-shaped content.
    pub fn into_array(self) -> Option<Vec<Value>> {
        match self {
            JsonContent::Array(values) => Some(values),
            JsonContent::Object(_) => None,
        }
    }
}

/// Load a JSON file, detecting its format from the extension and the first
/// non-whitespace byte.
///
/// Three formats are supported:
///
/// 1. JSON array: `[{...}, {...}]`
/// 2. NDJSON: one JSON value per line (always chosen for a `.ndjson`
///    extension; blank lines are skipped)
/// 3. JSON object: a single top-level map
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<JsonContent, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);

    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ndjson"))
    {
        return load_ndjson(reader);
    }

    // Peek the first non-whitespace byte without consuming it.
    let first = loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break None;
        }
        match buf.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(pos) => {
                let b = buf[pos];
                reader.consume(pos);
                break Some(b);
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    };

    let content = match first {
        Some(b'[') => JsonContent::Array(serde_json::from_reader(reader)?),
        Some(b'{') => JsonContent::Object(serde_json::from_reader(reader)?),
        _ => return load_ndjson(reader),
    };

    debug!("Loaded JSON file '{}'", path.display());
    Ok(content)
}

/// Parse newline-delimited JSON into an array of values.
fn load_ndjson<R: BufRead>(reader: R) -> Result<JsonContent, LoaderError> {
    let mut values = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = serde_json::from_str(line)
            .map_err(|source| LoaderError::InvalidJsonLine { line: i + 1, source })?;
        values.push(value);
    }
    Ok(JsonContent::Array(values))
}
