//! JSON Lines <-> JSON array conversion.
//!
//! The array-file writers stream line by line through a 64 KiB buffered
//! writer, so a multi-gigabyte JSONL payload never has to exist in memory
//! as a single parsed array.

use crate::error::LoaderError;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Buffer size for writing JSON array files.
pub const WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// Serialize objects as JSON Lines: one compact JSON value per line.
pub fn objects_to_json_lines(objects: &[Value]) -> Result<String, LoaderError> {
    let lines: Result<Vec<String>, serde_json::Error> =
        objects.iter().map(serde_json::to_string).collect();
    Ok(lines?.join("\n"))
}

/// Parse a JSON Lines string back into objects. Blank lines are skipped;
/// an invalid line fails with its line number.
pub fn json_lines_to_objects(json_lines: &str) -> Result<Vec<Value>, LoaderError> {
    let mut objects = Vec::new();
    for (i, line) in json_lines.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = serde_json::from_str(line)
            .map_err(|source| LoaderError::InvalidJsonLine { line: i + 1, source })?;
        objects.push(value);
    }
    Ok(objects)
}

/// Write a JSON Lines payload to disk as a JSON array file.
pub fn write_json_lines_to_array_file<P: AsRef<Path>>(
    json_lines: &str,
    path: P,
) -> Result<(), LoaderError> {
    write_multiple_json_lines_to_array_file(&[json_lines], path)
}

/// Write several JSON Lines payloads to disk as a single JSON array file.
///
/// Each line is validated as JSON and then written verbatim, so the output
/// is one array element per input line across all payloads.
pub fn write_multiple_json_lines_to_array_file<P: AsRef<Path>, S: AsRef<str>>(
    payloads: &[S],
    path: P,
) -> Result<(), LoaderError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    writer.write_all(b"[")?;
    let mut written = 0usize;
    for payload in payloads {
        for (i, line) in payload.as_ref().lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            serde_json::from_str::<Value>(line)
                .map_err(|source| LoaderError::InvalidJsonLine { line: i + 1, source })?;
            if written > 0 {
                writer.write_all(b",")?;
            }
            writer.write_all(line.as_bytes())?;
            written += 1;
        }
    }
    writer.write_all(b"]")?;
    writer.flush()?;

    debug!(
        "Wrote {} array elements to '{}'",
        written,
        path.display()
    );
    Ok(())
}

/// Serialize objects straight to a JSON array file.
pub fn write_objects_to_json_array_file<P: AsRef<Path>>(
    objects: &[Value],
    path: P,
) -> Result<(), LoaderError> {
    let json_lines = objects_to_json_lines(objects)?;
    write_json_lines_to_array_file(&json_lines, path)
}

/// Concatenate several JSON array files into one.
///
/// Each input must hold a top-level JSON array; a file that does not fails
/// with its path in the error.
pub fn combine_json_array_files<P: AsRef<Path>>(
    inputs: &[P],
    output: impl AsRef<Path>,
) -> Result<(), LoaderError> {
    let output = output.as_ref();
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    writer.write_all(b"[")?;
    let mut written = 0usize;
    for input in inputs {
        let input = input.as_ref();
        let content = std::fs::read_to_string(input)?;
        let values: Vec<Value> =
            serde_json::from_str(&content).map_err(|source| LoaderError::ArrayFile {
                path: input.display().to_string(),
                source,
            })?;
        for value in &values {
            if written > 0 {
                writer.write_all(b",")?;
            }
            serde_json::to_writer(&mut writer, value)?;
            written += 1;
        }
    }
    writer.write_all(b"]")?;
    writer.flush()?;

    debug!(
        "Combined {} files into '{}' ({} elements)",
        inputs.len(),
        output.display(),
        written
    );
    Ok(())
}
