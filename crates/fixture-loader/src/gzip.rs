//! JSONL conversions over base64-encoded gzip payloads.
//!
//! Payloads travel as base64 text so they can be embedded in JSON configs
//! and test fixtures; the compressed form is gzip.

use crate::error::LoaderError;
use crate::jsonl;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::Value;
use std::io::{Read, Write};
use std::path::Path;

/// Serialize objects as JSON Lines, gzip them, and base64-encode the result.
///
/// `level` is a gzip compression level from 0 to 9; `None` or an
/// out-of-range value selects the default level.
pub fn objects_to_compressed_json_lines(
    objects: &[Value],
    level: Option<u32>,
) -> Result<String, LoaderError> {
    let json_lines = jsonl::objects_to_json_lines(objects)?;
    let compression = match level {
        Some(l) if l <= 9 => Compression::new(l),
        _ => Compression::default(),
    };
    let mut encoder = GzEncoder::new(Vec::new(), compression);
    encoder.write_all(json_lines.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(BASE64.encode(compressed))
}

/// Decode and decompress a payload produced by
/// [`objects_to_compressed_json_lines`] back into objects.
pub fn compressed_json_lines_to_objects(payload: &str) -> Result<Vec<Value>, LoaderError> {
    let json_lines = decompress(payload)?;
    jsonl::json_lines_to_objects(&json_lines)
}

/// Write one compressed JSONL payload to disk as a JSON array file.
pub fn write_compressed_json_lines_to_array_file<P: AsRef<Path>>(
    payload: &str,
    path: P,
) -> Result<(), LoaderError> {
    write_multiple_compressed_json_lines_to_array_file(&[payload], path)
}

/// Write several compressed JSONL payloads to disk as a single JSON array
/// file, decompressing one payload at a time.
pub fn write_multiple_compressed_json_lines_to_array_file<P: AsRef<Path>, S: AsRef<str>>(
    payloads: &[S],
    path: P,
) -> Result<(), LoaderError> {
    let decompressed: Vec<String> = payloads
        .iter()
        .map(|payload| decompress(payload.as_ref()))
        .collect::<Result<_, _>>()?;
    jsonl::write_multiple_json_lines_to_array_file(&decompressed, path)
}

fn decompress(payload: &str) -> Result<String, LoaderError> {
    let compressed = BASE64.decode(payload)?;
    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut json_lines = String::new();
    decoder.read_to_string(&mut json_lines)?;
    Ok(json_lines)
}
