//! Exact-size random text generator.

use crate::error::TextFileError;
use fixture_core::{random_text_chunk, random_text_tail};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Size of the reusable random chunk, in bytes.
pub const CHUNK_SIZE: usize = 1024;

/// Bytes per megabyte for target size computation.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Metrics from a text file generate operation.
#[derive(Debug, Clone, Default)]
pub struct TextFileMetrics {
    /// Number of full-size chunks written.
    pub chunks_written: u64,
    /// Total bytes written, including the final partial chunk.
    pub bytes_written: u64,
    /// Output file size in bytes, measured from the filesystem after the run.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl TextFileMetrics {
    /// The measured file size in megabytes.
    pub fn size_in_mb(&self) -> f64 {
        self.file_size_bytes as f64 / BYTES_PER_MB as f64
    }
}

/// Generator for text files of an exact on-disk byte size.
pub struct TextFileGenerator {
    rng: StdRng,
}

impl TextFileGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed (same seed = same data).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a file of exactly `size_in_mb * 1024 * 1024` bytes.
    pub fn generate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        size_in_mb: u64,
    ) -> Result<TextFileMetrics, TextFileError> {
        self.generate_bytes(output_path, size_in_mb * BYTES_PER_MB)
    }

    /// Generate a file of exactly `target_bytes` bytes.
    ///
    /// One random chunk of [`CHUNK_SIZE`] characters is generated up front
    /// and written repeatedly. Once one more full chunk would overshoot the
    /// target, a fresh chunk of exactly the remaining length is generated
    /// and written instead, and the loop exits. A remainder of zero still
    /// takes that branch and performs a zero-length write. The tail chunk is
    /// drawn from a newline-free pool, so the file never ends on `\n`.
    ///
    /// The character pool is single-byte ASCII, so character counts and byte
    /// counts coincide; see `fixture_core::random_text_chunk`.
    ///
    /// An existing file at `output_path` is overwritten. The reported metrics
    /// carry the size measured from the filesystem, not the requested target.
    pub fn generate_bytes<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        target_bytes: u64,
    ) -> Result<TextFileMetrics, TextFileError> {
        let start_time = Instant::now();
        let mut metrics = TextFileMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Generating text file '{}' with target size {} bytes",
            output_path.display(),
            target_bytes
        );

        // Reused for every full-size write.
        let chunk = random_text_chunk(&mut self.rng, CHUNK_SIZE);

        let file = File::create(output_path)?;
        let mut writer = BufWriter::new(file);

        let mut bytes_written: u64 = 0;
        while bytes_written < target_bytes {
            writer.write_all(chunk.as_bytes())?;
            bytes_written += chunk.len() as u64;
            metrics.chunks_written += 1;

            if bytes_written + CHUNK_SIZE as u64 > target_bytes {
                // Close the gap with a fresh chunk of exactly the remaining
                // length. May be zero-length when the target is an exact
                // multiple of the chunk size. Saturates for sub-chunk
                // targets, where the first full write already passed them.
                let remaining = target_bytes.saturating_sub(bytes_written);
                let tail = random_text_tail(&mut self.rng, remaining as usize);
                writer.write_all(tail.as_bytes())?;
                bytes_written += tail.len() as u64;
                break;
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.bytes_written = bytes_written;
        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "Text file generation complete: {} bytes ({:.2} MB) in {:?}",
            metrics.file_size_bytes,
            metrics.size_in_mb(),
            metrics.total_duration
        );

        Ok(metrics)
    }
}

impl Default for TextFileGenerator {
    fn default() -> Self {
        Self::new()
    }
}
