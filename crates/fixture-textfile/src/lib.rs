//! Byte-exact random text file generator.
//!
//! Builds a large plain-text file from repeated 1 KiB random chunks, closing
//! the gap to the requested size with a final chunk of exactly the remaining
//! length. The resulting file's on-disk size equals the requested target to
//! the byte.
//!
//! # Example
//!
//! ```ignore
//! use fixture_textfile::TextFileGenerator;
//!
//! let mut generator = TextFileGenerator::new();
//! let metrics = generator.generate("large_file.txt", 50)?;
//! println!("Actual size: {:.2} MB", metrics.size_in_mb());
//! ```

pub mod args;
mod error;
mod generator;

pub use args::TextFileArgs;
pub use error::TextFileError;
pub use generator::{TextFileGenerator, TextFileMetrics, BYTES_PER_MB, CHUNK_SIZE};
