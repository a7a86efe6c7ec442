//! Shared primitives for the fixture-gen generators.
//!
//! This crate provides the random-text building blocks used by the CSV and
//! text-file generators, plus the metrics type reported by every generator.
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{random_alphanumeric, title_case};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let word = title_case(&random_alphanumeric(&mut rng, 6));
//! assert_eq!(word.len(), 6);
//! ```

pub mod metrics;
pub mod random;

// Re-exports for convenience
pub use metrics::GenerateMetrics;
pub use random::{random_alphanumeric, random_text_chunk, random_text_tail, title_case};
