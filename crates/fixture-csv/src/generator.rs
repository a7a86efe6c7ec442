//! Synthetic employee-record generator.

use crate::error::CsvFixtureError;
use csv::Writer;
use fixture_core::{random_alphanumeric, title_case, GenerateMetrics};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Column names, in output order.
pub const COLUMNS: [&str; 10] = [
    "id",
    "name",
    "email",
    "phone",
    "age",
    "city",
    "country",
    "department",
    "salary",
    "active",
];

const EMAIL_DOMAINS: [&str; 4] = ["gmail.com", "yahoo.com", "outlook.com", "company.com"];

const CITIES: [&str; 12] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
    "Jacksonville",
];

const COUNTRIES: [&str; 8] = [
    "USA",
    "Canada",
    "UK",
    "Germany",
    "France",
    "Japan",
    "Australia",
    "Brazil",
];

const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
    "Operations",
    "Legal",
    "IT",
];

/// Uniformly pick one value from a fixed pool.
fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// CSV fixture generator producing synthetic employee records.
pub struct CsvFixtureGenerator {
    rng: StdRng,
}

impl CsvFixtureGenerator {
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

    /// Generate a CSV file with a header row followed by `rows` records.
    ///
    /// `id` values form the contiguous sequence `1..=rows`. Each record is
    /// written through as it is generated; the file is never buffered in
    /// memory as a whole. An existing file at `output_path` is overwritten.
    ///
    /// # Returns
    ///
    /// Metrics about the generate operation.
    pub fn generate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        rows: u64,
    ) -> Result<GenerateMetrics, CsvFixtureError> {
        let start_time = Instant::now();
        let mut metrics = GenerateMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Generating CSV file '{}' with {} rows",
            output_path.display(),
            rows
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        writer.write_record(COLUMNS)?;

        for id in 1..=rows {
            let record = self.next_record(id);
            writer.write_record(&record)?;
            metrics.records_written += 1;

            if metrics.records_written % 10000 == 0 {
                debug!("Written {} rows", metrics.records_written);
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.records_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }

    /// Generate one record with the given sequential id.
    fn next_record(&mut self, id: u64) -> Vec<String> {
        vec![
            id.to_string(),
            self.random_name(),
            self.random_email(),
            self.random_phone(),
            self.rng.gen_range(22..=65u32).to_string(),
            pick(&mut self.rng, &CITIES).to_string(),
            pick(&mut self.rng, &COUNTRIES).to_string(),
            pick(&mut self.rng, &DEPARTMENTS).to_string(),
            self.rng.gen_range(30000..=150000u32).to_string(),
            pick(&mut self.rng, &["true", "false"]).to_string(),
        ]
    }

    /// Two title-cased random alphanumeric words of length 6 and 8.
    ///
    /// Title-casing only affects alphabetic characters; a word starting
    /// with a digit keeps it.
    fn random_name(&mut self) -> String {
        let first = title_case(&random_alphanumeric(&mut self.rng, 6));
        let last = title_case(&random_alphanumeric(&mut self.rng, 8));
        format!("{first} {last}")
    }

    /// Random 8-character local part plus a domain from the fixed pool.
    fn random_email(&mut self) -> String {
        let username = random_alphanumeric(&mut self.rng, 8);
        let domain = pick(&mut self.rng, &EMAIL_DOMAINS);
        format!("{username}@{domain}")
    }

    /// `+1-DDD-DDD-DDDD`; the ranges guarantee 3/3/4-digit groups.
    fn random_phone(&mut self) -> String {
        format!(
            "+1-{}-{}-{}",
            self.rng.gen_range(100..=999u32),
            self.rng.gen_range(100..=999u32),
            self.rng.gen_range(1000..=9999u32)
        )
    }
}

impl Default for CsvFixtureGenerator {
    fn default() -> Self {
        Self::new()
    }
}
