//! Streaming CSV loading.

use crate::error::LoaderError;
use ::csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Buffer size for reading CSV files.
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Options for CSV parsing.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Accept unescaped quotes inside quoted fields instead of failing the
    /// load. When off, the file is checked up front and a misplaced quote
    /// fails with its line number.
    pub lazy_quotes: bool,
    /// Strip leading whitespace from each field.
    pub trim_leading_space: bool,
    /// Strip leading and trailing whitespace from each field.
    pub trim_space: bool,
    /// Allow records with varying numbers of fields.
    pub flexible: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            lazy_quotes: true,
            trim_leading_space: true,
            trim_space: false,
            flexible: true,
        }
    }
}

/// Load a CSV file into rows of strings, one `Vec<String>` per record.
///
/// The file is parsed record by record through a 64 KiB buffered reader;
/// only the accumulated rows are held in memory. The header row, if any, is
/// returned as the first record — callers that want data rows only skip it.
pub fn load_csv<P: AsRef<Path>>(
    path: P,
    options: &CsvOptions,
) -> Result<Vec<Vec<String>>, LoaderError> {
    let path = path.as_ref();

    if !options.lazy_quotes {
        check_quotes(path)?;
    }

    let file = File::open(path)?;
    let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(options.flexible)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let row: Vec<String> = record
            .iter()
            .map(|field| {
                if options.trim_space {
                    field.trim().to_string()
                } else if options.trim_leading_space {
                    field.trim_start().to_string()
                } else {
                    field.to_string()
                }
            })
            .collect();
        rows.push(row);
    }

    debug!("Loaded {} CSV rows from '{}'", rows.len(), path.display());
    Ok(rows)
}

/// Strict quote check used when `lazy_quotes` is off.
///
/// Per RFC 4180, a quote must open a field, be doubled inside a quoted
/// field, or close the field right before a delimiter or line break.
/// Anything else fails with the offending line number.
fn check_quotes(path: &Path) -> Result<(), LoaderError> {
    #[derive(PartialEq)]
    enum State {
        FieldStart,
        Unquoted,
        Quoted,
        QuoteClosed,
    }

    let bytes = std::fs::read(path)?;
    let mut state = State::FieldStart;
    let mut line = 1usize;

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match state {
            State::Quoted => match b {
                b'"' => match bytes.get(i + 1) {
                    Some(b'"') => i += 1, // escaped quote
                    _ => state = State::QuoteClosed,
                },
                b'\n' => line += 1, // quoted fields may span lines
                _ => {}
            },
            State::FieldStart => match b {
                b'"' => state = State::Quoted,
                b',' => {}
                b'\n' => line += 1,
                b'\r' => {}
                _ => state = State::Unquoted,
            },
            State::Unquoted => match b {
                b'"' => return Err(LoaderError::BareQuote(line)),
                b',' => state = State::FieldStart,
                b'\n' => {
                    line += 1;
                    state = State::FieldStart;
                }
                _ => {}
            },
            State::QuoteClosed => match b {
                b',' => state = State::FieldStart,
                b'\n' => {
                    line += 1;
                    state = State::FieldStart;
                }
                b'\r' => {}
                _ => return Err(LoaderError::BareQuote(line)),
            },
        }
        i += 1;
    }

    if state == State::Quoted {
        return Err(LoaderError::BareQuote(line));
    }
    Ok(())
}
