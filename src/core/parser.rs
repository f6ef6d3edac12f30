//! Reads `name | YYYY-MM-DD` lines into [`Record`]s.
//!
//! Parsing is all-or-nothing: the first bad line fails the whole batch and no
//! records are returned. Bad rows are not skipped.

use crate::domain::model::Record;
use crate::utils::error::{ReportError, Result};
use chrono::NaiveDate;
use std::io::ErrorKind;

pub const DEFAULT_DELIMITER: u8 = b'|';
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub delimiter: u8,
    pub date_format: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Reads and parses the file at `path`. The file is closed before parsing starts.
pub fn read_records(path: &str, today: NaiveDate, options: &ParseOptions) -> Result<Vec<Record>> {
    let bytes = std::fs::read(path).map_err(|e| classify_io_error(path, e))?;
    parse_records(&bytes, path, today, options)
}

/// Maps a read failure onto the input error taxonomy.
pub fn classify_io_error(path: &str, err: std::io::Error) -> ReportError {
    let path = path.to_string();
    match err.kind() {
        ErrorKind::NotFound => ReportError::ResourceNotFound { path },
        ErrorKind::PermissionDenied => ReportError::AccessDenied { path },
        ErrorKind::InvalidData => ReportError::EncodingError { path },
        _ => ReportError::UnknownReadFailure { path, source: err },
    }
}

/// Parses raw file contents. `source` is only used in diagnostics.
pub fn parse_records(
    bytes: &[u8],
    source: &str,
    today: NaiveDate,
    options: &ParseOptions,
) -> Result<Vec<Record>> {
    let text = std::str::from_utf8(bytes).map_err(|_| ReportError::EncodingError {
        path: source.to_string(),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        // the reader drops empty lines itself; a whitespace-only line trims to one empty field
        if row.len() != 2 {
            return Err(ReportError::MalformedRecord {
                path: source.to_string(),
                line,
                reason: format!("expected 2 fields, found {}", row.len()),
            });
        }

        let name = &row[0];
        let date_of_birth = NaiveDate::parse_from_str(&row[1], &options.date_format).map_err(
            |e| ReportError::MalformedRecord {
                path: source.to_string(),
                line,
                reason: format!("invalid date '{}': {}", &row[1], e),
            },
        )?;

        if date_of_birth > today {
            return Err(ReportError::FutureDateOfBirth {
                path: source.to_string(),
                line,
                date: date_of_birth,
            });
        }

        records.push(Record::new(name, date_of_birth));
    }

    tracing::debug!("Parsed {} records from {}", records.len(), source);
    Ok(records)
}
