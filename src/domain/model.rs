use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One parsed `name | date-of-birth` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub date_of_birth: NaiveDate,
}

impl Record {
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub age: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransformResult {
    pub rows: Vec<ReportRow>,
    pub average_age: f64,
    pub today: NaiveDate,
}

impl TransformResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What a finished run reports back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    pub average_age: f64,
    /// Diagnostic printed when the input could not be read; the run then reports an empty table.
    pub input_error: Option<String>,
    pub exported: Vec<String>,
}
