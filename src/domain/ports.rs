use crate::domain::model::{Record, TransformResult};
use crate::utils::error::Result;
use chrono::NaiveDate;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> Option<&str>;
    fn delimiter(&self) -> u8;
    fn input_date_format(&self) -> &str;
    fn display_date_format(&self) -> &str;
    fn precision(&self) -> usize;
    fn export_path(&self) -> Option<&str>;
    fn export_formats(&self) -> &[String];

    /// Reference date for age computation and future-date validation.
    fn today(&self) -> NaiveDate;
}

/// The current date in the local time zone, used when no reference date is configured.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Record>>;
    fn transform(&self, data: Vec<Record>) -> Result<TransformResult>;
    fn render(&self, result: &TransformResult) -> String;
    fn load(&self, result: &TransformResult) -> Result<Vec<String>>;
}
