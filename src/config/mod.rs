#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::parser::{DEFAULT_DATE_FORMAT, DEFAULT_DELIMITER};
#[cfg(feature = "cli")]
use crate::core::reporter::DISPLAY_DATE_FORMAT;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::ports::local_today;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRECISION: usize = 2;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "age-report")]
#[command(about = "Lists people from a pipe-delimited file by date of birth, with ages")]
pub struct CliConfig {
    /// Input file; prompted for when omitted
    pub file: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Reference date (YYYY-MM-DD) used instead of the current date
    #[arg(long)]
    pub today: Option<NaiveDate>,

    #[arg(long, help = "Field delimiter [default: |]")]
    pub delimiter: Option<String>,

    #[arg(long, help = "strftime format of the date field [default: %Y-%m-%d]")]
    pub date_format: Option<String>,

    #[arg(long, help = "Directory to export the report to")]
    pub export_path: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Export formats: csv, tsv, json")]
    pub export_format: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.file.as_deref()
    }

    fn delimiter(&self) -> u8 {
        self.delimiter
            .as_deref()
            .and_then(|d| d.as_bytes().first().copied())
            .unwrap_or(DEFAULT_DELIMITER)
    }

    fn input_date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    fn display_date_format(&self) -> &str {
        DISPLAY_DATE_FORMAT
    }

    fn precision(&self) -> usize {
        DEFAULT_PRECISION
    }

    fn export_path(&self) -> Option<&str> {
        self.export_path.as_deref()
    }

    fn export_formats(&self) -> &[String] {
        &self.export_format
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(delimiter) = &self.delimiter {
            validation::validate_delimiter("--delimiter", delimiter)?;
        }
        if let Some(format) = &self.date_format {
            validation::validate_date_format("--date-format", format)?;
        }
        if let Some(path) = &self.export_path {
            validation::validate_path("--export-path", path)?;
        }
        validation::validate_export_formats("--export-format", &self.export_format)?;
        Ok(())
    }
}
