use crate::core::age::average_age;
use crate::core::parser::{parse_records, ParseOptions, DEFAULT_DATE_FORMAT};
use crate::core::reporter::{render_report, to_csv, to_rows};
use crate::core::sorter::sort_by_birth_date;
use crate::core::{ConfigProvider, Pipeline, Record, Storage, TransformResult};
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::validate_required_field;

pub const EXPORT_BASENAME: &str = "age_report";
pub const DEFAULT_EXPORT_FORMAT: &str = "csv";

pub struct AgeReportPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> AgeReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            delimiter: self.config.delimiter(),
            date_format: self.config.input_date_format().to_string(),
        }
    }

    fn export_document(&self, result: &TransformResult, format: &str) -> Result<String> {
        match format {
            "csv" => to_csv(&result.rows, b',', DEFAULT_DATE_FORMAT),
            "tsv" => to_csv(&result.rows, b'\t', DEFAULT_DATE_FORMAT),
            "json" => Ok(serde_json::to_string_pretty(result)?),
            other => Err(ReportError::InvalidConfigValueError {
                field: "output.export_formats".to_string(),
                value: other.to_string(),
                reason: "Unsupported format".to_string(),
            }),
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for AgeReportPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        let input_path = self.config.input_path();
        let path = *validate_required_field("input.path", &input_path)?;

        tracing::debug!("Reading records from: {}", path);
        let bytes = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes", bytes.len());

        parse_records(&bytes, path, self.config.today(), &self.parse_options())
    }

    fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let today = self.config.today();
        // mean is order-independent, take it from the collection as read
        let average_age = average_age(&data, today);
        let sorted = sort_by_birth_date(&data);

        Ok(TransformResult {
            rows: to_rows(&sorted, today),
            average_age,
            today,
        })
    }

    fn render(&self, result: &TransformResult) -> String {
        render_report(
            result,
            self.config.display_date_format(),
            self.config.precision(),
        )
    }

    fn load(&self, result: &TransformResult) -> Result<Vec<String>> {
        let Some(export_path) = self.config.export_path() else {
            return Ok(Vec::new());
        };

        let mut formats: Vec<&str> = self
            .config
            .export_formats()
            .iter()
            .map(String::as_str)
            .collect();
        if formats.is_empty() {
            formats.push(DEFAULT_EXPORT_FORMAT);
        }

        let mut written = Vec::new();
        for format in formats {
            let document = self.export_document(result, format)?;
            let path = format!("{}/{}.{}", export_path, EXPORT_BASENAME, format);

            tracing::debug!("Writing {} ({} bytes)", path, document.len());
            self.storage.write_file(&path, document.as_bytes())?;
            written.push(path);
        }

        Ok(written)
    }
}
