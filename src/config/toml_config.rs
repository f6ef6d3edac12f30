use crate::config::DEFAULT_PRECISION;
use crate::core::parser::{DEFAULT_DATE_FORMAT, DEFAULT_DELIMITER};
use crate::core::reporter::DISPLAY_DATE_FORMAT;
use crate::core::ConfigProvider;
use crate::domain::ports::local_today;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
    /// Only settable from the command line.
    #[serde(skip)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
    pub delimiter: Option<String>,
    pub date_format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub date_format: Option<String>,
    pub precision: Option<usize>,
    pub export_path: Option<String>,
    pub export_formats: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReportError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReportError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Command-line flags win over file values.
    #[cfg(feature = "cli")]
    pub fn apply_cli(&mut self, cli: &crate::config::CliConfig) {
        if let Some(file) = &cli.file {
            self.input.path = Some(file.clone());
        }
        if let Some(delimiter) = &cli.delimiter {
            self.input.delimiter = Some(delimiter.clone());
        }
        if let Some(format) = &cli.date_format {
            self.input.date_format = Some(format.clone());
        }
        if let Some(path) = &cli.export_path {
            self.output.export_path = Some(path.clone());
        }
        if !cli.export_format.is_empty() {
            self.output.export_formats = Some(cli.export_format.clone());
        }
        if cli.today.is_some() {
            self.today = cli.today;
        }
        tracing::debug!("Configuration after CLI overrides: {:?}", self);
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = &self.input.path {
            validation::validate_path("input.path", path)?;
        }

        if let Some(delimiter) = &self.input.delimiter {
            validation::validate_delimiter("input.delimiter", delimiter)?;
        }

        if let Some(format) = &self.input.date_format {
            validation::validate_date_format("input.date_format", format)?;
        }

        if let Some(format) = &self.output.date_format {
            validation::validate_date_format("output.date_format", format)?;
        }

        if let Some(precision) = self.output.precision {
            validation::validate_range("output.precision", precision, 0, 6)?;
        }

        if let Some(path) = &self.output.export_path {
            validation::validate_path("output.export_path", path)?;
        }

        if let Some(formats) = &self.output.export_formats {
            validation::validate_export_formats("output.export_formats", formats)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.path.as_deref()
    }

    fn delimiter(&self) -> u8 {
        self.input
            .delimiter
            .as_deref()
            .and_then(|d| d.as_bytes().first().copied())
            .unwrap_or(DEFAULT_DELIMITER)
    }

    fn input_date_format(&self) -> &str {
        self.input.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    fn display_date_format(&self) -> &str {
        self.output.date_format.as_deref().unwrap_or(DISPLAY_DATE_FORMAT)
    }

    fn precision(&self) -> usize {
        self.output.precision.unwrap_or(DEFAULT_PRECISION)
    }

    fn export_path(&self) -> Option<&str> {
        self.output.export_path.as_deref()
    }

    fn export_formats(&self) -> &[String] {
        self.output.export_formats.as_deref().unwrap_or(&[])
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
