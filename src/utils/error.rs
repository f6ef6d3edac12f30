use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("file '{path}' not found")]
    ResourceNotFound { path: String },

    #[error("permission denied for file '{path}'")]
    AccessDenied { path: String },

    #[error("file '{path}' is not valid UTF-8")]
    EncodingError { path: String },

    #[error("invalid data format in file '{path}' (line {line}: {reason})")]
    MalformedRecord {
        path: String,
        line: u64,
        reason: String,
    },

    #[error("date of birth {date} on line {line} of '{path}' is in the future")]
    FutureDateOfBirth {
        path: String,
        line: u64,
        date: NaiveDate,
    },

    #[error("failed to read '{path}': {source}")]
    UnknownReadFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration '{field}'")]
    MissingConfigError { field: String },

    #[error("Recipe error: {message}")]
    RecipeError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    Recipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Reported to the user, the run continues with an empty record set.
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ResourceNotFound { .. }
            | Self::AccessDenied { .. }
            | Self::EncodingError { .. }
            | Self::MalformedRecord { .. }
            | Self::FutureDateOfBirth { .. }
            | Self::UnknownReadFailure { .. }
            | Self::CsvError(_) => ErrorCategory::Input,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Output,
            Self::RecipeError { .. } => ErrorCategory::Recipe,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Recipe => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Errors at the input boundary are reported and replaced by an empty batch.
    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ResourceNotFound { path } => format!("Error: file '{}' not found.", path),
            Self::AccessDenied { path } => {
                format!("Error: permission denied for file '{}'.", path)
            }
            Self::EncodingError { path } => {
                format!("Error: file '{}' contains invalid characters.", path)
            }
            Self::MalformedRecord { path, line, reason } => format!(
                "Error: invalid data format in file '{}' (line {}: {}).",
                path, line, reason
            ),
            Self::FutureDateOfBirth { path, line, date } => format!(
                "Error: date of birth {} on line {} of '{}' is in the future.",
                date, line, path
            ),
            Self::UnknownReadFailure { path, source } => {
                format!("Error reading data from file '{}': {}", path, source)
            }
            Self::CsvError(e) => format!("Error reading data from file: {}", e),
            Self::RecipeError { message } => message.clone(),
            other => format!("Error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { .. } => "Check the file name and the working directory",
            Self::AccessDenied { .. } => "Check the file permissions",
            Self::EncodingError { .. } => "Save the file as UTF-8 text",
            Self::MalformedRecord { .. } => {
                "Each line must be 'name | YYYY-MM-DD' with exactly one '|' separator"
            }
            Self::FutureDateOfBirth { .. } => "Correct the date of birth or the --today override",
            Self::UnknownReadFailure { .. } | Self::CsvError(_) => "Retry, or check the file",
            Self::IoError(_) | Self::SerializationError(_) => {
                "Check the export directory is writable"
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the configuration file or CLI flags",
            Self::RecipeError { .. } => "Use --fruit <apple|banana|orange|strawberry|lemon> <grams>",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
