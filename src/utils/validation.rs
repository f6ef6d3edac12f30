use crate::utils::error::{ReportError, Result};
use chrono::format::{Item, StrftimeItems};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const EXPORT_FORMATS: &[&str] = &["csv", "tsv", "json"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// The csv reader splits on a single byte, so the delimiter must be one ASCII character.
pub fn validate_delimiter(field_name: &str, delimiter: &str) -> Result<u8> {
    match delimiter.as_bytes() {
        [byte] if byte.is_ascii() && !byte.is_ascii_alphanumeric() && *byte != b'\n' => Ok(*byte),
        _ => Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: delimiter.to_string(),
            reason: "Delimiter must be a single ASCII punctuation or whitespace character"
                .to_string(),
        }),
    }
}

pub fn validate_export_formats(field_name: &str, formats: &[String]) -> Result<()> {
    let allowed: HashSet<&str> = EXPORT_FORMATS.iter().copied().collect();

    for format in formats {
        if !allowed.contains(format.as_str()) {
            return Err(ReportError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    EXPORT_FORMATS.join(", ")
                ),
            });
        }
    }

    Ok(())
}

/// Rejects strftime patterns chrono cannot render, which would otherwise fail at print time.
pub fn validate_date_format(field_name: &str, format: &str) -> Result<()> {
    validate_non_empty_string(field_name, format)?;

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Not a valid strftime date format".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ReportError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
