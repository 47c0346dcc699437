use crate::utils::error::{ReportError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.display().to_string();

    if path.as_os_str().is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display,
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Delimiters must be a single ASCII byte the CSV reader can split on.
pub fn validate_delimiter(field_name: &str, delimiter: char) -> Result<u8> {
    let invalid = |reason: &str| ReportError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: delimiter.escape_default().to_string(),
        reason: reason.to_string(),
    };

    if !delimiter.is_ascii() {
        return Err(invalid("Delimiter must be a single ASCII character"));
    }

    match delimiter {
        '"' | '\n' | '\r' => Err(invalid("Delimiter cannot be a quote or line break")),
        c => Ok(c as u8),
    }
}

pub fn validate_non_empty<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}
