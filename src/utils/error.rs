use std::path::{Path, PathBuf};
use thiserror::Error;

/// Underlying cause of a source that exists but could not be turned into records.
#[derive(Error, Debug)]
pub enum ReadCause {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("source is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Source file not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: ReadCause,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// The job was skipped; nothing is wrong with the environment.
    Low,
    /// The input exists but is unusable.
    Medium,
    /// Output could not be produced or the run was misconfigured.
    High,
}

impl ReportError {
    pub fn source_missing(path: impl AsRef<Path>) -> Self {
        Self::SourceMissing {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn read_failure(path: impl AsRef<Path>, cause: impl Into<ReadCause>) -> Self {
        Self::ReadFailure {
            path: path.as_ref().to_path_buf(),
            source: cause.into(),
        }
    }

    pub fn write_failure(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReportError::SourceMissing { .. } => ErrorSeverity::Low,
            ReportError::ReadFailure { .. } => ErrorSeverity::Medium,
            ReportError::WriteFailure { .. }
            | ReportError::ConfigError { .. }
            | ReportError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    /// Recoverable errors only skip the affected record type.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ReportError::SourceMissing { .. } | ReportError::ReadFailure { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::SourceMissing { .. } => {
                "Check the documents directory or pass --source with the correct path"
            }
            ReportError::ReadFailure { .. } => {
                "Make sure the source is UTF-8 encoded and uses the expected delimiter"
            }
            ReportError::WriteFailure { .. } => {
                "Check that the output directory exists, is writable and has free space"
            }
            ReportError::ConfigError { .. } | ReportError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML job file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::SourceMissing { path } => {
                format!("Error: File {} not found", path.display())
            }
            ReportError::ReadFailure { path, source } => {
                format!("Error reading {}: {}", path.display(), source)
            }
            ReportError::WriteFailure { path, source } => {
                format!("Error writing to {}: {}", path.display(), source)
            }
            other => other.to_string(),
        }
    }
}
