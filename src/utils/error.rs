use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Dataset not found: {path}")]
    SourceMissing { path: String },

    #[error("Required column '{column}' is missing (available: {})", .available.join(", "))]
    SchemaMissing {
        column: String,
        available: Vec<String>,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Schema,
    Configuration,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::SourceMissing { .. } | ReportError::CsvError(_) => ErrorCategory::Source,
            ReportError::SchemaMissing { .. } => ErrorCategory::Schema,
            ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ReportError::ProcessingError { .. } | ReportError::SerializationError(_) => {
                ErrorCategory::Processing
            }
            ReportError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Every failure aborts startup; severity only picks the exit code.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::System => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ReportError::SourceMissing { path } => {
                format!("Check that the dataset exists at '{}' or pass --input", path)
            }
            ReportError::SchemaMissing { column, .. } => format!(
                "Add a '{}' column to the dataset or set --department-column",
                column
            ),
            ReportError::CsvError(_) => {
                "Make sure the dataset is a well-formed CSV/TSV file with a header row".to_string()
            }
            ReportError::IoError(_) => {
                "Check file permissions and available disk space".to_string()
            }
            ReportError::SerializationError(_) => {
                "The report could not be serialized; re-run with --verbose".to_string()
            }
            ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::MissingConfigError { .. } => {
                "Review the configuration values and try again".to_string()
            }
            ReportError::ProcessingError { .. } => {
                "Inspect the dataset for malformed rows".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::SourceMissing { path } => format!("Cannot find dataset '{}'", path),
            ReportError::SchemaMissing { column, .. } => {
                format!("The dataset has no '{}' column", column)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_missing_lists_available_columns() {
        let err = ReportError::SchemaMissing {
            column: "Department".to_string(),
            available: vec!["Name".to_string(), "CGPA".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Required column 'Department' is missing (available: Name, CGPA)"
        );
        assert_eq!(err.category(), ErrorCategory::Schema);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = ReportError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_source_missing_message() {
        let err = ReportError::SourceMissing {
            path: "data.csv".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Cannot find dataset 'data.csv'");
        assert!(err.recovery_suggestion().contains("--input"));
    }
}
