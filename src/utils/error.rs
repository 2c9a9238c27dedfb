use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Content parsing error: {message}")]
    ContentParseError { message: String },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation failed: {}", failed.join(", "))]
    ValidationFailure { failed: Vec<String> },
}

impl PortfolioError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortfolioError::IoError(_) => "Check that the content file exists and is readable",
            PortfolioError::ContentParseError { .. } => {
                "Make sure the content file is valid TOML and every record has its required fields"
            }
            PortfolioError::SerializationError { .. } => "Report this as a bug",
            PortfolioError::InvalidConfigValueError { .. } => {
                "Fix the value in the [validation] table of the content file"
            }
            PortfolioError::ValidationFailure { .. } => {
                "Fix the failing content or rerun with --mode permissive"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::IoError(e) => format!("Could not read content: {}", e),
            PortfolioError::ContentParseError { message } => {
                format!("Content file is malformed: {}", message)
            }
            PortfolioError::SerializationError { message } => {
                format!("Could not write output: {}", message)
            }
            PortfolioError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            PortfolioError::ValidationFailure { failed } => {
                format!("{} portfolio check(s) failed: {}", failed.len(), failed.join(", "))
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_lists_names() {
        let err = PortfolioError::ValidationFailure {
            failed: vec!["links required".to_string(), "skills non-empty".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Validation failed: links required, skills non-empty"
        );
        assert!(err.user_friendly_message().starts_with("2 portfolio check(s) failed"));
    }
}
