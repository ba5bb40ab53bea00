use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpacelyError {
    #[error("Catalog download failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern compilation error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Budget not found in request")]
    BudgetNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Request,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SpacelyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SpacelyError::HttpError(_) => ErrorCategory::Network,
            SpacelyError::CsvError(_) | SpacelyError::CatalogError { .. } => ErrorCategory::Data,
            SpacelyError::SerializationError(_) => ErrorCategory::Data,
            SpacelyError::ConfigValidationError { .. }
            | SpacelyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SpacelyError::ValidationError { .. } | SpacelyError::BudgetNotFound => {
                ErrorCategory::Request
            }
            SpacelyError::IoError(_) | SpacelyError::PatternError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SpacelyError::HttpError(_) => "Check the catalog URL and your network connection",
            SpacelyError::CsvError(_) | SpacelyError::CatalogError { .. } => {
                "Make sure the catalog is a CSV file with 'category' and 'price' columns"
            }
            SpacelyError::IoError(_) => "Check that the file exists and is readable",
            SpacelyError::SerializationError(_) => "Retry without --json",
            SpacelyError::PatternError(_) => "Category names could not be matched; check the catalog",
            SpacelyError::ConfigValidationError { .. }
            | SpacelyError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line options"
            }
            SpacelyError::ValidationError { .. } => "Enter a non-empty request",
            SpacelyError::BudgetNotFound => {
                "Include your budget as a number, e.g. 'Budget Rp 5.000.000, bed 2'"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SpacelyError::BudgetNotFound => "No budget was found in your request.".to_string(),
            SpacelyError::ValidationError { message } => message.clone(),
            SpacelyError::HttpError(_) => "The furniture catalog could not be downloaded.".to_string(),
            SpacelyError::CsvError(_) | SpacelyError::CatalogError { .. } => {
                format!("The furniture catalog could not be read: {}", self)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpacelyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_not_found_is_a_request_error() {
        let err = SpacelyError::BudgetNotFound;
        assert_eq!(err.category(), ErrorCategory::Request);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.recovery_suggestion().contains("budget"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = SpacelyError::InvalidConfigValueError {
            field: "currency.rate".to_string(),
            value: "0".to_string(),
            reason: "Value must be a positive finite number".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.user_friendly_message(),
            "Invalid value '0' for 'currency.rate': Value must be a positive finite number"
        );
    }
}
