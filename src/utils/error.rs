use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Analysis service error: {message}")]
    ServiceError { message: String },

    #[error("Received an unexpected response from the server.")]
    UnexpectedResponseError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Network,
    Service,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AnalysisError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalysisError::ConfigError { .. }
            | AnalysisError::InvalidConfigValueError { .. }
            | AnalysisError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AnalysisError::ValidationError { .. } => ErrorCategory::Input,
            AnalysisError::HttpError(_) => ErrorCategory::Network,
            AnalysisError::ServiceError { .. } | AnalysisError::UnexpectedResponseError => {
                ErrorCategory::Service
            }
            AnalysisError::IoError(_) | AnalysisError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Service => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalysisError::IoError(e) => format!("Could not read or write a file: {}", e),
            AnalysisError::HttpError(e) if e.is_timeout() => {
                "The analysis service did not answer in time.".to_string()
            }
            AnalysisError::HttpError(e) => format!("An error occurred: {}", e),
            AnalysisError::ServiceError { message } => message.clone(),
            AnalysisError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            AnalysisError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
            AnalysisError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line flags and the TOML configuration file"
            }
            ErrorCategory::Input => "Provide a non-empty idea of at most 5000 characters",
            ErrorCategory::Network => "Make sure the analysis service is running and reachable",
            ErrorCategory::Service => {
                "Check the analysis service logs and its AI API key configuration"
            }
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
