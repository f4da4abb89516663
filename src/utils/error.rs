use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

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

    #[error("Unknown section: {name}")]
    UnknownSection { name: String },

    #[error("Dataset error in '{field}': {reason}")]
    DatasetError { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. }
            | SiteError::UnknownSection { .. } => ErrorCategory::Configuration,
            SiteError::DatasetError { .. } | SiteError::SerializationError(_) => {
                ErrorCategory::Data
            }
            SiteError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::IoError(e) => match e.kind() {
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::TimedOut => {
                    ErrorSeverity::Medium
                }
                _ => ErrorSeverity::Critical,
            },
            SiteError::SerializationError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            SiteError::SerializationError(_) => {
                "Inspect the dataset for values that cannot be encoded as JSON".to_string()
            }
            SiteError::ConfigError { .. } | SiteError::ConfigValidationError { .. } => {
                "Check the configuration file syntax and field names".to_string()
            }
            SiteError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and try again", field)
            }
            SiteError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            SiteError::UnknownSection { .. } => {
                "Use one of: home, about, experience, projects, skills, contact".to_string()
            }
            SiteError::DatasetError { field, .. } => {
                format!("Fix the '{}' entry in the built-in dataset", field)
            }
        }
    }

    /// Process exit code for a failed build.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Data => format!("Portfolio data problem: {}", self),
            ErrorCategory::System => format!("Could not write the site: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
