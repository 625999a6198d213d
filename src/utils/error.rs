use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("unknown service {input:?} (expected {expected})")]
    UnknownService { input: String, expected: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid callback URL {url:?}: {reason}")]
    CallbackError { url: String, reason: String },

    #[error("Authorization denied: {error}")]
    AuthorizationDenied { error: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Authorization,
    System,
}

impl ScopeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScopeError::UnknownService { .. } | ScopeError::CallbackError { .. } => {
                ErrorCategory::Input
            }
            ScopeError::ConfigError { .. }
            | ScopeError::InvalidConfigValueError { .. }
            | ScopeError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ScopeError::AuthorizationDenied { .. } => ErrorCategory::Authorization,
            ScopeError::IoError(_) | ScopeError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScopeError::UnknownService { input, expected } => {
                format!("'{}' is not a known service. Choose one of: {}", input, expected)
            }
            ScopeError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            ScopeError::InvalidConfigValueError { field, reason, .. } => {
                format!("The configuration value for '{}' is invalid: {}", field, reason)
            }
            ScopeError::AuthorizationDenied { error } => {
                format!("The authorization request was denied ({})", error)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the spelling of the value you passed and try again",
            ErrorCategory::Configuration => "Fix the configuration file and rerun the command",
            ErrorCategory::Authorization => "Restart the authorization flow and grant access",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScopeError>;
