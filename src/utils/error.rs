use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("Invalid Carrier Type: {carrier}")]
    UnknownCarrier { carrier: String },

    #[error("Coverage store request failed: {message}")]
    Store { message: String },

    #[error("Malformed coverage record: attribute {attribute} is not a string or number")]
    MalformedRecord { attribute: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller asked for something that cannot exist.
    Client,
    /// The store or the runtime failed underneath a valid request.
    Server,
    Configuration,
}

impl CoverageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CoverageError::UnknownCarrier { .. } => ErrorCategory::Client,
            CoverageError::Store { .. }
            | CoverageError::MalformedRecord { .. }
            | CoverageError::IoError(_)
            | CoverageError::SerializationError(_) => ErrorCategory::Server,
            CoverageError::TomlError(_)
            | CoverageError::ConfigError { .. }
            | CoverageError::MissingConfigError { .. }
            | CoverageError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Client
    }
}

pub type Result<T> = std::result::Result<T, CoverageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_carrier_is_client_error() {
        let err = CoverageError::UnknownCarrier {
            carrier: "5".to_string(),
        };
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Invalid Carrier Type: 5");
    }

    #[test]
    fn test_store_failures_are_server_errors() {
        let err = CoverageError::Store {
            message: "timeout".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(!err.is_client_error());

        let err = CoverageError::MalformedRecord {
            attribute: "zipcode".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Server);
    }

    #[test]
    fn test_config_errors() {
        let err = CoverageError::MissingConfigError {
            field: "DYNAMODB_ARN".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
