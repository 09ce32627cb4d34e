use std::time::Duration;

use crate::config::error::ConfigError;
use thiserror::Error;

/// Application-wide error type.
///
/// Every failure on the required path of a station query ends up as one of
/// these variants. The `Display` text is what callers of the query endpoint
/// see in the `message` field, so it carries the upstream detail verbatim.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required request parameter was absent or empty. No network access
    /// happens once this is raised.
    #[error("{name} parameter is missing")]
    MissingParameter { name: String },

    /// A request parameter was present but unusable
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Network error, timeout, or non-success status from a required fetch
    #[error("{message}")]
    UpstreamFetch {
        url: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Malformed body or missing expected fields from a required source
    #[error("{message}")]
    UpstreamParse {
        url: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The query outlived its time budget
    #[error("Query timed out after {seconds}s")]
    QueryTimeout { seconds: u64 },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error: {source}")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        AppError::MissingParameter { name: name.into() }
    }

    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn fetch(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        AppError::UpstreamFetch {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    pub fn parse(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        AppError::UpstreamParse {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    pub fn query_timeout(budget: Duration) -> Self {
        AppError::QueryTimeout {
            seconds: budget.as_secs(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: error.into(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_id_message() {
        let err = AppError::missing_parameter("ID");
        assert_eq!(err.to_string(), "ID parameter is missing");
    }

    #[test]
    fn test_upstream_errors_expose_message() {
        let err = AppError::fetch("https://example.com", "request timed out", None);
        assert_eq!(err.to_string(), "request timed out");

        let err = AppError::parse("https://example.com", "invalid JSON: expected value", None);
        assert_eq!(err.to_string(), "invalid JSON: expected value");
    }

    #[test]
    fn test_query_timeout_message() {
        let err = AppError::query_timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Query timed out after 30s");
    }

    #[test]
    fn test_config_error_conversion_keeps_field() {
        let err: AppError = ConfigError::validation("server.port", "Port must be non-zero").into();
        match err {
            AppError::Configuration { key, .. } => assert_eq!(key, "server.port"),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_anyhow_becomes_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_string(), "Internal error: boom");
    }
}
