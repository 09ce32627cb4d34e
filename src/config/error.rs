//! Errors raised while loading and validating bj-info settings.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// `--config` or `BJINFO_CONFIG_FILE` names a file that does not exist
    #[error("config file {} does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// The merged layers do not deserialize into `Settings`
    #[error("cannot deserialize settings: {0}")]
    ParseError(String),

    #[error("invalid setting `{field}`: {message}")]
    ValidationError { field: String, message: String },

    /// `BJINFO_APP_ENV` holds a name that is not an environment
    #[error(
        "unknown environment '{0}' in BJINFO_APP_ENV, \
         expected development, test, staging or production"
    )]
    UnknownEnvironment(String),

    #[error(
        "BJINFO_CONFIG_DIR and BJINFO_CONFIG_FILE are both set; \
         use the directory for layered files or the file for a single one"
    )]
    ConflictingSources,

    /// Reading a TOML layer or an environment variable failed
    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
