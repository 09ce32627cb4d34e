//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{
    CollectorConfig, FileSettings, LoggerSettings, ServerConfig, Settings, UpstreamConfig,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Upper bound for `collector.max_pages`
const MAX_PAGE_BOUND: u32 = 100;

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Request timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl UpstreamConfig {
    /// Validate upstream configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::validation(
                "upstream.timeout_secs",
                "Upstream timeout must be greater than 0 seconds.",
            ));
        }

        for (field, value) in [
            ("upstream.station_api_base", &self.station_api_base),
            ("upstream.station_page_base", &self.station_page_base),
            ("upstream.vod_player_base", &self.vod_player_base),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    field: field.to_string(),
                    message: format!("Expected an http(s) URL, got '{}'", value),
                });
            }
        }

        Ok(())
    }
}

impl CollectorConfig {
    /// Validate collector configuration
    ///
    /// # Validation Rules
    /// - `max_pages` must be between 1 and 100
    /// - `per_page` must be greater than 0
    /// - window dates must be `YYYY-MM-DD` with start not after end
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_pages == 0 || self.max_pages > MAX_PAGE_BOUND {
            return Err(ConfigError::ValidationError {
                field: "collector.max_pages".to_string(),
                message: format!("max_pages must be between 1 and {}", MAX_PAGE_BOUND),
            });
        }

        if self.per_page == 0 {
            return Err(ConfigError::validation(
                "collector.per_page",
                "per_page must be greater than 0.",
            ));
        }

        let start = parse_window_date("collector.start_date", self.start_date.as_deref())?;
        let end = parse_window_date("collector.end_date", self.end_date.as_deref())?;
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(ConfigError::validation(
                    "collector",
                    "start_date must not be after end_date.",
                ));
            }
        }

        Ok(())
    }
}

fn parse_window_date(
    field: &str,
    value: Option<&str>,
) -> Result<Option<jiff::civil::Date>, ConfigError> {
    value
        .map(|raw| {
            raw.parse::<jiff::civil::Date>()
                .map_err(|e| ConfigError::ValidationError {
                    field: field.to_string(),
                    message: format!("Invalid date '{}': {}", raw, e),
                })
        })
        .transpose()
}

impl FileSettings {
    /// Validate file settings
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        self.file.validate()?;

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.logger.validate()?;
        self.upstream.validate()?;
        self.collector.validate()?;
        Ok(())
    }
}
