//! Configuration settings structures for bj-info
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "bj-info".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/app.log".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_station_api_base() -> String {
    "https://chapi.sooplive.co.kr/api".to_string()
}

fn default_station_page_base() -> String {
    "https://ch.sooplive.co.kr".to_string()
}

fn default_vod_player_base() -> String {
    "https://vod.sooplive.co.kr/player".to_string()
}

fn default_upstream_timeout() -> u64 {
    5
}

fn default_referer() -> String {
    "https://www.sooplive.co.kr/".to_string()
}

fn default_accept_language() -> String {
    "ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7".to_string()
}

fn default_max_pages() -> u32 {
    20
}

fn default_per_page() -> u32 {
    20
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Budget for one broadcaster query in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

// ============================================================================
// Upstream Configuration
// ============================================================================

/// Outbound fetch configuration for the streaming platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the structured station/VOD API
    #[serde(default = "default_station_api_base")]
    pub station_api_base: String,

    /// Base URL of the HTML station page
    #[serde(default = "default_station_page_base")]
    pub station_page_base: String,

    /// Base URL for VOD player links, `title_no` is appended
    #[serde(default = "default_vod_player_base")]
    pub vod_player_base: String,

    /// Per-fetch timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout_secs: u64,

    /// Fixed User-Agent. A Chrome/Windows agent is used when unset.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Referer header sent with every fetch
    #[serde(default = "default_referer")]
    pub referer: String,

    /// Accept-Language header sent with every fetch
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            station_api_base: default_station_api_base(),
            station_page_base: default_station_page_base(),
            vod_player_base: default_vod_player_base(),
            timeout_secs: default_upstream_timeout(),
            user_agent: None,
            referer: default_referer(),
            accept_language: default_accept_language(),
        }
    }
}

// ============================================================================
// Collector Configuration
// ============================================================================

/// VOD collection defaults, overridable per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Safety bound on the number of VOD pages fetched
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Records requested per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Maximum number of VOD records returned, unbounded when unset
    #[serde(default)]
    pub max_vods: Option<usize>,

    /// Inclusive window start, `YYYY-MM-DD`
    #[serde(default)]
    pub start_date: Option<String>,

    /// Inclusive window end, `YYYY-MM-DD`
    #[serde(default)]
    pub end_date: Option<String>,

    /// Only collect the "review" (replay) sub-type of VODs
    #[serde(default)]
    pub review_only: bool,

    /// Fetch the station page for the page-based profile fallbacks
    #[serde(default = "default_true")]
    pub station_page: bool,

    /// Report social links, from the station API and the station page
    #[serde(default = "default_true")]
    pub social_links: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            per_page: default_per_page(),
            max_vods: None,
            start_date: None,
            end_date: None,
            review_only: false,
            station_page: default_true(),
            social_links: default_true(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console_config = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let file_config = self.file.into_file_config()?;

        LoggerConfig::new(console_config, file_config, self.level).map_err(|e| {
            ConfigError::ValidationError {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }
}

impl FileSettings {
    /// Convert FileSettings to FileConfig
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::validation("logger.file.format".to_string(), e.to_string()))?;

        FileConfig::new(self.enabled, PathBuf::from(self.path), self.append, format).map_err(|e| {
            ConfigError::ValidationError {
                field: "logger.file".to_string(),
                message: e.to_string(),
            }
        })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,

    /// Upstream fetch configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// VOD collection defaults
    #[serde(default)]
    pub collector: CollectorConfig,
}
