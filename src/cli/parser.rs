//! CLI argument parsing with clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Broadcaster info service for SOOP (AfreecaTV) stations
#[derive(Parser, Debug)]
#[command(name = "bj-info")]
#[command(about = "Broadcaster profile, live status and VOD archive as JSON")]
#[command(long_about = "
bj-info answers one question: what is broadcaster X doing, and what did they
stream recently? It serves the answer over HTTP or prints it for one id.

EXAMPLES:
    # Start the server with default configuration
    bj-info serve

    # Start server on custom host and port
    bj-info serve --host 0.0.0.0 --port 8080

    # Check configuration without starting server
    bj-info serve --dry-run

    # Print the JSON body for one broadcaster
    bj-info lookup phonics1 --start-date 2025-09-01 --limit 10
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Replaces the layered config/ directory with a single TOML file.
    /// BJINFO_* environment variables still apply on top.
    #[arg(
        short,
        long,
        value_name = "FILE",
        value_parser = super::validation::validate_config_file_path
    )]
    pub config: Option<PathBuf>,

    /// Override environment detection (BJINFO_APP_ENV)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Examples:
    ///   bj-info serve                            # Start with defaults
    ///   bj-info serve --host 0.0.0.0 --port 80   # Bind to all interfaces on port 80
    ///   bj-info serve --dry-run                  # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Default: 127.0.0.1
        #[arg(
            long,
            value_name = "ADDRESS",
            value_parser = super::validation::validate_host_address
        )]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Default: 3000
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override, wins over --verbose/--quiet
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Query one broadcaster and print the JSON body to stdout
    ///
    /// Exits non-zero when the query fails; the failure body is still printed.
    Lookup {
        /// Broadcaster id
        #[arg(value_name = "ID")]
        id: String,

        /// Inclusive window start, YYYY-MM-DD
        #[arg(long, value_name = "DATE", value_parser = super::validation::validate_date)]
        start_date: Option<String>,

        /// Inclusive window end, YYYY-MM-DD
        #[arg(long, value_name = "DATE", value_parser = super::validation::validate_date)]
        end_date: Option<String>,

        /// Maximum number of VODs
        #[arg(short, long, value_name = "N", value_parser = super::validation::validate_limit)]
        limit: Option<usize>,

        /// Only list replays
        #[arg(long)]
        review: bool,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl Cli {
    /// The subcommand, `serve` with defaults when none was given
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve {
            host: None,
            port: None,
            log_level: None,
            dry_run: false,
        })
    }

    /// Whether stdout is reserved for command output
    pub fn writes_to_stdout(&self) -> bool {
        matches!(self.command, Some(Commands::Lookup { .. }))
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
