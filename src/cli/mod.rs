//! Command-line interface: parsing, configuration merging and dispatch.

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, LogLevel};

use anyhow::Context;

use crate::config::Settings;
use crate::logger::init_logger;

/// Load configuration from files and environment, then apply CLI overrides.
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    let merger = ConfigurationMerger::load(cli.config.as_deref(), cli.env.map(Into::into))
        .context("Configuration error")?;

    merger
        .merge_cli_args(cli)
        .context("Configuration merge error")
}

/// Install the global tracing subscriber. Console output goes to stderr
/// when the command prints its result to stdout.
pub fn init_logger_from_settings(settings: &Settings, stdout_reserved: bool) -> anyhow::Result<()> {
    let mut logger_config = settings
        .logger
        .clone()
        .into_logger_config()
        .context("Logger configuration error")?;
    if stdout_reserved {
        logger_config.console = logger_config.console.to_stderr();
    }

    init_logger(logger_config).context("Logger initialization error")
}
