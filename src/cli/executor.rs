//! Command executor for dispatching CLI commands

use std::process::ExitCode;

use super::handlers::{LookupCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::services::QueryOptions;

/// Dispatch the parsed command with merged, validated settings
///
/// # Errors
/// Returns startup and runtime errors from the command handlers. A failed
/// lookup is not an error: its body is printed and the exit code is 1.
pub async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<ExitCode> {
    match cli.command_or_default() {
        Commands::Serve { dry_run, .. } => {
            ServeCommandHandler::new(settings).execute(dry_run).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lookup {
            id,
            start_date,
            end_date,
            limit,
            review,
        } => {
            let options = QueryOptions {
                start_date,
                end_date,
                limit,
                review: review.then_some(true),
            };
            let success = LookupCommandHandler::new(&settings)?
                .execute(&id, &options)
                .await?;
            Ok(if success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}
