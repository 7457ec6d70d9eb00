//! Command execution and runtime logic.
//!
//! Contains the command dispatch and logging initialization.

use anyhow::Result;
use schemagen_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Commands;
use crate::commands;
use crate::commands::sync::SyncArgs;
use crate::config::LoadedConfig;

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug level. Otherwise `RUST_LOG` wins, then the
/// configured `log_level`. Logs go to stderr so stdout stays parseable.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
pub fn init_logging(verbose: bool, log_level: &str) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
/// Paths not given on the command line fall back to the `[sync]` section.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn execute_command(
    command: Commands,
    output_format: OutputFormat,
    loaded: &LoadedConfig,
) -> Result<ExitCode> {
    let sync_config = &loaded.config.sync;

    match command {
        Commands::Sync {
            source,
            output,
            no_parallel,
            recursive,
        } => commands::sync::run(
            SyncArgs {
                source,
                output,
                no_parallel,
                recursive,
            },
            sync_config,
            output_format,
        ),
        Commands::Add { name, category } => commands::add::run(&name, &category, output_format),
        Commands::Tools { index, category } => {
            let index = index.unwrap_or_else(|| sync_config.output_dir.clone());
            commands::tools::run(&index, category.as_deref(), output_format)
        }
        Commands::Validate {
            index,
            component,
            payload,
        } => {
            let index = index.unwrap_or_else(|| sync_config.output_dir.clone());
            commands::validate::run(&index, &component, &payload, output_format)
        }
        Commands::Config { action } => commands::config::run(action, loaded, output_format),
        Commands::Completions { shell } => {
            use crate::cli::Cli;
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
