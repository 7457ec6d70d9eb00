//! Sync command implementation.
//!
//! Regenerates every schema artifact from the component sources.

use anyhow::Result;
use schemagen_core::cli::{ExitCode, OutputFormat};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::SyncConfig;
use crate::formatters::format_output;
use crate::pipeline::{SyncOptions, run_sync};

/// Overrides given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncArgs {
    /// Source directory override
    pub source: Option<PathBuf>,
    /// Output directory override
    pub output: Option<PathBuf>,
    /// Force sequential processing
    pub no_parallel: bool,
    /// Force recursive scanning
    pub recursive: bool,
}

/// Merges command-line overrides into the configured options.
#[must_use]
pub fn resolve_options(args: SyncArgs, config: &SyncConfig) -> SyncOptions {
    let mut options = SyncOptions::from_config(config);

    if let Some(source) = args.source {
        options.source_dir = source;
    }
    if let Some(output) = args.output {
        options.output_dir = output;
    }
    if args.no_parallel {
        options.parallel = false;
    }
    if args.recursive {
        options.recursive = true;
    }

    options
}

/// Runs the sync command.
///
/// Returns [`ExitCode::PARTIAL_FAILURE`] when some files failed but the
/// artifacts were still written.
///
/// # Errors
///
/// Returns an error if the source directory is missing or the output cannot
/// be written.
pub fn run(args: SyncArgs, config: &SyncConfig, output_format: OutputFormat) -> Result<ExitCode> {
    let options = resolve_options(args, config);
    let report = run_sync(&options)?;

    info!(
        "Synced {} components to {} ({} skipped, {} failed)",
        report.components.len(),
        report.output_dir.display(),
        report.skipped.len(),
        report.failed.len()
    );

    println!("{}", format_output(&report, output_format)?);

    if report.has_failures() {
        warn!("{} files could not be processed", report.failed.len());
        return Ok(ExitCode::PARTIAL_FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
