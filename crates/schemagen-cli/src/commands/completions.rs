//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, `PowerShell`,
//! and elvish.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use schemagen_core::cli::ExitCode;
use std::io;
use tracing::info;

/// Writes the completion script for `shell` to stdout.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::Shell;
/// use schemagen_cli::commands::completions;
///
/// let mut cmd = Command::new("schemagen");
/// completions::generate_completions(Shell::Bash, &mut cmd);
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command) {
    info!("Generating {} completions", shell);
    generate(shell, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Runs the completions command.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    generate_completions(shell, cmd);
    Ok(ExitCode::SUCCESS)
}
