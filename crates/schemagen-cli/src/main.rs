//! Schemagen CLI.
//!
//! Synthesizes JSON schemas and LLM tool definitions from UI component
//! sources.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `sync` - Regenerate schema artifacts from component sources
//! - `add` - Scaffold a component (not implemented)
//! - `tools` - List tool definitions from an index
//! - `validate` - Check tool-call arguments against a schema
//! - `config` - Manage the configuration file
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Regenerate schemas using ./schemagen.toml
//! schemagen sync
//!
//! # List tools as JSON
//! schemagen tools --format json
//! ```

use anyhow::Result;
use clap::Parser;
use schemagen_cli::cli::Cli;
use schemagen_cli::config::load_config;
use schemagen_cli::runner::{execute_command, init_logging};
use schemagen_core::cli::OutputFormat;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose, &loaded.config.general.log_level)?;

    let output_format = match cli.format.as_deref() {
        Some(format) => format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("{e}"))?,
        None => loaded.config.output_format()?,
    };

    let exit_code = execute_command(cli.command, output_format, &loaded)?;

    std::process::exit(exit_code.as_i32());
}
