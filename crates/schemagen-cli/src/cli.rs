//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands
//! - `ConfigAction` - Config subcommands

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Schemagen - component schema synthesis.
///
/// Reads UI component sources, infers their props, and writes JSON schemas
/// with function-calling tool definitions for LLM agents.
#[derive(Parser, Debug)]
#[command(name = "schemagen")]
#[command(version, about, long_about = None)]
#[command(author = "Schemagen Team")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty); defaults to the config value
    #[arg(long = "format", global = true)]
    pub format: Option<String>,

    /// Path to a config file (default: ./schemagen.toml, then the user config dir)
    #[arg(long = "config", global = true, env = "SCHEMAGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synchronize schemas with component sources.
    ///
    /// Scans the source directory, extracts each component's props, and
    /// writes `<ComponentName>.json` plus `index.json` to the output
    /// directory. Files that cannot be read are reported and skipped;
    /// the exit code is 3 if any file failed.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Use configured directories
    /// schemagen sync
    ///
    /// # Explicit directories
    /// schemagen sync src/components public/schemas
    /// ```
    Sync {
        /// Component source directory (default: sync.source_dir)
        source: Option<PathBuf>,

        /// Schema output directory (default: sync.output_dir)
        output: Option<PathBuf>,

        /// Process files sequentially
        #[arg(long)]
        no_parallel: bool,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },

    /// Scaffold a new component (not implemented yet).
    ///
    /// Validates the component name and category, then exits with status 1.
    Add {
        /// Component name (`weather-card` or `WeatherCard`)
        name: String,

        /// Component category (`data_visualization`, `data_display`, `content`, `general`)
        category: String,
    },

    /// List tool definitions from a schema index.
    ///
    /// # Examples
    ///
    /// ```bash
    /// schemagen tools --category data_display
    /// ```
    Tools {
        /// Index file or directory containing `index.json` (default: sync.output_dir)
        #[arg(long)]
        index: Option<PathBuf>,

        /// Only list tools of this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Validate tool-call arguments and print the render payload.
    ///
    /// Exits with status 2 if the payload does not match the schema or the
    /// component is unknown, and 1 if the index cannot be read.
    ///
    /// # Examples
    ///
    /// ```bash
    /// schemagen validate --component WeatherCard '{"location": "Paris", "temperature": 21}'
    ///
    /// # Read the payload from stdin
    /// echo '{"title": "Hi", "content": "..."}' | schemagen validate --component info_card -
    /// ```
    Validate {
        /// Index file or directory containing `index.json` (default: sync.output_dir)
        #[arg(long)]
        index: Option<PathBuf>,

        /// Component name, tool name, or render type
        #[arg(short, long)]
        component: String,

        /// JSON payload, or `-` to read from stdin
        payload: String,
    },

    /// Manage the configuration file.
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration.
    Show,

    /// Write a default configuration file.
    Init {
        /// Write `./schemagen.toml` instead of the user config file
        #[arg(long)]
        local: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the path of the configuration file in use.
    Path,
}
