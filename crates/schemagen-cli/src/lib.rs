//! Schemagen CLI library.
//!
//! Exposes the command implementations, configuration, formatters, and the
//! sync pipeline so they can be tested without spawning the binary.

#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unnecessary_wraps)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod formatters;
pub mod pipeline;
pub mod runner;

pub use config::{Config, LoadedConfig, load_config};
pub use pipeline::{SyncOptions, SyncReport, run_sync};
