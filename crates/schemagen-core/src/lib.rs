//! Core types, naming rules, and errors for component schema synthesis.
//!
//! This crate provides the foundational types shared by every crate in the
//! schemagen workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Domain types (`ComponentName`, `ComponentDescriptor`, `PropDescriptor`)
//! - Closed label sets (`ComponentCategory`, `PropType`)
//! - Naming helpers used for file names, tool names, and descriptions
//! - Error hierarchy with contextual information
//! - CLI value types (`OutputFormat`, `ExitCode`)
//!
//! # Examples
//!
//! ```
//! use schemagen_core::{ComponentCategory, ComponentName, naming};
//!
//! let name = ComponentName::from_stem("weather-card");
//! assert_eq!(name.as_str(), "WeatherCard");
//! assert_eq!(naming::to_snake_case(name.as_str()), "weather_card");
//! assert_eq!(ComponentCategory::DataDisplay.as_str(), "data_display");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
mod error;
pub mod naming;
mod types;

pub use error::{Error, Result};
pub use types::{ComponentCategory, ComponentDescriptor, ComponentName, PropDescriptor, PropType};
