//! Add command implementation.
//!
//! Scaffolding new components is not implemented. The command validates
//! its arguments so scripts get a stable contract, then reports that the
//! operation is unavailable.

use anyhow::Result;
use schemagen_core::cli::{ExitCode, OutputFormat};
use schemagen_core::{ComponentCategory, ComponentName};
use serde::Serialize;
use tracing::{error, warn};

use crate::formatters::format_output;

/// Result of an `add` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddReport {
    /// Normalized component name
    pub component: String,
    /// Parsed category
    pub category: ComponentCategory,
    /// Source file that would be created
    pub file: String,
    /// Always `not_implemented`
    pub status: &'static str,
}

/// Parses a component name given as `weather-card` or `WeatherCard`.
///
/// Returns the `PascalCase` name and the hyphenated file stem.
///
/// # Errors
///
/// Returns an error if the name is empty or contains characters other
/// than ASCII letters, digits, and single hyphens.
pub fn parse_component_name(name: &str) -> Result<(ComponentName, String)> {
    let valid = !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && name.starts_with(|c: char| c.is_ascii_alphabetic())
        && !name.ends_with('-')
        && !name.contains("--");

    if !valid {
        anyhow::bail!(
            "invalid component name '{name}': use kebab-case (weather-card) or PascalCase (WeatherCard)"
        );
    }

    let stem = if name.contains('-') || name.chars().all(|c| !c.is_ascii_uppercase()) {
        name.to_lowercase()
    } else {
        schemagen_core::naming::to_snake_case(name).replace('_', "-")
    };

    Ok((ComponentName::from_stem(&stem), stem))
}

/// Builds the report for valid arguments.
///
/// # Errors
///
/// Returns an error if the name or category is invalid.
pub fn plan(name: &str, category: &str) -> Result<AddReport> {
    let (component, stem) = parse_component_name(name)?;
    let category: ComponentCategory = category.parse().map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(AddReport {
        component: component.into_inner(),
        category,
        file: format!("{stem}.tsx"),
        status: "not_implemented",
    })
}

/// Runs the add command.
///
/// Exits with [`ExitCode::INVALID_INPUT`] for bad arguments and
/// [`ExitCode::ERROR`] otherwise.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn run(name: &str, category: &str, output_format: OutputFormat) -> Result<ExitCode> {
    let report = match plan(name, category) {
        Ok(report) => report,
        Err(e) => {
            error!("{e}");
            return Ok(ExitCode::INVALID_INPUT);
        }
    };

    warn!(
        "add is not implemented: {} ({}) was not created",
        report.component, report.category
    );
    println!("{}", format_output(&report, output_format)?);

    Ok(ExitCode::ERROR)
}
