//! Validate command implementation.
//!
//! Checks tool-call arguments against a component schema and prints the
//! render payload a consumer would receive.

use anyhow::{Context, Result};
use schemagen_codegen::{RenderPayload, SchemaIndex, ValidationIssue, validate_payload};
use schemagen_core::Error;
use schemagen_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{error, info};

use crate::formatters::format_output;

/// Report printed when arguments are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Component the arguments were checked against
    pub component: String,
    /// Always false
    pub valid: bool,
    /// Every problem found
    pub issues: Vec<ValidationIssue>,
}

/// Outcome of validating one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Arguments match; the payload is ready to render.
    Valid(RenderPayload),
    /// Arguments were rejected.
    Invalid(ValidationReport),
}

/// Reads the payload text; `-` means stdin.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub fn read_payload(payload: &str) -> Result<String> {
    if payload != "-" {
        return Ok(payload.to_string());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read payload from stdin")?;
    Ok(buffer)
}

/// Validates a JSON payload against one component of an index.
///
/// Malformed JSON is reported as an invalid payload rather than an error.
///
/// # Errors
///
/// Returns an error if the index cannot be loaded or does not contain the
/// component.
pub fn validate(index: &Path, component: &str, payload: &str) -> Result<Validation> {
    let index = SchemaIndex::load(index)
        .with_context(|| format!("failed to load schema index from {}", index.display()))?;
    let schema = index.get(component)?;

    let arguments: Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(e) => {
            return Ok(Validation::Invalid(ValidationReport {
                component: schema.component_name.to_string(),
                valid: false,
                issues: vec![ValidationIssue::new("$", format!("invalid JSON: {e}"))],
            }));
        }
    };

    let issues = validate_payload(schema, &arguments);
    if !issues.is_empty() {
        return Ok(Validation::Invalid(ValidationReport {
            component: schema.component_name.to_string(),
            valid: false,
            issues,
        }));
    }

    match RenderPayload::build(schema, &arguments) {
        Ok(render) => Ok(Validation::Valid(render)),
        Err(Error::ValidationError { field, reason }) => Ok(Validation::Invalid(ValidationReport {
            component: schema.component_name.to_string(),
            valid: false,
            issues: vec![ValidationIssue::new(field, reason)],
        })),
        Err(e) => Err(e.into()),
    }
}

/// Exit code for a failed lookup: an unknown component is a bad argument,
/// anything else (missing or unreadable index) is an error.
fn lookup_exit_code(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<Error>() {
        Some(e) if e.is_not_found() => ExitCode::INVALID_INPUT,
        _ => ExitCode::ERROR,
    }
}

/// Runs the validate command.
///
/// # Errors
///
/// Returns an error if the payload cannot be read or output formatting
/// fails.
pub fn run(index: &Path, component: &str, payload: &str, output_format: OutputFormat) -> Result<ExitCode> {
    let payload = read_payload(payload)?;

    let validation = match validate(index, component, &payload) {
        Ok(validation) => validation,
        Err(e) => {
            error!("{e:#}");
            return Ok(lookup_exit_code(&e));
        }
    };

    match validation {
        Validation::Valid(render) => {
            info!("Payload is valid for {}", render.render_type);
            println!("{}", format_output(&render, output_format)?);
            Ok(ExitCode::SUCCESS)
        }
        Validation::Invalid(report) => {
            for issue in &report.issues {
                error!("{issue}");
            }
            println!("{}", format_output(&report, output_format)?);
            Ok(ExitCode::INVALID_INPUT)
        }
    }
}
