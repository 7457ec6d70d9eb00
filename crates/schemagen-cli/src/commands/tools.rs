//! Tools command implementation.
//!
//! Lists the tool definitions recorded in a schema index.

use anyhow::{Context, Result};
use schemagen_codegen::{ComponentSchema, SchemaIndex};
use schemagen_core::ComponentCategory;
use schemagen_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::path::Path;
use tracing::{error, info};

use crate::formatters::format_output;

/// One tool as shown by `schemagen tools`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSummary {
    /// Tool name (`render_weather_card`)
    pub name: String,
    /// Component name
    pub component: String,
    /// Category label
    pub category: ComponentCategory,
    /// Tool description
    pub description: String,
    /// Required parameter names
    pub required: Vec<String>,
    /// Total parameter count
    pub parameters: usize,
}

impl From<&ComponentSchema> for ToolSummary {
    fn from(schema: &ComponentSchema) -> Self {
        let tool = &schema.tool_definition;
        Self {
            name: tool.name.clone(),
            component: schema.component_name.to_string(),
            category: schema.category,
            description: tool.description.clone(),
            required: tool.parameters.required.clone(),
            parameters: tool.parameters.properties.len(),
        }
    }
}

/// Lists tools from an index, optionally filtered by category.
///
/// # Errors
///
/// Returns an error if the index cannot be loaded.
pub fn list_tools(index: &Path, category: Option<ComponentCategory>) -> Result<Vec<ToolSummary>> {
    let index = SchemaIndex::load(index)
        .with_context(|| format!("failed to load schema index from {}", index.display()))?;

    let tools = match category {
        Some(category) => index.by_category(category).map(ToolSummary::from).collect(),
        None => index.schemas.iter().map(ToolSummary::from).collect(),
    };

    Ok(tools)
}

/// Runs the tools command.
///
/// # Errors
///
/// Returns an error if the index cannot be loaded or output formatting fails.
pub fn run(index: &Path, category: Option<&str>, output_format: OutputFormat) -> Result<ExitCode> {
    let category = match category.map(str::parse::<ComponentCategory>).transpose() {
        Ok(category) => category,
        Err(e) => {
            error!("{e}");
            return Ok(ExitCode::INVALID_INPUT);
        }
    };

    let tools = list_tools(index, category)?;
    info!("Found {} tools in {}", tools.len(), index.display());

    println!("{}", format_output(&tools, output_format)?);

    Ok(ExitCode::SUCCESS)
}
