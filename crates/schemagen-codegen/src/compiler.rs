//! Schema compilation.
//!
//! Turns a [`ComponentDescriptor`] into a [`ComponentSchema`]: the property
//! list plus a function-calling [`ToolDefinition`]. Compilation is pure and
//! infallible; the same descriptor always yields the same schema.
//!
//! Per prop, the inferred type is refined by the static rules in
//! [`crate::rules`]:
//!
//! - a bound rule (`humidity`, `wind_speed`) forces `number` and adds
//!   `minimum`/`maximum`
//! - a shape rule (`data`, `columns`, `rows`) forces `array` and sets the
//!   element definition
//! - an enum rule (`chart_type`, `variant`, `icon`) restricts the values
//!
//! Arrays without a shape rule get a generic object element.

use crate::catalog::RENDER_TYPE_KEY;
use crate::rules;
use crate::schema::{ComponentSchema, ParameterDefinition, SchemaProperty, ToolDefinition, ToolParameters};
use schemagen_core::{ComponentDescriptor, ComponentName, PropDescriptor, PropType, naming};
use std::collections::BTreeMap;

/// Prefix of every tool name.
pub const TOOL_NAME_PREFIX: &str = "render_";

/// Derives the tool name for a component.
///
/// # Examples
///
/// ```
/// use schemagen_codegen::tool_name;
/// use schemagen_core::ComponentName;
///
/// assert_eq!(tool_name(&ComponentName::new("WeatherCard")), "render_weather_card");
/// assert_eq!(tool_name(&ComponentName::new("DataTable")), "render_data_table");
/// ```
#[must_use]
pub fn tool_name(component: &ComponentName) -> String {
    format!("{TOOL_NAME_PREFIX}{}", component.to_snake_case())
}

/// Whether a tool name is accepted by function-calling APIs.
///
/// Names must be non-empty ASCII letters, digits, and underscores.
///
/// # Examples
///
/// ```
/// use schemagen_codegen::compiler::is_valid_tool_name;
///
/// assert!(is_valid_tool_name("render_weather_card"));
/// assert!(!is_valid_tool_name("render_button.stories"));
/// ```
#[must_use]
pub fn is_valid_tool_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Compiles a descriptor into a schema artifact.
///
/// # Examples
///
/// ```
/// use schemagen_codegen::compile;
/// use schemagen_core::{ComponentCategory, ComponentDescriptor, ComponentName, PropDescriptor, PropType};
///
/// let descriptor = ComponentDescriptor {
///     name: ComponentName::new("InfoCard"),
///     source_path: "info-card.tsx".into(),
///     category: ComponentCategory::Content,
///     description: "Info Card component".to_string(),
///     props: vec![
///         PropDescriptor::new("title", PropType::String, true),
///         PropDescriptor::new("variant", PropType::String, false),
///     ],
/// };
///
/// let schema = compile(&descriptor);
/// assert_eq!(schema.name, "Info Card");
/// assert_eq!(schema.tool_definition.name, "render_info_card");
/// assert_eq!(schema.tool_definition.parameters.required, vec!["title"]);
/// assert_eq!(schema.property("variant").unwrap().enum_values.as_ref().unwrap().len(), 4);
/// ```
#[must_use]
pub fn compile(descriptor: &ComponentDescriptor) -> ComponentSchema {
    let title = naming::title_from_pascal_case(descriptor.name.as_str());

    let properties: Vec<SchemaProperty> = descriptor.props.iter().map(compile_property).collect();

    let parameters = properties
        .iter()
        .map(|property| (property.name.clone(), parameter_for(property)))
        .collect::<BTreeMap<_, _>>();

    let required = properties
        .iter()
        .filter(|property| property.required)
        .map(|property| property.name.clone())
        .collect();

    let tool_definition = ToolDefinition {
        name: tool_name(&descriptor.name),
        description: tool_description(&title, &descriptor.description),
        parameters: ToolParameters::new(parameters, required),
    };

    if !is_valid_tool_name(&tool_definition.name) {
        tracing::warn!(
            "Tool name {} of {} contains characters outside [A-Za-z0-9_]; function-calling APIs may reject it",
            tool_definition.name,
            descriptor.source_path.display()
        );
    }

    if tool_definition.parameters.properties.contains_key(RENDER_TYPE_KEY) {
        tracing::warn!(
            "{} declares a '{}' prop; it cannot be set in a render payload",
            descriptor.name,
            RENDER_TYPE_KEY
        );
    }

    tracing::debug!(
        "Compiled {} into tool {} ({} parameters)",
        descriptor.name,
        tool_definition.name,
        properties.len()
    );

    ComponentSchema {
        name: title,
        component_name: descriptor.name.clone(),
        category: descriptor.category,
        description: descriptor.description.clone(),
        properties,
        tool_definition,
    }
}

/// Compiles a batch of descriptors, preserving order.
#[must_use]
pub fn compile_all(descriptors: &[ComponentDescriptor]) -> Vec<ComponentSchema> {
    descriptors.iter().map(compile).collect()
}

/// Builds the tool description.
///
/// The generic describer output adds nothing beyond the title, so only a
/// richer description (from a doc comment) is appended.
fn tool_description(title: &str, description: &str) -> String {
    let generic = format!("{title} component");
    if description.is_empty() || description == generic {
        format!("Render {generic}")
    } else {
        format!("Render {generic}. {description}")
    }
}

fn refined_type(prop: &PropDescriptor) -> PropType {
    if rules::bounds_for(&prop.name).is_some() {
        PropType::Number
    } else if rules::shape_for(&prop.name).is_some() {
        PropType::Array
    } else {
        prop.prop_type
    }
}

fn compile_property(prop: &PropDescriptor) -> SchemaProperty {
    let prop_type = refined_type(prop);

    let items = (prop_type == PropType::Array).then(|| {
        rules::shape_for(&prop.name).map_or_else(rules::generic_item, rules::ArrayShape::item_definition)
    });

    let enum_values = rules::enum_for(&prop.name)
        .map(|values| values.iter().map(|v| (*v).to_string()).collect());

    SchemaProperty {
        name: prop.name.clone(),
        prop_type,
        required: prop.required,
        description: prop.description.clone(),
        enum_values,
        items,
    }
}

fn parameter_for(property: &SchemaProperty) -> ParameterDefinition {
    let mut param =
        ParameterDefinition::new(property.prop_type).with_description(property.description.clone());

    param.enum_values.clone_from(&property.enum_values);

    if let Some(bounds) = rules::bounds_for(&property.name) {
        param = param.with_bounds(bounds.minimum, bounds.maximum);
    }

    if let Some(items) = &property.items {
        param = param.with_items(items.clone());
    }

    param
}
