//! Schema artifact types.
//!
//! A [`ComponentSchema`] is serialized as-is into `<ComponentName>.json` and
//! as one entry of `index.json`. Its [`ToolDefinition`] is the
//! function-calling contract offered to an agent.
//!
//! # Examples
//!
//! ```
//! use schemagen_codegen::ParameterDefinition;
//! use schemagen_core::PropType;
//!
//! let param = ParameterDefinition::new(PropType::Number)
//!     .with_description("Humidity")
//!     .with_bounds(Some(0), Some(100));
//!
//! let json = serde_json::to_value(&param).unwrap();
//! assert_eq!(json["maximum"], 100);
//! assert!(json.get("enum").is_none());
//! ```

use schemagen_core::{ComponentCategory, ComponentName, PropType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON-Schema-shaped definition of one tool parameter.
///
/// Optional keywords are omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    /// Structural type
    #[serde(rename = "type")]
    pub param_type: PropType,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed string values
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Inclusive lower bound for numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    /// Inclusive upper bound for numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    /// Element definition for arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ParameterDefinition>>,
    /// Field definitions for objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, ParameterDefinition>>,
    /// Required field names for objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Whether objects accept keys beyond `properties`
    #[serde(
        rename = "additionalProperties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<bool>,
}

impl ParameterDefinition {
    /// Creates a bare definition of the given type.
    #[must_use]
    pub const fn new(param_type: PropType) -> Self {
        Self {
            param_type,
            description: None,
            enum_values: None,
            minimum: None,
            maximum: None,
            items: None,
            properties: None,
            required: None,
            additional_properties: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restricts the value to a fixed set of strings.
    #[must_use]
    pub fn with_enum(mut self, values: &[&str]) -> Self {
        self.enum_values = Some(values.iter().map(|v| (*v).to_string()).collect());
        self
    }

    /// Sets inclusive numeric bounds.
    #[must_use]
    pub const fn with_bounds(mut self, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Sets the array element definition.
    #[must_use]
    pub fn with_items(mut self, items: Self) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Sets object fields and the required subset.
    #[must_use]
    pub fn with_properties(
        mut self,
        properties: BTreeMap<String, Self>,
        required: Vec<String>,
    ) -> Self {
        self.properties = Some(properties);
        self.required = Some(required);
        self
    }

    /// Sets whether extra object keys are accepted.
    #[must_use]
    pub const fn with_additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(allowed);
        self
    }
}

/// Parameter block of a tool definition: always an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParameters {
    /// Always [`PropType::Object`]
    #[serde(rename = "type")]
    pub schema_type: PropType,
    /// Parameter definitions keyed by prop name
    pub properties: BTreeMap<String, ParameterDefinition>,
    /// Required prop names in declaration order
    pub required: Vec<String>,
}

impl ToolParameters {
    /// Creates an object parameter block.
    #[must_use]
    pub const fn new(properties: BTreeMap<String, ParameterDefinition>, required: Vec<String>) -> Self {
        Self {
            schema_type: PropType::Object,
            properties,
            required,
        }
    }
}

/// Function-calling definition for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name, `render_` followed by the snake-case component name
    pub name: String,
    /// Description shown to the model
    pub description: String,
    /// Parameter schema
    pub parameters: ToolParameters,
}

/// One property entry of a [`ComponentSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaProperty {
    /// Prop name
    pub name: String,
    /// Structural type after rule refinement
    #[serde(rename = "type")]
    pub prop_type: PropType,
    /// Whether the prop must be supplied
    pub required: bool,
    /// Human-readable description
    pub description: String,
    /// Allowed values, when an enum rule applies
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Element shape, for arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ParameterDefinition>,
}

/// Compiled schema artifact for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSchema {
    /// Human title, e.g. `Weather Card`
    pub name: String,
    /// `PascalCase` component name, e.g. `WeatherCard`
    pub component_name: ComponentName,
    /// Category label
    pub category: ComponentCategory,
    /// Component description
    pub description: String,
    /// Properties in declaration order
    pub properties: Vec<SchemaProperty>,
    /// Function-calling definition
    pub tool_definition: ToolDefinition,
}

impl ComponentSchema {
    /// Returns the render-payload discriminator (`weather_card`).
    #[must_use]
    pub fn render_type(&self) -> String {
        self.component_name.to_snake_case()
    }

    /// Returns the tool name.
    #[must_use]
    pub fn tool_name(&self) -> &str {
        &self.tool_definition.name
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns the artifact file name (`WeatherCard.json`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.component_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_definition_omits_absent_keywords() {
        let param = ParameterDefinition::new(PropType::String).with_description("Location");
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value, json!({"type": "string", "description": "Location"}));
    }

    #[test]
    fn test_parameter_definition_nested() {
        let mut fields = BTreeMap::new();
        fields.insert("label".to_string(), ParameterDefinition::new(PropType::String));
        let item = ParameterDefinition::new(PropType::Object)
            .with_properties(fields, vec!["label".to_string()])
            .with_additional_properties(false);
        let param = ParameterDefinition::new(PropType::Array).with_items(item);

        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value["items"]["properties"]["label"]["type"], "string");
        assert_eq!(value["items"]["required"], json!(["label"]));
        assert_eq!(value["items"]["additionalProperties"], false);
    }

    #[test]
    fn test_parameter_definition_deserializes_sparse_json() {
        let param: ParameterDefinition =
            serde_json::from_value(json!({"type": "number", "minimum": 0})).unwrap();
        assert_eq!(param.param_type, PropType::Number);
        assert_eq!(param.minimum, Some(0));
        assert!(param.maximum.is_none());
    }

    #[test]
    fn test_tool_parameters_type_is_object() {
        let params = ToolParameters::new(BTreeMap::new(), vec![]);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({"type": "object", "properties": {}, "required": []}));
    }
}
