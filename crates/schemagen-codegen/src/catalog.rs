//! Schema catalog: the consumer side of `index.json`.
//!
//! An agent host loads the index, offers one tool per schema, and turns the
//! arguments of a tool call into a render payload tagged with the
//! component's snake-case `type`.
//!
//! # Examples
//!
//! ```
//! use schemagen_codegen::{RenderPayload, SchemaIndex, compile};
//! use schemagen_core::{ComponentCategory, ComponentDescriptor, ComponentName, PropDescriptor, PropType};
//! use serde_json::json;
//!
//! let descriptor = ComponentDescriptor {
//!     name: ComponentName::new("InfoCard"),
//!     source_path: "info-card.tsx".into(),
//!     category: ComponentCategory::Content,
//!     description: "Info Card component".to_string(),
//!     props: vec![PropDescriptor::new("title", PropType::String, true)],
//! };
//! let index = SchemaIndex::new(vec![compile(&descriptor)]);
//!
//! let schema = index.find("render_info_card").unwrap();
//! let payload = RenderPayload::build(schema, &json!({"title": "Hi"})).unwrap();
//!
//! assert_eq!(
//!     serde_json::to_value(payload).unwrap(),
//!     json!({"type": "info_card", "title": "Hi"})
//! );
//! ```

use crate::schema::{ComponentSchema, ParameterDefinition};
use schemagen_core::{ComponentCategory, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

/// File name of the aggregate index.
pub const INDEX_FILE_NAME: &str = "index.json";

/// Payload key carrying the component discriminator.
pub const RENDER_TYPE_KEY: &str = "type";

/// Contents of `index.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaIndex {
    /// Schemas in index order
    pub schemas: Vec<ComponentSchema>,
}

impl SchemaIndex {
    /// Wraps a list of schemas.
    #[must_use]
    pub const fn new(schemas: Vec<ComponentSchema>) -> Self {
        Self { schemas }
    }

    /// Parses an index from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the text is not a valid index.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::SerializationError {
            message: format!("invalid schema index: {e}"),
            source: Some(e),
        })
    }

    /// Loads an index file, or `index.json` inside a directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::SerializationError`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = if path.is_dir() {
            path.join(INDEX_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        let text = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let index = Self::from_json(&text)?;

        tracing::debug!("Loaded {} schemas from {}", index.len(), path.display());
        Ok(index)
    }

    /// Number of schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the index has no schemas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Finds a schema by component name, tool name, or render type.
    ///
    /// `WeatherCard`, `render_weather_card`, and `weather_card` all resolve
    /// to the same schema.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&ComponentSchema> {
        self.schemas.iter().find(|schema| {
            schema.component_name.as_str() == key
                || schema.tool_name() == key
                || schema.render_type() == key
        })
    }

    /// Like [`find`](Self::find), but reports a missing schema as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaNotFound`] if no schema matches.
    pub fn get(&self, key: &str) -> Result<&ComponentSchema> {
        self.find(key).ok_or_else(|| Error::SchemaNotFound {
            component: key.to_string(),
        })
    }

    /// Tool names in index order.
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        self.schemas.iter().map(ComponentSchema::tool_name).collect()
    }

    /// Schemas of one category, in index order.
    pub fn by_category(&self, category: ComponentCategory) -> impl Iterator<Item = &ComponentSchema> {
        self.schemas
            .iter()
            .filter(move |schema| schema.category == category)
    }
}

/// One problem found in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dotted path of the offending value (`data[1].label`)
    pub field: String,
    /// What is wrong
    pub reason: String,
}

impl ValidationIssue {
    /// Creates an issue for a field.
    #[must_use]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl From<ValidationIssue> for Error {
    fn from(issue: ValidationIssue) -> Self {
        Self::ValidationError {
            field: issue.field,
            reason: issue.reason,
        }
    }
}

/// Checks tool-call arguments against a schema's tool definition.
///
/// Returns every issue found; an empty list means the payload is valid.
/// Optional parameters may be `null`. A `type` key is rejected as reserved
/// for the render discriminator unless the component declares its own
/// `type` prop, in which case it is checked like any other parameter.
#[must_use]
pub fn validate_payload(schema: &ComponentSchema, payload: &Value) -> Vec<ValidationIssue> {
    let Some(object) = payload.as_object() else {
        return vec![ValidationIssue::new("$", "payload must be a JSON object")];
    };

    let parameters = &schema.tool_definition.parameters;
    let mut issues = Vec::new();

    for name in &parameters.required {
        match object.get(name) {
            None | Some(Value::Null) => {
                issues.push(ValidationIssue::new(name, "missing required parameter"));
            }
            Some(_) => {}
        }
    }

    for (key, value) in object {
        if key == RENDER_TYPE_KEY && !parameters.properties.contains_key(key) {
            issues.push(ValidationIssue::new(key, "reserved for the component discriminator"));
            continue;
        }

        let Some(definition) = parameters.properties.get(key) else {
            issues.push(ValidationIssue::new(key, "unknown parameter"));
            continue;
        };

        if value.is_null() && !parameters.required.contains(key) {
            continue;
        }

        check_value(key, definition, value, &mut issues);
    }

    issues
}

#[allow(clippy::cast_precision_loss)]
fn check_value(path: &str, definition: &ParameterDefinition, value: &Value, issues: &mut Vec<ValidationIssue>) {
    if !definition.param_type.matches(value) {
        issues.push(ValidationIssue::new(
            path,
            format!("expected {}, got {}", definition.param_type, json_type_name(value)),
        ));
        return;
    }

    if let (Some(allowed), Some(text)) = (&definition.enum_values, value.as_str())
        && !allowed.iter().any(|candidate| candidate == text)
    {
        issues.push(ValidationIssue::new(
            path,
            format!("'{text}' is not one of: {}", allowed.join(", ")),
        ));
    }

    if let Some(number) = value.as_f64() {
        if let Some(minimum) = definition.minimum
            && number < minimum as f64
        {
            issues.push(ValidationIssue::new(path, format!("must be >= {minimum}")));
        }
        if let Some(maximum) = definition.maximum
            && number > maximum as f64
        {
            issues.push(ValidationIssue::new(path, format!("must be <= {maximum}")));
        }
    }

    if let (Some(items), Some(elements)) = (&definition.items, value.as_array()) {
        for (i, element) in elements.iter().enumerate() {
            check_value(&format!("{path}[{i}]"), items, element, issues);
        }
    }

    if let Some(fields) = value.as_object() {
        for name in definition.required.iter().flatten() {
            if !fields.contains_key(name) {
                issues.push(ValidationIssue::new(format!("{path}.{name}"), "missing required field"));
            }
        }

        if let Some(properties) = &definition.properties {
            for (name, field_value) in fields {
                match properties.get(name) {
                    Some(field) => check_value(&format!("{path}.{name}"), field, field_value, issues),
                    None if definition.additional_properties == Some(false) => {
                        issues.push(ValidationIssue::new(format!("{path}.{name}"), "unknown field"));
                    }
                    None => {}
                }
            }
        }
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Component payload handed to a renderer.
///
/// Serializes flat: `{"type": "weather_card", "location": "Paris", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPayload {
    /// Snake-case component discriminator
    #[serde(rename = "type")]
    pub render_type: String,
    /// Validated tool-call arguments
    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl RenderPayload {
    /// Validates tool-call arguments and tags them with the component type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] for the first issue reported by
    /// [`validate_payload`], or when a component's own `type` argument is
    /// set and would overwrite the discriminator in the flat payload.
    pub fn build(schema: &ComponentSchema, arguments: &Value) -> Result<Self> {
        if let Some(issue) = validate_payload(schema, arguments).into_iter().next() {
            return Err(issue.into());
        }

        let mut props = arguments.as_object().cloned().unwrap_or_default();

        match props.remove(RENDER_TYPE_KEY) {
            None | Some(Value::Null) => {}
            Some(_) => {
                return Err(ValidationIssue::new(
                    RENDER_TYPE_KEY,
                    format!(
                        "prop collides with the render discriminator of {}",
                        schema.component_name
                    ),
                )
                .into());
            }
        }

        Ok(Self {
            render_type: schema.render_type(),
            props,
        })
    }
}
