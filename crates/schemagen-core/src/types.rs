//! Domain types for component schema synthesis.
//!
//! Descriptors are the in-memory summary of one component before it is
//! compiled into a schema. They are derived from source on every run and
//! never persisted.
//!
//! # Examples
//!
//! ```
//! use schemagen_core::{ComponentCategory, ComponentDescriptor, ComponentName, PropDescriptor, PropType};
//!
//! let descriptor = ComponentDescriptor {
//!     name: ComponentName::from_stem("info-card"),
//!     source_path: "components/info-card.tsx".into(),
//!     category: ComponentCategory::Content,
//!     description: "Info Card component".to_string(),
//!     props: vec![PropDescriptor::new("title", PropType::String, true)],
//! };
//!
//! assert_eq!(descriptor.required_prop_names(), vec!["title"]);
//! ```

use crate::naming;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Component name in `PascalCase` (newtype over String).
///
/// Derived from the component's file stem; also used as the artifact file
/// name (`<ComponentName>.json`).
///
/// # Examples
///
/// ```
/// use schemagen_core::ComponentName;
///
/// let name = ComponentName::from_stem("data-table");
/// assert_eq!(name.as_str(), "DataTable");
/// assert_eq!(name.to_snake_case(), "data_table");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    /// Creates a component name from an already `PascalCase` string.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derives a component name from a hyphenated file stem.
    #[must_use]
    pub fn from_stem(stem: &str) -> Self {
        Self(naming::pascal_case_from_stem(stem))
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `snake_case` form used by tool names and render payloads.
    #[must_use]
    pub fn to_snake_case(&self) -> String {
        naming::to_snake_case(&self.0)
    }

    /// Consumes the name and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ComponentName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Closed set of component categories.
///
/// Used by external routing to narrow which tools are offered to a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    /// Charts and graphs.
    DataVisualization,
    /// Tables, lists, and other structured readouts.
    DataDisplay,
    /// Cards carrying prose content.
    Content,
    /// Anything else.
    General,
}

impl ComponentCategory {
    /// All categories in precedence order.
    pub const ALL: [Self; 4] = [
        Self::DataVisualization,
        Self::DataDisplay,
        Self::Content,
        Self::General,
    ];

    /// Returns the wire label of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DataVisualization => "data_visualization",
            Self::DataDisplay => "data_display",
            Self::Content => "content",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentCategory {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| {
                crate::Error::InvalidArgument(format!(
                    "invalid category: '{s}' (expected: data_visualization, data_display, content, or general)"
                ))
            })
    }
}

/// Structural type of a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    /// Text value.
    String,
    /// Numeric value (integer or float).
    Number,
    /// Boolean flag.
    Boolean,
    /// Ordered list.
    Array,
    /// Keyed object.
    Object,
}

impl PropType {
    /// Returns the JSON-Schema type keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Checks whether a JSON value has this structural type.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemagen_core::PropType;
    /// use serde_json::json;
    ///
    /// assert!(PropType::Number.matches(&json!(21.5)));
    /// assert!(!PropType::Number.matches(&json!("21.5")));
    /// assert!(PropType::Array.matches(&json!([])));
    /// ```
    #[must_use]
    pub fn matches(&self, value: &serde_json::Value) -> bool {
        use serde_json::Value;

        matches!(
            (self, value),
            (Self::String, Value::String(_))
                | (Self::Number, Value::Number(_))
                | (Self::Boolean, Value::Bool(_))
                | (Self::Array, Value::Array(_))
                | (Self::Object, Value::Object(_))
        )
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared prop of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropDescriptor {
    /// Prop identifier as written in the source
    pub name: String,
    /// Inferred structural type
    #[serde(rename = "type")]
    pub prop_type: PropType,
    /// Whether callers must supply the prop
    pub required: bool,
    /// Human-readable description
    pub description: String,
}

impl PropDescriptor {
    /// Creates a prop with a description humanized from its name.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemagen_core::{PropDescriptor, PropType};
    ///
    /// let prop = PropDescriptor::new("wind_speed", PropType::Number, false);
    /// assert_eq!(prop.description, "Wind speed");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, prop_type: PropType, required: bool) -> Self {
        let name = name.into();
        let description = naming::humanize_identifier(&name);
        Self {
            name,
            prop_type,
            required,
            description,
        }
    }
}

/// Structural summary of one component, prior to schema compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// `PascalCase` component name
    pub name: ComponentName,
    /// Path of the source file the descriptor was derived from
    pub source_path: PathBuf,
    /// Category label
    pub category: ComponentCategory,
    /// Human-readable description
    pub description: String,
    /// Props in declaration order
    pub props: Vec<PropDescriptor>,
}

impl ComponentDescriptor {
    /// Returns the names of required props, in declaration order.
    #[must_use]
    pub fn required_prop_names(&self) -> Vec<&str> {
        self.props
            .iter()
            .filter(|prop| prop.required)
            .map(|prop| prop.name.as_str())
            .collect()
    }

    /// Looks up a prop by name.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&PropDescriptor> {
        self.props.iter().find(|prop| prop.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_name_from_stem() {
        let name = ComponentName::from_stem("weather-card");
        assert_eq!(name.as_str(), "WeatherCard");
        assert_eq!(name.to_string(), "WeatherCard");
        assert_eq!(name.to_snake_case(), "weather_card");
    }

    #[test]
    fn test_component_name_ordering() {
        let mut names = vec![
            ComponentName::new("WeatherCard"),
            ComponentName::new("ChartCard"),
            ComponentName::new("DataTable"),
        ];
        names.sort();
        assert_eq!(names[0].as_str(), "ChartCard");
        assert_eq!(names[2].as_str(), "WeatherCard");
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&ComponentCategory::DataVisualization).unwrap();
        assert_eq!(json, "\"data_visualization\"");

        let parsed: ComponentCategory = serde_json::from_str("\"data_display\"").unwrap();
        assert_eq!(parsed, ComponentCategory::DataDisplay);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "content".parse::<ComponentCategory>().unwrap(),
            ComponentCategory::Content
        );
        assert_eq!(
            "Data-Visualization".parse::<ComponentCategory>().unwrap(),
            ComponentCategory::DataVisualization
        );
        assert!("widgets".parse::<ComponentCategory>().is_err());
    }

    #[test]
    fn test_prop_type_serialization() {
        let prop = PropDescriptor::new("temperature", PropType::Number, true);
        let value = serde_json::to_value(&prop).unwrap();
        assert_eq!(value["type"], "number");
        assert_eq!(value["required"], true);
        assert_eq!(value["description"], "Temperature");
    }

    #[test]
    fn test_prop_type_matches() {
        assert!(PropType::String.matches(&json!("Paris")));
        assert!(PropType::Boolean.matches(&json!(true)));
        assert!(PropType::Object.matches(&json!({"a": 1})));
        assert!(!PropType::Object.matches(&json!(null)));
        assert!(!PropType::Boolean.matches(&json!("true")));
    }

    #[test]
    fn test_required_prop_names_preserves_order() {
        let descriptor = ComponentDescriptor {
            name: ComponentName::new("WeatherCard"),
            source_path: PathBuf::from("weather-card.tsx"),
            category: ComponentCategory::DataDisplay,
            description: "Weather Card component".to_string(),
            props: vec![
                PropDescriptor::new("location", PropType::String, true),
                PropDescriptor::new("humidity", PropType::String, false),
                PropDescriptor::new("temperature", PropType::Number, true),
            ],
        };

        assert_eq!(descriptor.required_prop_names(), vec!["location", "temperature"]);
        assert!(descriptor.prop("humidity").is_some());
        assert!(descriptor.prop("icon").is_none());
    }
}
