//! Schema compilation for UI components.
//!
//! Converts [`ComponentDescriptor`]s into [`ComponentSchema`] artifacts,
//! each carrying a function-calling [`ToolDefinition`], and reads them back
//! on the consumer side through [`SchemaIndex`].
//!
//! # Architecture
//!
//! - [`compiler`] - descriptor to schema, refined by the [`rules`] tables
//! - [`schema`] - serializable artifact types
//! - [`catalog`] - `index.json` loading, tool lookup, payload validation
//!
//! # Examples
//!
//! ```
//! use schemagen_codegen::compile;
//! use schemagen_core::{ComponentCategory, ComponentDescriptor, ComponentName, PropDescriptor, PropType};
//!
//! let descriptor = ComponentDescriptor {
//!     name: ComponentName::new("WeatherCard"),
//!     source_path: "weather-card.tsx".into(),
//!     category: ComponentCategory::DataDisplay,
//!     description: "Weather Card component".to_string(),
//!     props: vec![
//!         PropDescriptor::new("location", PropType::String, true),
//!         PropDescriptor::new("humidity", PropType::String, false),
//!     ],
//! };
//!
//! let schema = compile(&descriptor);
//! let humidity = &schema.tool_definition.parameters.properties["humidity"];
//! assert_eq!(humidity.param_type, PropType::Number);
//! assert_eq!(humidity.maximum, Some(100));
//! ```
//!
//! [`ComponentDescriptor`]: schemagen_core::ComponentDescriptor

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod catalog;
pub mod compiler;
pub mod rules;
pub mod schema;

pub use catalog::{INDEX_FILE_NAME, RenderPayload, SchemaIndex, ValidationIssue, validate_payload};
pub use compiler::{compile, compile_all, is_valid_tool_name, tool_name};
pub use schema::{ComponentSchema, ParameterDefinition, SchemaProperty, ToolDefinition, ToolParameters};
