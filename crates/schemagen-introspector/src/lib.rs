//! Component introspection for schema synthesis.
//!
//! Reads UI-component source text and produces [`ComponentDescriptor`]s:
//!
//! 1. [`extractor`] - locates the exported component factory and splits its
//!    destructured parameter list into raw props
//! 2. [`inference`] - maps each prop name to a structural type
//! 3. [`describer`] - derives the component name, category, and description
//! 4. [`scanner`] - lists candidate source files in a directory
//!
//! Every heuristic is a narrow pure function working on flattened text, so
//! it can be swapped for a real parser without touching schema compilation.
//!
//! # Examples
//!
//! ```
//! use schemagen_core::{ComponentCategory, PropType};
//! use schemagen_introspector::extract;
//!
//! let source = r"
//! export function WeatherCard({ location, temperature, humidity }: WeatherCardProps) {
//!   return null;
//! }
//! ";
//!
//! let descriptor = extract(source, "weather-card.tsx").unwrap();
//! assert_eq!(descriptor.name.as_str(), "WeatherCard");
//! assert_eq!(descriptor.category, ComponentCategory::DataDisplay);
//! assert_eq!(descriptor.props[1].prop_type, PropType::Number);
//! ```
//!
//! [`ComponentDescriptor`]: schemagen_core::ComponentDescriptor

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod describer;
pub mod extractor;
pub mod inference;
pub mod scanner;

pub use describer::{categorize, describe};
pub use extractor::{Extraction, Extractor, RawProp, SkipReason, extract};
pub use inference::infer_type;
pub use scanner::{SourceScanner, read_source};
