//! Prop extraction from component source text.
//!
//! Works on flattened text with bounded heuristics, not a real parser:
//!
//! - the first exported factory whose name starts with an uppercase letter
//!   and whose first parameter is a destructured object is the component
//! - the parameter text runs from the opening `{` to the first `}`
//! - props are split on every comma; type annotations (`: ...`) and default
//!   clauses (`= ...`) are stripped to obtain the bare name
//!
//! The comma split is not bracket-balanced. A prop whose annotation contains
//! a comma (`Record<string, number>`) yields an extra phantom prop. Callers
//! get a best-effort prop list rather than an error.
//!
//! Two token kinds depart from the plain split: rest elements (`...rest`)
//! are dropped because they bind the remaining props rather than declare
//! one, and a repeated name keeps only its first occurrence. Every other
//! non-empty token becomes exactly one prop.
//!
//! # Examples
//!
//! ```
//! use schemagen_introspector::{Extraction, Extractor, SkipReason};
//!
//! let extractor = Extractor::new();
//!
//! let outcome = extractor.extract("export default function ComponentRenderer({ component }) {}", "component-renderer.tsx");
//! assert!(matches!(outcome, Extraction::Skipped(SkipReason::Excluded { .. })));
//!
//! let outcome = extractor.extract("const helper = 1;", "helper.tsx");
//! assert!(matches!(outcome, Extraction::Skipped(SkipReason::NoDeclaration)));
//! ```

use crate::describer::{describe, file_stem};
use regex::Regex;
use schemagen_core::ComponentDescriptor;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

/// File-stem substrings that never describe a component: the renderer that
/// dispatches on component type, and index aggregators.
pub const DEFAULT_EXCLUSIONS: &[&str] = &["component-renderer", "index"];

// Pre-compiled regexes (compiled once, reused)
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"export\s+(?:default\s+)?(?:",
        r"function\s+[A-Z][A-Za-z0-9_]*\s*(?:<[^>(]*>\s*)?\(",
        r"|const\s+[A-Z][A-Za-z0-9_]*\s*(?::[^=]+)?=\s*(?:[A-Za-z_.]+\(\s*)?(?:async\s*)?\(",
        r")\s*\{([^}]*)\}",
    ))
    .expect("valid regex")
});

/// A prop name and its required flag, before type inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProp {
    /// Bare prop identifier
    pub name: String,
    /// `false` when the prop had an optional marker or a default value
    pub required: bool,
}

impl RawProp {
    /// Creates a raw prop.
    #[must_use]
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
        }
    }
}

/// Why a file produced no descriptor.
///
/// Skips are deliberate exclusions, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The file stem matched an exclusion pattern.
    Excluded {
        /// Pattern that matched
        pattern: String,
    },
    /// No exported component factory with a destructured parameter list.
    NoDeclaration,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excluded { pattern } => write!(f, "file name matches exclusion '{pattern}'"),
            Self::NoDeclaration => f.write_str("no exported component declaration found"),
        }
    }
}

/// Outcome of extracting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// A descriptor was produced.
    Extracted(ComponentDescriptor),
    /// The file was skipped.
    Skipped(SkipReason),
}

impl Extraction {
    /// Returns the descriptor, discarding the skip reason.
    #[must_use]
    pub fn into_descriptor(self) -> Option<ComponentDescriptor> {
        match self {
            Self::Extracted(descriptor) => Some(descriptor),
            Self::Skipped(_) => None,
        }
    }
}

/// Prop extractor with a configurable set of file-name exclusions.
///
/// # Examples
///
/// ```
/// use schemagen_introspector::Extractor;
///
/// let extractor = Extractor::with_exclusions(["story", "index"]);
/// assert_eq!(extractor.exclusion_for("button.story.tsx"), Some("story"));
/// assert_eq!(extractor.exclusion_for("button.tsx"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    exclusions: Vec<String>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::with_exclusions(DEFAULT_EXCLUSIONS.iter().copied())
    }
}

impl Extractor {
    /// Creates an extractor with [`DEFAULT_EXCLUSIONS`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with custom exclusion patterns.
    ///
    /// Patterns are matched case-insensitively as substrings of the file stem.
    #[must_use]
    pub fn with_exclusions<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            exclusions: patterns
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Returns the configured exclusion patterns.
    #[must_use]
    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    /// Returns the first exclusion pattern matching the file's stem.
    #[must_use]
    pub fn exclusion_for(&self, file_name: impl AsRef<Path>) -> Option<&str> {
        let stem = file_stem(file_name.as_ref()).to_lowercase();
        self.exclusions
            .iter()
            .find(|pattern| stem.contains(pattern.as_str()))
            .map(String::as_str)
    }

    /// Extracts a component descriptor from source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemagen_introspector::{Extraction, Extractor};
    ///
    /// let source = "export const InfoCard = ({ title, content, variant = 'default' }: Props) => null;";
    /// let Extraction::Extracted(descriptor) = Extractor::new().extract(source, "info-card.tsx") else {
    ///     panic!("expected a descriptor");
    /// };
    ///
    /// assert_eq!(descriptor.required_prop_names(), vec!["title", "content"]);
    /// ```
    #[must_use]
    pub fn extract(&self, source_text: &str, file_name: impl AsRef<Path>) -> Extraction {
        let path = file_name.as_ref();

        if let Some(pattern) = self.exclusion_for(path) {
            tracing::debug!("Skipping {}: matches exclusion '{}'", path.display(), pattern);
            return Extraction::Skipped(SkipReason::Excluded {
                pattern: pattern.to_string(),
            });
        }

        let flattened = flatten(source_text);

        let Some(captures) = DECLARATION_REGEX.captures(&flattened) else {
            tracing::debug!("Skipping {}: no component declaration", path.display());
            return Extraction::Skipped(SkipReason::NoDeclaration);
        };

        let (Some(declaration), Some(params)) = (captures.get(0), captures.get(1)) else {
            return Extraction::Skipped(SkipReason::NoDeclaration);
        };

        let props = parse_param_list(params.as_str());
        let mut descriptor = describe(path, &props);

        if let Some(doc) = leading_doc_comment(&flattened[..declaration.start()]) {
            descriptor.description = doc;
        }

        tracing::debug!(
            "Extracted {} with {} props from {}",
            descriptor.name,
            descriptor.props.len(),
            path.display()
        );

        Extraction::Extracted(descriptor)
    }
}

/// Extracts a descriptor with the default exclusions.
///
/// Returns `None` for excluded file names and for sources without a
/// component declaration.
///
/// # Examples
///
/// ```
/// use schemagen_introspector::extract;
///
/// assert!(extract("export function Index({ a }) {}", "index.tsx").is_none());
/// assert!(extract("export function Badge({ label }) {}", "badge.tsx").is_some());
/// ```
#[must_use]
pub fn extract(source_text: &str, file_name: impl AsRef<Path>) -> Option<ComponentDescriptor> {
    Extractor::default()
        .extract(source_text, file_name)
        .into_descriptor()
}

/// Collapses every whitespace run to a single space.
fn flatten(source_text: &str) -> String {
    WHITESPACE_REGEX.replace_all(source_text, " ").into_owned()
}

/// Splits destructured parameter text into raw props.
///
/// Empty tokens and rest elements (`...rest`) are dropped. A repeated name
/// keeps its first occurrence.
///
/// # Examples
///
/// ```
/// use schemagen_introspector::extractor::parse_param_list;
///
/// let props = parse_param_list(" title, icon?: string, searchable = true, ");
/// let names: Vec<_> = props.iter().map(|p| (p.name.as_str(), p.required)).collect();
/// assert_eq!(names, vec![("title", true), ("icon", false), ("searchable", false)]);
/// ```
#[must_use]
pub fn parse_param_list(params: &str) -> Vec<RawProp> {
    let mut seen = HashSet::new();
    let mut props = Vec::new();

    for token in params.split(',') {
        let Some(prop) = parse_token(token) else {
            continue;
        };

        if seen.insert(prop.name.clone()) {
            props.push(prop);
        } else {
            tracing::debug!("Dropping repeated prop '{}'", prop.name);
        }
    }

    props
}

/// Parses one comma-separated token into a raw prop.
fn parse_token(token: &str) -> Option<RawProp> {
    let token = token.trim();
    if token.is_empty() || token.starts_with("...") {
        return None;
    }

    let has_default = token.contains('=');
    let name_part = token
        .split([':', '='])
        .next()
        .unwrap_or_default()
        .trim();

    let (name, optional) = name_part
        .strip_suffix('?')
        .map_or((name_part, false), |stripped| (stripped.trim_end(), true));

    if name.is_empty() {
        return None;
    }

    Some(RawProp::new(name, !(optional || has_default)))
}

/// Returns the text of a `/** ... */` block that ends right before `prefix` ends.
///
/// Stops at the first `@tag`; leading `*` gutters are removed.
fn leading_doc_comment(prefix: &str) -> Option<String> {
    let body = prefix.trim_end().strip_suffix("*/")?;
    let start = body.rfind("/**")?;
    let text = &body[start + 3..];
    if text.contains("*/") {
        return None;
    }
    let text = text.split(" @").next().unwrap_or_default();

    let cleaned = text
        .split_whitespace()
        .filter(|word| *word != "*")
        .collect::<Vec<_>>()
        .join(" ");

    (!cleaned.is_empty()).then_some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemagen_core::{ComponentCategory, PropType};

    const WEATHER_SOURCE: &str = r"
import { Card } from './ui/card';

export function WeatherCard({
  location,
  temperature,
  condition,
  humidity?,
  wind_speed?,
  icon?,
}: WeatherCardProps) {
  return <Card>{location}</Card>;
}
";

    #[test]
    fn test_extract_function_declaration() {
        let descriptor = extract(WEATHER_SOURCE, "weather-card.tsx").unwrap();
        let names: Vec<_> = descriptor.props.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["location", "temperature", "condition", "humidity", "wind_speed", "icon"]
        );
        assert_eq!(
            descriptor.required_prop_names(),
            vec!["location", "temperature", "condition"]
        );
        assert_eq!(descriptor.category, ComponentCategory::DataDisplay);
    }

    #[test]
    fn test_extract_arrow_function() {
        let source = "export const ChartCard = ({ title, chart_type, data }: ChartCardProps) => <div />;";
        let descriptor = extract(source, "chart-card.tsx").unwrap();
        assert_eq!(descriptor.props.len(), 3);
        assert_eq!(descriptor.props[2].prop_type, PropType::Array);
    }

    #[test]
    fn test_extract_typed_const_with_wrapper() {
        let source = "export const DataTable: React.FC<Props> = React.memo(({ title, rows }) => null);";
        let descriptor = extract(source, "data-table.tsx").unwrap();
        assert_eq!(descriptor.props.len(), 2);
    }

    #[test]
    fn test_extract_default_export() {
        let source = "export default function InfoCard({ title, content }) { return null; }";
        let descriptor = extract(source, "info-card.tsx").unwrap();
        assert_eq!(descriptor.required_prop_names(), vec!["title", "content"]);
    }

    #[test]
    fn test_extract_uses_first_declaration() {
        let source = "export function First({ a }) {}\nexport function Second({ b, c }) {}";
        let descriptor = extract(source, "first.tsx").unwrap();
        assert_eq!(descriptor.props.len(), 1);
        assert_eq!(descriptor.props[0].name, "a");
    }

    #[test]
    fn test_lowercase_exports_are_not_components() {
        let source = "export function useWeather({ city }) {}";
        assert!(extract(source, "use-weather.tsx").is_none());
    }

    #[test]
    fn test_exclusions() {
        let source = "export function ComponentRenderer({ component }) {}";
        let outcome = Extractor::new().extract(source, "component-renderer.tsx");
        assert_eq!(
            outcome,
            Extraction::Skipped(SkipReason::Excluded {
                pattern: "component-renderer".to_string()
            })
        );

        assert!(extract("export function Index({ a }) {}", "index.tsx").is_none());
        assert!(extract("export function Cards({ a }) {}", "cards-index.tsx").is_none());
    }

    #[test]
    fn test_default_values_make_props_optional() {
        let source = "export function DataTable({ title, columns, rows, searchable = true }) {}";
        let descriptor = extract(source, "data-table.tsx").unwrap();
        assert_eq!(
            descriptor.required_prop_names(),
            vec!["title", "columns", "rows"]
        );
        assert_eq!(descriptor.props[3].prop_type, PropType::Boolean);
    }

    #[test]
    fn test_comma_split_is_not_bracket_balanced() {
        // The annotation's inner comma produces a phantom prop.
        let props = parse_param_list("scores: Record<string, number>, title");
        let names: Vec<_> = props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["scores", "number>", "title"]);
    }

    #[test]
    fn test_nested_default_truncates_at_first_brace() {
        let source = "export function Panel({ title, style = {}, footer }) {}";
        let descriptor = extract(source, "panel.tsx").unwrap();
        let names: Vec<_> = descriptor.props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["title", "style"]);
    }

    #[test]
    fn test_rest_and_empty_tokens_are_dropped() {
        let props = parse_param_list("title, , ...rest,");
        assert_eq!(props, vec![RawProp::new("title", true)]);
    }

    #[test]
    fn test_repeated_props_keep_first() {
        let props = parse_param_list("title, title?, body");
        assert_eq!(
            props,
            vec![RawProp::new("title", true), RawProp::new("body", true)]
        );
    }

    #[test]
    fn test_optional_marker_with_spacing() {
        let props = parse_param_list("icon ?: string");
        assert_eq!(props, vec![RawProp::new("icon", false)]);
    }

    #[test]
    fn test_doc_comment_becomes_description() {
        let source = r"
/**
 * Displays current weather conditions
 * for a single location.
 * @param location city name
 */
export function WeatherCard({ location }) {}
";
        let descriptor = extract(source, "weather-card.tsx").unwrap();
        assert_eq!(
            descriptor.description,
            "Displays current weather conditions for a single location."
        );
    }

    #[test]
    fn test_detached_doc_comment_is_ignored() {
        let source = "/** Helper */ const x = 1; export function Badge({ label }) {}";
        let descriptor = extract(source, "badge.tsx").unwrap();
        assert_eq!(descriptor.description, "Badge component");
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::NoDeclaration.to_string(),
            "no exported component declaration found"
        );
        let excluded = SkipReason::Excluded {
            pattern: "index".to_string(),
        };
        assert_eq!(excluded.to_string(), "file name matches exclusion 'index'");
    }

    #[test]
    fn test_skip_reason_serialization() {
        let excluded = SkipReason::Excluded {
            pattern: "index".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&excluded).unwrap(),
            serde_json::json!({"reason": "excluded", "pattern": "index"})
        );
        assert_eq!(
            serde_json::to_value(SkipReason::NoDeclaration).unwrap(),
            serde_json::json!({"reason": "no_declaration"})
        );
    }

    #[test]
    fn test_rest_element_is_the_only_dropped_token() {
        let props = parse_param_list("title, ...rest, subtitle?");
        let names: Vec<_> = props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["title", "subtitle"]);
    }
}
