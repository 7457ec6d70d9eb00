//! Component description from file names and extracted props.
//!
//! Aggregates raw props, inferred types, and a category label into a
//! [`ComponentDescriptor`].

use crate::extractor::RawProp;
use crate::inference::infer_type;
use schemagen_core::{ComponentCategory, ComponentDescriptor, ComponentName, PropDescriptor, naming};
use std::path::Path;

/// Ordered (substrings, category) rules. First match wins; names matching
/// none are [`ComponentCategory::General`].
///
/// Order encodes precedence: `data-table-card` must land in `data_display`
/// before the `card` rule gets a chance.
const CATEGORY_RULES: &[(&[&str], ComponentCategory)] = &[
    (&["chart", "graph"], ComponentCategory::DataVisualization),
    (&["table", "list", "weather"], ComponentCategory::DataDisplay),
    (&["info", "card"], ComponentCategory::Content),
];

/// Suffix appended to the humanized stem when no doc comment is available.
const DESCRIPTION_SUFFIX: &str = "component";

/// Assigns a category from a file name.
///
/// # Examples
///
/// ```
/// use schemagen_core::ComponentCategory;
/// use schemagen_introspector::categorize;
///
/// assert_eq!(categorize("chart-card.tsx"), ComponentCategory::DataVisualization);
/// assert_eq!(categorize("weather-card.tsx"), ComponentCategory::DataDisplay);
/// assert_eq!(categorize("info-card.tsx"), ComponentCategory::Content);
/// assert_eq!(categorize("button.tsx"), ComponentCategory::General);
/// ```
#[must_use]
pub fn categorize(file_name: &str) -> ComponentCategory {
    let lowered = file_name.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
        .map_or(ComponentCategory::General, |(_, category)| *category)
}

/// Returns the file stem of a path, or the whole string if it has none.
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.to_string_lossy(), |stem| stem.to_string_lossy())
        .into_owned()
}

/// Builds a descriptor for a component file from its extracted props.
///
/// Each prop gets a type from [`infer_type`] and a description humanized
/// from its name. The component description defaults to the humanized
/// stem followed by `component`.
///
/// # Examples
///
/// ```
/// use schemagen_introspector::{RawProp, describe};
///
/// let props = vec![RawProp::new("title", true), RawProp::new("rows", true)];
/// let descriptor = describe("data-table.tsx", &props);
///
/// assert_eq!(descriptor.name.as_str(), "DataTable");
/// assert_eq!(descriptor.description, "Data Table component");
/// assert_eq!(descriptor.category.as_str(), "data_display");
/// ```
#[must_use]
pub fn describe(file_name: impl AsRef<Path>, props: &[RawProp]) -> ComponentDescriptor {
    let path = file_name.as_ref();
    let stem = file_stem(path);

    let props = props
        .iter()
        .map(|raw| PropDescriptor::new(raw.name.clone(), infer_type(&raw.name), raw.required))
        .collect();

    ComponentDescriptor {
        name: ComponentName::from_stem(&stem),
        source_path: path.to_path_buf(),
        category: categorize(&stem),
        description: format!("{} {DESCRIPTION_SUFFIX}", naming::humanize_stem(&stem)),
        props,
    }
}
