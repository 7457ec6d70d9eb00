//! Static refinement rules keyed by prop name.
//!
//! Rules are immutable data: adding a known prop means adding a row, not
//! touching the compiler. Lookups are exact, case-sensitive name matches.

use crate::schema::ParameterDefinition;
use schemagen_core::PropType;
use std::collections::BTreeMap;

/// Icon identifiers accepted by icon props.
pub const ICON_SET: &[&str] = &[
    "sun", "cloud", "rain", "snow", "storm", "wind", "fog", "info", "alert", "check", "x",
];

/// Allowed values for enumerated props.
pub const ENUM_RULES: &[(&str, &[&str])] = &[
    ("chart_type", &["bar", "line", "pie", "area"]),
    ("variant", &["default", "success", "warning", "error"]),
    ("icon", ICON_SET),
];

/// Inclusive numeric bounds for a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Lower bound
    pub minimum: Option<i64>,
    /// Upper bound
    pub maximum: Option<i64>,
}

/// Numeric bounds. A bound rule fixes the prop's type to number.
pub const BOUND_RULES: &[(&str, Bounds)] = &[
    (
        "humidity",
        Bounds {
            minimum: Some(0),
            maximum: Some(100),
        },
    ),
    (
        "wind_speed",
        Bounds {
            minimum: Some(0),
            maximum: None,
        },
    ),
];

/// Known element shapes for array props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayShape {
    /// Chart data point: `label`, `value`, optional `color`.
    ChartDataPoint,
    /// Table column: `key`, `label`, optional `sortable`.
    TableColumn,
    /// Table row: open key-value object.
    TableRow,
}

/// Element shapes. A shape rule fixes the prop's type to array.
pub const SHAPE_RULES: &[(&str, ArrayShape)] = &[
    ("data", ArrayShape::ChartDataPoint),
    ("columns", ArrayShape::TableColumn),
    ("rows", ArrayShape::TableRow),
];

impl ArrayShape {
    /// Returns the element definition for this shape.
    #[must_use]
    pub fn item_definition(self) -> ParameterDefinition {
        match self {
            Self::ChartDataPoint => closed_object(&[
                ("label", PropType::String, "Data point label", true),
                ("value", PropType::Number, "Data point value", true),
                ("color", PropType::String, "Optional color for this data point", false),
            ]),
            Self::TableColumn => closed_object(&[
                ("key", PropType::String, "Column identifier", true),
                ("label", PropType::String, "Column display name", true),
                ("sortable", PropType::Boolean, "Whether column is sortable", false),
            ]),
            Self::TableRow => ParameterDefinition::new(PropType::Object)
                .with_description("Row data as key-value pairs")
                .with_additional_properties(true),
        }
    }
}

fn closed_object(fields: &[(&str, PropType, &str, bool)]) -> ParameterDefinition {
    let properties: BTreeMap<_, _> = fields
        .iter()
        .map(|(name, field_type, description, _)| {
            (
                (*name).to_string(),
                ParameterDefinition::new(*field_type).with_description(*description),
            )
        })
        .collect();
    let required = fields
        .iter()
        .filter(|(.., required)| *required)
        .map(|(name, ..)| (*name).to_string())
        .collect();

    ParameterDefinition::new(PropType::Object)
        .with_properties(properties, required)
        .with_additional_properties(false)
}

/// Element definition for arrays without a known shape.
#[must_use]
pub const fn generic_item() -> ParameterDefinition {
    ParameterDefinition::new(PropType::Object)
}

/// Returns the allowed values for a prop, if enumerated.
#[must_use]
pub fn enum_for(prop_name: &str) -> Option<&'static [&'static str]> {
    lookup(ENUM_RULES, prop_name).copied()
}

/// Returns the numeric bounds for a prop, if any.
#[must_use]
pub fn bounds_for(prop_name: &str) -> Option<Bounds> {
    lookup(BOUND_RULES, prop_name).copied()
}

/// Returns the known element shape for a prop, if any.
#[must_use]
pub fn shape_for(prop_name: &str) -> Option<ArrayShape> {
    lookup(SHAPE_RULES, prop_name).copied()
}

fn lookup<'a, T>(table: &'a [(&str, T)], prop_name: &str) -> Option<&'a T> {
    table
        .iter()
        .find(|(name, _)| *name == prop_name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_lookup_is_exact() {
        assert!(enum_for("chart_type").is_some());
        assert!(enum_for("chart_types").is_none());
        assert!(enum_for("Variant").is_none());
        assert_eq!(bounds_for("humidity").unwrap().maximum, Some(100));
        assert_eq!(bounds_for("wind_speed").unwrap().maximum, None);
        assert_eq!(shape_for("rows"), Some(ArrayShape::TableRow));
        assert_eq!(shape_for("metadata"), None);
    }

    #[test]
    fn test_rule_tables_have_unique_keys() {
        fn assert_unique<T>(table: &[(&str, T)]) {
            let mut names: Vec<_> = table.iter().map(|(name, _)| *name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), table.len());
        }
        assert_unique(ENUM_RULES);
        assert_unique(BOUND_RULES);
        assert_unique(SHAPE_RULES);
    }

    #[test]
    fn test_chart_data_point_shape() {
        let item = ArrayShape::ChartDataPoint.item_definition();
        let properties = item.properties.as_ref().unwrap();

        assert_eq!(properties["value"].param_type, PropType::Number);
        assert_eq!(
            item.required.as_deref().unwrap(),
            ["label".to_string(), "value".to_string()]
        );
        assert_eq!(item.additional_properties, Some(false));
    }

    #[test]
    fn test_table_column_shape() {
        let item = ArrayShape::TableColumn.item_definition();
        let properties = item.properties.as_ref().unwrap();
        assert_eq!(properties["sortable"].param_type, PropType::Boolean);
        assert_eq!(item.required.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_table_row_shape_is_open() {
        let item = ArrayShape::TableRow.item_definition();
        assert_eq!(item.param_type, PropType::Object);
        assert!(item.properties.is_none());
        assert_eq!(item.additional_properties, Some(true));
    }
}
