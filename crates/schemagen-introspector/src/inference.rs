//! Prop type inference from naming conventions.
//!
//! No declared types are consulted: the type is a best guess from the prop
//! name alone. Rules are checked in order and the first match wins.

use schemagen_core::PropType;

/// Ordered (substrings, type) rules. Names matching none are strings.
const TYPE_RULES: &[(&[&str], PropType)] = &[
    (&["temperature", "value", "speed"], PropType::Number),
    (&["data", "rows", "columns"], PropType::Array),
    (&["searchable", "sortable", "required"], PropType::Boolean),
];

/// Infers the structural type of a prop from its name.
///
/// Matching is case-insensitive substring search, so `windSpeed` and
/// `wind_speed` both resolve to [`PropType::Number`].
///
/// # Examples
///
/// ```
/// use schemagen_core::PropType;
/// use schemagen_introspector::infer_type;
///
/// assert_eq!(infer_type("temperature"), PropType::Number);
/// assert_eq!(infer_type("rows"), PropType::Array);
/// assert_eq!(infer_type("searchable"), PropType::Boolean);
/// assert_eq!(infer_type("location"), PropType::String);
/// ```
#[must_use]
pub fn infer_type(prop_name: &str) -> PropType {
    let lowered = prop_name.to_lowercase();

    TYPE_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
        .map_or(PropType::String, |(_, prop_type)| *prop_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_rules() {
        assert_eq!(infer_type("temperature"), PropType::Number);
        assert_eq!(infer_type("value"), PropType::Number);
        assert_eq!(infer_type("wind_speed"), PropType::Number);
        assert_eq!(infer_type("windSpeed"), PropType::Number);
    }

    #[test]
    fn test_array_rules() {
        assert_eq!(infer_type("data"), PropType::Array);
        assert_eq!(infer_type("columns"), PropType::Array);
        assert_eq!(infer_type("rows"), PropType::Array);
    }

    #[test]
    fn test_boolean_rules() {
        assert_eq!(infer_type("searchable"), PropType::Boolean);
        assert_eq!(infer_type("sortable"), PropType::Boolean);
        assert_eq!(infer_type("is_required"), PropType::Boolean);
    }

    #[test]
    fn test_fallback_is_string() {
        assert_eq!(infer_type("location"), PropType::String);
        assert_eq!(infer_type("humidity"), PropType::String);
        assert_eq!(infer_type(""), PropType::String);
    }

    #[test]
    fn test_first_match_wins() {
        // "data_value" hits both the number and array buckets
        assert_eq!(infer_type("data_value"), PropType::Number);
        // "required_rows" hits both the array and boolean buckets
        assert_eq!(infer_type("required_rows"), PropType::Array);
    }

    #[test]
    fn test_substring_matching_is_naive() {
        assert_eq!(infer_type("metadata"), PropType::Array);
    }
}
