//! Naming conversions shared by the describer and the schema compiler.
//!
//! Component files use kebab-case stems (`weather-card.tsx`), components use
//! `PascalCase` (`WeatherCard`), and tool names / render discriminators use
//! `snake_case` (`weather_card`). Every conversion here is a pure function.
//!
//! # Examples
//!
//! ```
//! use schemagen_core::naming;
//!
//! assert_eq!(naming::pascal_case_from_stem("weather-card"), "WeatherCard");
//! assert_eq!(naming::to_snake_case("DataTable"), "data_table");
//! assert_eq!(naming::humanize_stem("info-card"), "Info Card");
//! assert_eq!(naming::humanize_identifier("wind_speed"), "Wind speed");
//! ```

/// Capitalizes the first character of a segment, leaving the rest unchanged.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts a hyphenated file stem to `PascalCase`.
///
/// Empty segments (leading, trailing, or doubled hyphens) are dropped.
///
/// # Examples
///
/// ```
/// use schemagen_core::naming::pascal_case_from_stem;
///
/// assert_eq!(pascal_case_from_stem("weather-card"), "WeatherCard");
/// assert_eq!(pascal_case_from_stem("chart"), "Chart");
/// assert_eq!(pascal_case_from_stem("data--table-"), "DataTable");
/// ```
#[must_use]
pub fn pascal_case_from_stem(stem: &str) -> String {
    stem.split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Converts a `PascalCase` identifier to `snake_case`.
///
/// Lower-cases the name and inserts an underscore before every uppercase
/// letter except the first one. Consecutive capitals are split letter by
/// letter (`HTTPCard` becomes `h_t_t_p_card`).
///
/// # Examples
///
/// ```
/// use schemagen_core::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("WeatherCard"), "weather_card");
/// assert_eq!(to_snake_case("ChartCard"), "chart_card");
/// assert_eq!(to_snake_case("Table"), "table");
/// ```
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);

    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}

/// Turns a hyphenated file stem into a title (`weather-card` → `Weather Card`).
#[must_use]
pub fn humanize_stem(stem: &str) -> String {
    stem.split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a `PascalCase` name into words (`WeatherCard` → `Weather Card`).
///
/// # Examples
///
/// ```
/// use schemagen_core::naming::title_from_pascal_case;
///
/// assert_eq!(title_from_pascal_case("WeatherCard"), "Weather Card");
/// assert_eq!(title_from_pascal_case("Chart"), "Chart");
/// ```
#[must_use]
pub fn title_from_pascal_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);

    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() && i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }

    result
}

/// Turns a prop identifier into a sentence-case phrase.
///
/// Underscores and camelCase boundaries become spaces; only the first
/// letter is capitalized.
///
/// # Examples
///
/// ```
/// use schemagen_core::naming::humanize_identifier;
///
/// assert_eq!(humanize_identifier("wind_speed"), "Wind speed");
/// assert_eq!(humanize_identifier("xAxisLabel"), "X axis label");
/// assert_eq!(humanize_identifier("title"), "Title");
/// ```
#[must_use]
pub fn humanize_identifier(name: &str) -> String {
    let mut words = String::with_capacity(name.len() + 4);

    for (i, ch) in name.chars().enumerate() {
        if ch == '_' || ch == '-' {
            if !words.ends_with(' ') && !words.is_empty() {
                words.push(' ');
            }
        } else if ch.is_uppercase() && i > 0 {
            if !words.ends_with(' ') {
                words.push(' ');
            }
            words.extend(ch.to_lowercase());
        } else {
            words.push(ch);
        }
    }

    capitalize(words.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_from_stem() {
        assert_eq!(pascal_case_from_stem("weather-card"), "WeatherCard");
        assert_eq!(pascal_case_from_stem("chart-card"), "ChartCard");
        assert_eq!(pascal_case_from_stem("data-table"), "DataTable");
        assert_eq!(pascal_case_from_stem(""), "");
    }

    #[test]
    fn test_to_snake_case_tool_names() {
        assert_eq!(to_snake_case("WeatherCard"), "weather_card");
        assert_eq!(to_snake_case("ChartCard"), "chart_card");
        assert_eq!(to_snake_case("DataTable"), "data_table");
        assert_eq!(to_snake_case("InfoCard"), "info_card");
    }

    #[test]
    fn test_to_snake_case_consecutive_capitals() {
        assert_eq!(to_snake_case("HTTPCard"), "h_t_t_p_card");
    }

    #[test]
    fn test_to_snake_case_already_lower() {
        assert_eq!(to_snake_case("card"), "card");
    }

    #[test]
    fn test_humanize_stem() {
        assert_eq!(humanize_stem("weather-card"), "Weather Card");
        assert_eq!(humanize_stem("-list-"), "List");
    }

    #[test]
    fn test_humanize_identifier() {
        assert_eq!(humanize_identifier("chart_type"), "Chart type");
        assert_eq!(humanize_identifier("y_axis_label"), "Y axis label");
        assert_eq!(humanize_identifier("windSpeed"), "Wind speed");
        assert_eq!(humanize_identifier("a__b"), "A b");
    }

    #[test]
    fn test_title_and_snake_agree() {
        let title = title_from_pascal_case("WeatherCard");
        assert_eq!(title.to_lowercase().replace(' ', "_"), to_snake_case("WeatherCard"));
    }
}
