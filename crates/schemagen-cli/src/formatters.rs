//! Output formatters for CLI commands.
//!
//! Every command builds a serializable report and renders it through
//! [`format_output`], so all commands support the same three modes.

use anyhow::Result;
use colored::Colorize;
use schemagen_core::cli::OutputFormat;
use serde::Serialize;
use serde_json::Value;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use schemagen_cli::formatters::format_output;
/// use schemagen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct ToolInfo {
///     name: String,
///     category: String,
/// }
///
/// let info = ToolInfo {
///     name: "render_weather_card".to_string(),
///     category: "data_display".to_string(),
/// };
///
/// let output = format_output(&info, OutputFormat::Text)?;
/// assert_eq!(output, "category=data_display\nname=render_weather_card");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(data)?;
        Ok(json)
    }
}

/// Plain text output formatting.
///
/// One `path=value` line per scalar, with dotted object keys and indexed
/// array elements (`components[0].tool=render_chart_card`). Suitable for
/// `grep` and `cut`.
pub mod text {
    use super::{Result, Serialize, Value};

    /// Format data as flattened `path=value` lines.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        flatten(&value, String::new(), &mut lines);
        Ok(lines.join("\n"))
    }

    fn flatten(value: &Value, path: String, lines: &mut Vec<String>) {
        match value {
            Value::Object(map) if !map.is_empty() => {
                for (key, child) in map {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    flatten(child, child_path, lines);
                }
            }
            Value::Array(items) if !items.is_empty() => {
                for (i, child) in items.iter().enumerate() {
                    flatten(child, format!("{path}[{i}]"), lines);
                }
            }
            Value::String(s) if path.is_empty() => lines.push(s.clone()),
            Value::String(s) => lines.push(format!("{path}={s}")),
            other if path.is_empty() => lines.push(other.to_string()),
            other => lines.push(format!("{path}={other}")),
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize, Value};

    /// Format data as colorized, indented `key: value` output.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&value, 0, &mut out);
        Ok(out.trim_end().to_string())
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => "-".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(_) => "[]".dimmed().to_string(),
            Value::Object(_) => "{}".dimmed().to_string(),
        }
    }

    fn is_nested(value: &Value) -> bool {
        match value {
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            _ => false,
        }
    }

    fn write_value(value: &Value, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);

        match value {
            Value::Object(map) if !map.is_empty() => {
                for (key, child) in map {
                    if is_nested(child) {
                        out.push_str(&format!("{pad}{}:\n", key.blue().bold()));
                        write_value(child, indent + 1, out);
                    } else {
                        out.push_str(&format!("{pad}{}: {}\n", key.blue().bold(), scalar(child)));
                    }
                }
            }
            Value::Array(items) if !items.is_empty() => {
                for child in items {
                    if is_nested(child) {
                        out.push_str(&format!("{pad}-\n"));
                        write_value(child, indent + 1, out);
                    } else {
                        out.push_str(&format!("{pad}- {}\n", scalar(child)));
                    }
                }
            }
            other => {
                out.push_str(&pad);
                out.push_str(&scalar(other));
                out.push('\n');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Component {
        name: String,
        props: usize,
        parallel: bool,
        tools: Vec<String>,
    }

    fn sample() -> Component {
        Component {
            name: "WeatherCard".to_string(),
            props: 6,
            parallel: true,
            tools: vec!["render_weather_card".to_string()],
        }
    }

    #[test]
    fn test_json_format() {
        let output = json::format(&sample()).unwrap();
        assert!(output.contains("\"name\": \"WeatherCard\""));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_text_format_flattens_paths() {
        let output = text::format(&sample()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "name=WeatherCard",
                "parallel=true",
                "props=6",
                "tools[0]=render_weather_card",
            ]
        );
    }

    #[test]
    fn test_text_format_top_level_scalar() {
        assert_eq!(text::format(&"done").unwrap(), "done");
        assert_eq!(text::format(&Vec::<u8>::new()).unwrap(), "[]");
    }

    #[test]
    fn test_pretty_format() {
        colored::control::set_override(false);
        let output = pretty::format(&sample()).unwrap();
        assert!(output.contains("name: WeatherCard"));
        assert!(output.contains("tools:\n  - render_weather_card"));
    }

    #[test]
    fn test_format_output_dispatch() {
        let data = sample();
        assert!(format_output(&data, OutputFormat::Json).unwrap().starts_with('{'));
        assert!(format_output(&data, OutputFormat::Text).unwrap().starts_with("name="));
        assert!(format_output(&data, OutputFormat::Pretty).unwrap().contains("props"));
    }
}
