//! Writing schemas compiled from component sources.

use schemagen_codegen::{SchemaIndex, compile};
use schemagen_files::{WriterOptions, write, write_with_options};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const SOURCES: &[(&str, &str)] = &[
    (
        "weather-card.tsx",
        "export function WeatherCard({ location, temperature, condition, humidity?, wind_speed?, icon? }) {}",
    ),
    (
        "chart-card.tsx",
        "export const ChartCard = ({ title, chart_type, data, x_axis_label?, y_axis_label? }) => null;",
    ),
    (
        "info-card.tsx",
        "export function InfoCard({ title, content, icon?, variant = 'default' }) {}",
    ),
];

fn compiled() -> Vec<schemagen_codegen::ComponentSchema> {
    let mut schemas: Vec<_> = SOURCES
        .iter()
        .filter_map(|(file, source)| schemagen_introspector::extract(source, file))
        .map(|descriptor| compile(&descriptor))
        .collect();
    schemas.sort_by(|a, b| a.component_name.cmp(&b.component_name));
    schemas
}

#[test]
fn test_artifacts_on_disk() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("schemas");

    let summary = write(&compiled(), &output).unwrap();
    assert_eq!(summary.file_count(), 4);

    let weather: Value =
        serde_json::from_str(&fs::read_to_string(output.join("WeatherCard.json")).unwrap()).unwrap();
    assert_eq!(weather["tool_definition"]["name"], "render_weather_card");
    assert_eq!(
        weather["tool_definition"]["parameters"]["properties"]["humidity"]["maximum"],
        100
    );

    let index = SchemaIndex::load(&output).unwrap();
    assert_eq!(
        index.tool_names(),
        vec!["render_chart_card", "render_info_card", "render_weather_card"]
    );
}

#[test]
fn test_index_entries_match_component_files() {
    let temp = TempDir::new().unwrap();
    write(&compiled(), temp.path()).unwrap();

    let index: Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("index.json")).unwrap()).unwrap();

    for entry in index["schemas"].as_array().unwrap() {
        let name = entry["component_name"].as_str().unwrap();
        let file: Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join(format!("{name}.json"))).unwrap())
                .unwrap();
        assert_eq!(&file, entry);
    }
}

#[test]
fn test_rewrite_is_byte_identical() {
    let temp = TempDir::new().unwrap();

    write(&compiled(), temp.path()).unwrap();
    let first = fs::read(temp.path().join("index.json")).unwrap();

    write_with_options(&compiled(), temp.path(), WriterOptions::new().with_parallel(true)).unwrap();
    let second = fs::read(temp.path().join("index.json")).unwrap();

    assert_eq!(first, second);
}
