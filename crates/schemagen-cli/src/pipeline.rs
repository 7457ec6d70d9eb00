//! The sync pipeline: scan, extract, compile, write.
//!
//! Each source file is an independent task (read, extract, compile) run on
//! the rayon pool. Results are gathered, sorted by component name so that
//! `index.json` is reproducible, and written in one batch after the output
//! directory has been created.
//!
//! Per-file problems never abort the run:
//! - excluded names and files without a component are *skipped*
//! - unreadable files and duplicate component names are *failed*
//!
//! A missing source directory or an unwritable output directory is fatal.

use anyhow::{Context, Result};
use rayon::prelude::*;
use schemagen_codegen::{ComponentSchema, compile};
use schemagen_core::ComponentCategory;
use schemagen_files::{WriterOptions, write_with_options};
use schemagen_introspector::{Extraction, Extractor, SkipReason, SourceScanner, read_source};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::SyncConfig;

/// Inputs of one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Component source directory
    pub source_dir: PathBuf,
    /// Schema output directory
    pub output_dir: PathBuf,
    /// Accepted source extensions
    pub extensions: Vec<String>,
    /// File-stem exclusion patterns
    pub exclude: Vec<String>,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Use the worker pool
    pub parallel: bool,
}

impl SyncOptions {
    /// Builds options from the `[sync]` config section.
    #[must_use]
    pub fn from_config(config: &SyncConfig) -> Self {
        Self {
            source_dir: config.source_dir.clone(),
            output_dir: config.output_dir.clone(),
            extensions: config.extensions.clone(),
            exclude: config.exclude.clone(),
            recursive: config.recursive,
            parallel: config.parallel,
        }
    }
}

/// A component that was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncedComponent {
    /// `PascalCase` component name
    pub component: String,
    /// Tool name
    pub tool: String,
    /// Category label
    pub category: ComponentCategory,
    /// Number of props
    pub props: usize,
    /// Source file
    pub source: PathBuf,
    /// Written artifact
    pub file: PathBuf,
}

/// A file that produced no schema on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Source file
    pub path: PathBuf,
    /// Why it was skipped
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// A file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    /// Source file
    pub path: PathBuf,
    /// Error message
    pub error: String,
}

/// Outcome of a sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Scanned directory
    pub source_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
    /// Path of the written index
    pub index_path: PathBuf,
    /// Components written, sorted by name
    pub components: Vec<SyncedComponent>,
    /// Files skipped on purpose
    pub skipped: Vec<SkippedFile>,
    /// Files that failed
    pub failed: Vec<FailedFile>,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

impl SyncReport {
    /// Whether any file failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

enum FileOutcome {
    Compiled(PathBuf, Box<ComponentSchema>),
    Skipped(SkippedFile),
    Failed(FailedFile),
}

fn process_file(extractor: &Extractor, path: &Path) -> FileOutcome {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return FileOutcome::Failed(FailedFile {
                path: path.to_path_buf(),
                error: e.to_string(),
            });
        }
    };

    match extractor.extract(&source, path) {
        Extraction::Extracted(descriptor) => {
            FileOutcome::Compiled(path.to_path_buf(), Box::new(compile(&descriptor)))
        }
        Extraction::Skipped(reason) => {
            info!("Skipping {}: {}", path.display(), reason);
            FileOutcome::Skipped(SkippedFile {
                path: path.to_path_buf(),
                reason,
            })
        }
    }
}

/// Runs the pipeline end to end.
///
/// # Errors
///
/// Returns an error if the source directory is missing or unreadable, or
/// if the artifacts cannot be written.
pub fn run_sync(options: &SyncOptions) -> Result<SyncReport> {
    let start = Instant::now();

    let files = SourceScanner::new(&options.source_dir)
        .with_extensions(&options.extensions)
        .recursive(options.recursive)
        .scan()
        .with_context(|| format!("failed to scan {}", options.source_dir.display()))?;

    info!(
        "Processing {} source files from {}",
        files.len(),
        options.source_dir.display()
    );

    let extractor = Extractor::with_exclusions(&options.exclude);

    let outcomes: Vec<FileOutcome> = if options.parallel {
        files
            .par_iter()
            .map(|path| process_file(&extractor, path))
            .collect()
    } else {
        files
            .iter()
            .map(|path| process_file(&extractor, path))
            .collect()
    };

    let mut compiled = Vec::new();
    let mut skipped = Vec::new();
    let mut failed = Vec::new();

    for outcome in outcomes {
        match outcome {
            FileOutcome::Compiled(path, schema) => compiled.push((path, *schema)),
            FileOutcome::Skipped(file) => skipped.push(file),
            FileOutcome::Failed(file) => failed.push(file),
        }
    }

    // Stable: equal names keep scan order, so the first file wins below.
    compiled.sort_by(|(_, a), (_, b)| a.component_name.cmp(&b.component_name));

    let mut first_source: HashMap<String, PathBuf> = HashMap::new();
    let mut sources = Vec::new();
    let mut schemas = Vec::new();

    for (path, schema) in compiled {
        let name = schema.component_name.to_string();
        if let Some(existing) = first_source.get(&name) {
            warn!(
                "Duplicate component {} in {} (already defined by {})",
                name,
                path.display(),
                existing.display()
            );
            failed.push(FailedFile {
                error: format!(
                    "duplicate component name {name} (already defined by {})",
                    existing.display()
                ),
                path,
            });
            continue;
        }
        first_source.insert(name, path.clone());
        sources.push(path);
        schemas.push(schema);
    }

    let summary = write_with_options(
        &schemas,
        &options.output_dir,
        WriterOptions::new().with_parallel(options.parallel),
    )
    .with_context(|| format!("failed to write schemas to {}", options.output_dir.display()))?;

    let components = schemas
        .iter()
        .zip(sources)
        .zip(summary.schema_files)
        .map(|((schema, source), file)| SyncedComponent {
            component: schema.component_name.to_string(),
            tool: schema.tool_definition.name.clone(),
            category: schema.category,
            props: schema.properties.len(),
            source,
            file,
        })
        .collect();

    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    debug!(
        "Sync finished in {}ms: {} written, {} skipped, {} failed",
        duration_ms,
        schemas.len(),
        skipped.len(),
        failed.len()
    );

    Ok(SyncReport {
        source_dir: options.source_dir.clone(),
        output_dir: options.output_dir.clone(),
        index_path: summary.index_path,
        components,
        skipped,
        failed,
        duration_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn options(temp: &TempDir) -> SyncOptions {
        SyncOptions {
            source_dir: temp.path().join("components"),
            output_dir: temp.path().join("schemas"),
            ..SyncOptions::from_config(&SyncConfig::default())
        }
    }

    fn write_source(temp: &TempDir, relative: &str, content: &str) {
        let path = temp.path().join("components").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_sync_sorts_and_skips() {
        let temp = TempDir::new().unwrap();
        write_source(&temp, "weather-card.tsx", "export function WeatherCard({ location }) {}");
        write_source(&temp, "chart-card.tsx", "export const ChartCard = ({ title }) => null;");
        write_source(&temp, "index.tsx", "export function Index({ a }) {}");
        write_source(&temp, "utils.tsx", "export const helper = 1;");

        let report = run_sync(&options(&temp)).unwrap();

        let names: Vec<_> = report.components.iter().map(|c| c.component.as_str()).collect();
        assert_eq!(names, vec!["ChartCard", "WeatherCard"]);
        assert_eq!(report.skipped.len(), 2);
        assert!(!report.has_failures());
        assert!(report.index_path.is_file());
    }

    #[test]
    fn test_sync_reports_unreadable_file() {
        let temp = TempDir::new().unwrap();
        write_source(&temp, "badge.tsx", "export function Badge({ label }) {}");
        let broken = temp.path().join("components/broken.tsx");
        fs::write(&broken, [0xff, 0xfe, 0x00]).unwrap();

        let report = run_sync(&options(&temp)).unwrap();

        assert_eq!(report.components.len(), 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].path, broken);
    }

    #[test]
    fn test_sync_duplicate_names_keep_first() {
        let temp = TempDir::new().unwrap();
        write_source(&temp, "a/badge.tsx", "export function Badge({ label }) {}");
        write_source(&temp, "b/badge.tsx", "export function Badge({ label, tone }) {}");

        let mut opts = options(&temp);
        opts.recursive = true;
        let report = run_sync(&opts).unwrap();

        assert_eq!(report.components.len(), 1);
        assert_eq!(report.components[0].props, 1);
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].error.contains("duplicate component name Badge"));
    }

    #[test]
    fn test_sync_missing_source_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = run_sync(&options(&temp)).unwrap_err();
        assert!(format!("{err:#}").contains("source directory not found"));
        assert!(!temp.path().join("schemas").exists());
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let temp = TempDir::new().unwrap();
        write_source(&temp, "info-card.tsx", "export function InfoCard({ title, variant = 'default' }) {}");
        write_source(&temp, "data-table.tsx", "export function DataTable({ title, rows, columns }) {}");

        let mut opts = options(&temp);
        opts.parallel = false;
        run_sync(&opts).unwrap();
        let sequential = fs::read(temp.path().join("schemas/index.json")).unwrap();

        opts.parallel = true;
        run_sync(&opts).unwrap();
        let parallel = fs::read(temp.path().join("schemas/index.json")).unwrap();

        assert_eq!(sequential, parallel);
    }
}
