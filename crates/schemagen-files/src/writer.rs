//! Schema artifact export.
//!
//! Writes one `<ComponentName>.json` per schema, then `index.json`
//! aggregating all schemas in the given order. Output is pretty-printed JSON
//! with a trailing newline, so unchanged schemas produce byte-identical
//! files across runs.
//!
//! # Examples
//!
//! ```
//! use schemagen_codegen::compile;
//! use schemagen_core::{ComponentCategory, ComponentDescriptor, ComponentName};
//! use schemagen_files::write;
//! # use tempfile::TempDir;
//!
//! # let temp_dir = TempDir::new().unwrap();
//! # let output_dir = temp_dir.path().join("schemas");
//! let schema = compile(&ComponentDescriptor {
//!     name: ComponentName::new("Banner"),
//!     source_path: "banner.tsx".into(),
//!     category: ComponentCategory::General,
//!     description: "Banner component".to_string(),
//!     props: vec![],
//! });
//!
//! let summary = write(&[schema], &output_dir)?;
//!
//! assert!(output_dir.join("Banner.json").exists());
//! assert_eq!(summary.index_path, output_dir.join("index.json"));
//! # Ok::<(), schemagen_files::FilesError>(())
//! ```

use crate::error::{FilesError, Result};
use schemagen_codegen::{ComponentSchema, INDEX_FILE_NAME, SchemaIndex};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for writing artifacts.
///
/// # Examples
///
/// ```
/// use schemagen_files::WriterOptions;
///
/// let options = WriterOptions::default().with_parallel(true);
/// assert!(options.atomic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// Write to a temp file, then rename over the destination
    pub atomic: bool,
    /// Write per-component files on the rayon pool
    pub parallel: bool,
}

impl WriterOptions {
    /// Creates options with defaults.
    ///
    /// Defaults:
    /// - atomic: true
    /// - parallel: false
    #[must_use]
    pub const fn new() -> Self {
        Self {
            atomic: true,
            parallel: false,
        }
    }

    /// Sets whether to use atomic writes.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Sets whether per-component files are written in parallel.
    ///
    /// Ignored when the `parallel` feature is disabled.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Files produced by one write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    /// Output directory
    pub output_dir: PathBuf,
    /// Per-component artifact paths, in schema order
    pub schema_files: Vec<PathBuf>,
    /// Path of `index.json`
    pub index_path: PathBuf,
}

impl WriteSummary {
    /// Total number of files written, including the index.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.schema_files.len() + 1
    }
}

/// Writes schemas and the index with default options.
///
/// # Errors
///
/// See [`write_with_options`].
pub fn write(schemas: &[ComponentSchema], output_dir: impl AsRef<Path>) -> Result<WriteSummary> {
    write_with_options(schemas, output_dir, WriterOptions::default())
}

/// Writes schemas and the index.
///
/// The output directory is created first (idempotent). Existing files are
/// overwritten. `index.json` is written last, after every component file.
///
/// # Errors
///
/// Returns an error if:
/// - two schemas share a component name
/// - the output directory cannot be created
/// - a schema cannot be serialized
/// - a file cannot be written
pub fn write_with_options(
    schemas: &[ComponentSchema],
    output_dir: impl AsRef<Path>,
    options: WriterOptions,
) -> Result<WriteSummary> {
    let output_dir = output_dir.as_ref();

    check_unique_names(schemas)?;

    fs::create_dir_all(output_dir).map_err(|source| FilesError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let schema_files: Vec<PathBuf> = schemas
        .iter()
        .map(|schema| output_dir.join(schema.file_name()))
        .collect();

    write_schema_files(schemas, &schema_files, options)?;

    let index = SchemaIndex::new(schemas.to_vec());
    let index_path = output_dir.join(INDEX_FILE_NAME);
    let content = to_json(&index, "index")?;
    write_file(&index_path, &content, options)?;

    tracing::info!(
        "Wrote {} schemas and {} to {}",
        schemas.len(),
        INDEX_FILE_NAME,
        output_dir.display()
    );

    Ok(WriteSummary {
        output_dir: output_dir.to_path_buf(),
        schema_files,
        index_path,
    })
}

fn check_unique_names(schemas: &[ComponentSchema]) -> Result<()> {
    let mut seen = HashSet::new();
    for schema in schemas {
        if !seen.insert(schema.component_name.as_str()) {
            return Err(FilesError::DuplicateComponent {
                component: schema.component_name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn write_schema_files(schemas: &[ComponentSchema], paths: &[PathBuf], options: WriterOptions) -> Result<()> {
    use rayon::prelude::*;

    if !options.parallel {
        return write_schema_files_sequential(schemas, paths, options);
    }

    schemas
        .par_iter()
        .zip(paths.par_iter())
        .try_for_each(|(schema, path)| write_schema(schema, path, options))
}

#[cfg(not(feature = "parallel"))]
fn write_schema_files(schemas: &[ComponentSchema], paths: &[PathBuf], options: WriterOptions) -> Result<()> {
    if options.parallel {
        tracing::debug!("parallel feature disabled, writing sequentially");
    }
    write_schema_files_sequential(schemas, paths, options)
}

fn write_schema_files_sequential(
    schemas: &[ComponentSchema],
    paths: &[PathBuf],
    options: WriterOptions,
) -> Result<()> {
    schemas
        .iter()
        .zip(paths)
        .try_for_each(|(schema, path)| write_schema(schema, path, options))
}

fn write_schema(schema: &ComponentSchema, path: &Path, options: WriterOptions) -> Result<()> {
    let content = to_json(schema, schema.component_name.as_str())?;
    write_file(path, &content, options)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Pretty JSON with a trailing newline.
fn to_json<T: Serialize>(value: &T, component: &str) -> Result<String> {
    let mut content = serde_json::to_string_pretty(value).map_err(|source| FilesError::Serialize {
        component: component.to_string(),
        source,
    })?;
    content.push('\n');
    Ok(content)
}

/// Writes file content, atomically if requested.
fn write_file(path: &Path, content: &str, options: WriterOptions) -> Result<()> {
    let write_error = |source: std::io::Error| FilesError::Write {
        path: path.to_path_buf(),
        source,
    };

    if !options.atomic {
        return fs::write(path, content).map_err(write_error);
    }

    let temp_path = path.with_extension("json.tmp");

    if let Err(source) = write_then_rename(&temp_path, path, content) {
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::debug!("Failed to remove temp file {}: {}", temp_path.display(), e);
        }
        return Err(write_error(source));
    }

    Ok(())
}

fn write_then_rename(temp_path: &Path, path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    fs::rename(temp_path, path)
}
