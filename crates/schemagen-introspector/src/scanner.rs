//! Component source discovery.
//!
//! Lists candidate files in a source directory by extension. Exclusion by
//! file name is left to the [`Extractor`](crate::Extractor) so skipped files
//! can still be reported.

use schemagen_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default component source extension.
pub const DEFAULT_EXTENSION: &str = "tsx";

/// Lists component source files under a root directory.
///
/// # Examples
///
/// ```no_run
/// use schemagen_introspector::SourceScanner;
///
/// let files = SourceScanner::new("src/components")
///     .with_extensions(["tsx", "jsx"])
///     .recursive(true)
///     .scan()?;
///
/// for file in files {
///     println!("{}", file.display());
/// }
/// # Ok::<(), schemagen_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SourceScanner {
    root: PathBuf,
    extensions: Vec<String>,
    recursive: bool,
}

impl SourceScanner {
    /// Creates a scanner for `.tsx` files directly inside `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            recursive: false,
        }
    }

    /// Replaces the accepted extensions (without leading dot).
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    /// Descends into subdirectories when `true`.
    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns matching files sorted by path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceNotFound`] if the root is missing or not a
    /// directory, and [`Error::Io`] if a directory cannot be read.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(Error::SourceNotFound {
                path: self.root.clone(),
            });
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                Error::io(path, e.into())
            })?;

            if entry.file_type().is_file() && self.accepts(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        tracing::debug!(
            "Found {} component source files in {}",
            files.len(),
            self.root.display()
        );

        Ok(files)
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|accepted| *accepted == ext)
            })
    }
}

/// Reads a component source file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or is not valid UTF-8.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, relative: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "export function X({ a }) {}").unwrap();
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "weather-card.tsx");
        touch(temp.path(), "chart-card.tsx");
        touch(temp.path(), "utils.ts");
        touch(temp.path(), "README.md");

        let files = SourceScanner::new(temp.path()).scan().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["chart-card.tsx", "weather-card.tsx"]);
    }

    #[test]
    fn test_scan_is_flat_by_default() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "badge.tsx");
        touch(temp.path(), "nested/panel.tsx");

        let flat = SourceScanner::new(temp.path()).scan().unwrap();
        assert_eq!(flat.len(), 1);

        let deep = SourceScanner::new(temp.path())
            .recursive(true)
            .scan()
            .unwrap();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_scan_custom_extensions() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.tsx");
        touch(temp.path(), "b.JSX");

        let files = SourceScanner::new(temp.path())
            .with_extensions([".jsx"])
            .scan()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("b.JSX"));
    }

    #[test]
    fn test_scan_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = SourceScanner::new(temp.path().join("missing"))
            .scan()
            .unwrap_err();
        assert!(err.is_source_not_found());
    }

    #[test]
    fn test_scan_root_is_file() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "card.tsx");
        let err = SourceScanner::new(temp.path().join("card.tsx"))
            .scan()
            .unwrap_err();
        assert!(err.is_source_not_found());
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/nonexistent/component.tsx").unwrap_err();
        assert!(err.is_io_error());
    }
}
