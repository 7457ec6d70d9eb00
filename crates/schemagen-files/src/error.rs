//! Error types for artifact writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing schema artifacts.
///
/// Every variant names the path or component involved so the caller can
/// report it without extra context.
#[derive(Error, Debug)]
pub enum FilesError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An artifact could not be written or moved into place.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A schema could not be serialized.
    #[error("failed to serialize schema for {component}: {source}")]
    Serialize {
        /// Component (or `index`) being serialized
        component: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Two schemas would be written to the same file.
    #[error("duplicate component name: {component}")]
    DuplicateComponent {
        /// Component name that occurs more than once
        component: String,
    },
}

impl FilesError {
    /// Returns `true` for I/O failures (directory creation or file writes).
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::CreateDir { .. } | Self::Write { .. })
    }

    /// Returns the path involved, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::CreateDir { path, .. } | Self::Write { path, .. } => Some(path),
            Self::Serialize { .. } | Self::DuplicateComponent { .. } => None,
        }
    }
}

/// Result alias for artifact writing.
pub type Result<T> = std::result::Result<T, FilesError>;
