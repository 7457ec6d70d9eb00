//! Error types for component schema synthesis.
//!
//! Library crates report failures through [`Error`]. Per-file conditions
//! that are not failures (excluded file names, sources without a component
//! declaration) are modelled as skip outcomes by the introspector and never
//! surface here.
//!
//! # Examples
//!
//! ```
//! use schemagen_core::{Error, Result};
//!
//! fn check_extension(ext: &str) -> Result<()> {
//!     if ext.is_empty() {
//!         return Err(Error::InvalidArgument(
//!             "extension cannot be empty".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_extension("").unwrap_err();
//! assert!(err.is_invalid_argument());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for schema synthesis.
///
/// All library errors use this type, so callers can handle failures
/// consistently across crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Component source directory does not exist or is not a directory.
    ///
    /// Fatal for a whole sync run.
    #[error("source directory not found: {}", path.display())]
    SourceNotFound {
        /// Path that was expected to be a directory
        path: PathBuf,
    },

    /// I/O failure on a specific path.
    ///
    /// Raised when reading a component file, creating the output
    /// directory, or writing an artifact fails.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when JSON conversion of schemas or payloads fails.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error for payloads and domain values.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Schema lookup failed.
    #[error("Schema not found: {component}")]
    SchemaNotFound {
        /// Component name that was requested
        component: String,
    },
}

impl Error {
    /// Creates an I/O error bound to a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemagen_core::Error;
    ///
    /// let err = Error::io("schemas/index.json", std::io::Error::other("disk full"));
    /// assert!(err.is_io_error());
    /// assert!(err.to_string().contains("schemas/index.json"));
    /// ```
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if the source directory was missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemagen_core::Error;
    ///
    /// let err = Error::SourceNotFound { path: "src/components".into() };
    /// assert!(err.is_source_not_found());
    /// ```
    #[must_use]
    pub const fn is_source_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }

    /// Returns `true` if an argument was rejected.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if a requested schema does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SchemaNotFound { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::SerializationError {
            message: source.to_string(),
            source: Some(source),
        }
    }
}

/// Result type alias for schema synthesis operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_display() {
        let err = Error::SourceNotFound {
            path: PathBuf::from("src/components"),
        };
        assert!(err.is_source_not_found());
        assert!(!err.is_io_error());
        assert_eq!(
            err.to_string(),
            "source directory not found: src/components"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::io("out/index.json", std::io::Error::other("read-only"));
        assert!(err.is_io_error());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::SerializationError { source: Some(_), .. }));
    }

    #[test]
    fn test_validation_error_display() {
        let err = Error::ValidationError {
            field: "humidity".to_string(),
            reason: "must be <= 100".to_string(),
        };
        assert!(err.is_validation_error());
        assert_eq!(
            err.to_string(),
            "Validation error in humidity: must be <= 100"
        );
    }

    #[test]
    fn test_invalid_category_is_invalid_argument() {
        let err = "widgets".parse::<crate::ComponentCategory>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("widgets"));
    }

    #[test]
    fn test_schema_not_found() {
        let err = Error::SchemaNotFound {
            component: "MapView".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_invalid_argument());
    }
}
