//! Artifact writer for compiled component schemas.
//!
//! Persists [`ComponentSchema`]s as flat JSON files: one
//! `<ComponentName>.json` per component plus an `index.json` listing them
//! all. Writes are atomic (temp file + rename) and, with the `parallel`
//! feature, per-component files can be written on a rayon pool.
//!
//! # Examples
//!
//! ```no_run
//! use schemagen_files::{WriterOptions, write_with_options};
//!
//! let schemas = vec![];
//! let summary = write_with_options(&schemas, "schemas", WriterOptions::new().with_parallel(true))?;
//! println!("wrote {} files", summary.file_count());
//! # Ok::<(), schemagen_files::FilesError>(())
//! ```
//!
//! [`ComponentSchema`]: schemagen_codegen::ComponentSchema

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
pub mod writer;

pub use error::{FilesError, Result};
pub use writer::{WriteSummary, WriterOptions, write, write_with_options};
