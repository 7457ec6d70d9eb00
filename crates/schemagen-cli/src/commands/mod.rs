//! Command implementations for the schemagen CLI.
//!
//! Each command module parses its arguments, executes the operation, and
//! formats output according to the requested format. Reports go to stdout;
//! logs go to stderr.

pub mod add;
pub mod completions;
pub mod config;
pub mod sync;
pub mod tools;
pub mod validate;
