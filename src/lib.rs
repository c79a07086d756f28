//! `re` is a library for recursive, literal find-and-replace across directory trees.
//!
//! It provides the core logic for the `re` command-line tool. The main components are:
//!
//! - `cli` and `config`: turn command-line arguments into a validated `Config`.
//! - `patterns`: compile comma-separated `*`/`?` wildcard lists into anchored matchers.
//! - `replacer`: literal, non-overlapping substitution and permission-preserving writes.
//! - `walker`: visit every regular file under each directory, filter, replace, report.
//!
//! Runs are dry by default: nothing is written unless `Config::apply` is set.

pub mod cli;
pub mod config;
pub mod errors;
pub mod patterns;
pub mod replacer;
pub mod walker;

// Re-export main types for easier access by library users.
pub use config::Config;
pub use errors::{Error, Result};
pub use replacer::Replacer;
pub use walker::{Summary, Walker};
