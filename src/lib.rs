//! xliffmerge core library.
//!
//! This crate resolves and validates the configuration of the xliffmerge
//! tool before any translation file is touched: CLI flags, an optional
//! profile (or the `xliffmergeOptions` section of `package.json`) and
//! defaults are merged into one `ResolvedConfig`, checked by an ordered rule
//! pipeline and optionally dumped for the user.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Profile/manifest loading and effective configuration resolution.
//! - `validate`: Ordered validation pipeline (first error wins, warnings collected).
//! - `checks`: Syntax checks for language tags and extraction patterns.
//! - `report`: Verbose parameter dump.
//! - `engine`: Orchestrates a full resolve/validate/report run.
//! - `merge`: Seam for the merge step that follows a valid configuration.
//! - `models`: Data models for options, resolved configuration and diagnostics.
//! - `output`: Output sinks (console, buffer, null) and diagnostic printers.
//! - `logging`: `tracing` subscriber setup for the binary.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod merge;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;
pub mod validate;

pub use engine::{Engine, RunError};
pub use models::options::{ConfigFile, ProgramOptions, RawMergeOptions};
pub use models::resolved::ResolvedConfig;
pub use models::{Diagnostic, Severity};
