//! Orchestrates one run: load sources, resolve, validate, report, merge.
//!
//! All diagnostics go to the engine's `OutputSink` in program order: a load
//! error (which ends the run), otherwise the first validation error, the
//! collected warnings and finally the verbose parameter dump. Warnings stay
//! queryable through `Engine::warnings` after the run.

use crate::config::{self, LoadError};
use crate::merge::{MergeError, Merger};
use crate::models::options::{ConfigFile, ProgramOptions};
use crate::models::resolved::ResolvedConfig;
use crate::models::{Diagnostic, Rule};
use crate::output::{print_diagnostic, OutputSink};
use crate::report::report_parameters;
use crate::validate::validate;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
/// Why a run stopped.
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("{0}")]
    Invalid(Diagnostic),
    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Configuration engine for one invocation.
pub struct Engine<S: OutputSink> {
    sink: S,
    options: ProgramOptions,
    profile: Option<ConfigFile>,
    root: PathBuf,
    version: String,
    warnings: Vec<Diagnostic>,
}

impl<S: OutputSink> Engine<S> {
    /// Engine that reads the profile from `options.profile_path`, falling
    /// back to `package.json`.
    pub fn new(sink: S, options: ProgramOptions) -> Self {
        Self::from_options(sink, options, None)
    }

    /// Engine with an already parsed profile document.
    pub fn from_options(sink: S, options: ProgramOptions, profile: Option<ConfigFile>) -> Self {
        Self {
            sink,
            options,
            profile,
            root: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            version: env!("CARGO_PKG_VERSION").to_string(),
            warnings: Vec::new(),
        }
    }

    /// Directory that relative paths are resolved against.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Version shown in the verbose banner.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Warnings of the last run, in the order they were found.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Load the option sources and resolve them without emitting anything.
    pub fn resolve(&self) -> Result<ResolvedConfig, LoadError> {
        let sources = config::load_sources(&self.root, &self.options, self.profile.clone())?;
        Ok(config::resolve(&self.options, &sources, &self.root))
    }

    /// Resolve, validate and report.
    pub fn run(&mut self) -> Result<ResolvedConfig, RunError> {
        self.execute(None)
    }

    /// Like `run`, then hand a valid configuration to `merger`.
    pub fn run_with(&mut self, merger: &mut dyn Merger) -> Result<ResolvedConfig, RunError> {
        self.execute(Some(merger))
    }

    fn execute(&mut self, merger: Option<&mut dyn Merger>) -> Result<ResolvedConfig, RunError> {
        self.warnings.clear();
        let config = match self.resolve() {
            Ok(cfg) => cfg,
            Err(e) => {
                debug!(error = %e, "loading options failed");
                print_diagnostic(
                    &mut self.sink,
                    &Diagnostic::error(Rule::LoadProfile, e.to_string()),
                );
                return Err(e.into());
            }
        };

        let validation = validate(&config, &self.root);
        if let Some(error) = &validation.error {
            print_diagnostic(&mut self.sink, error);
        }
        for warning in &validation.warnings {
            print_diagnostic(&mut self.sink, warning);
        }
        self.warnings = validation.warnings;

        if config.wants_report() {
            report_parameters(&mut self.sink, &config, &self.version);
        }
        if let Some(error) = validation.error {
            return Err(RunError::Invalid(error));
        }

        if let Some(merger) = merger {
            if let Err(e) = merger.merge(&config, &mut self.sink) {
                print_diagnostic(&mut self.sink, &Diagnostic::error(Rule::Merge, e.to_string()));
                return Err(e.into());
            }
        }
        info!(
            languages = config.languages.len(),
            warnings = self.warnings.len(),
            "configuration valid"
        );
        Ok(config)
    }
}
