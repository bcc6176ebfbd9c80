//! Seam for the merge step that runs after a configuration validated cleanly.
//!
//! Parsing XLIFF/XMB files and writing the per-language outputs live behind
//! this trait; the engine never calls it when validation produced an error.

use crate::models::resolved::ResolvedConfig;
use crate::output::OutputSink;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("merge of \"{language}\" failed: {reason}")]
    Language { language: String, reason: String },
}

/// Merges the master file into the configured output files.
pub trait Merger {
    fn merge(&mut self, config: &ResolvedConfig, sink: &mut dyn OutputSink)
        -> Result<(), MergeError>;
}
