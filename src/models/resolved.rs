//! Fully merged, defaulted and derived configuration.

use super::options::I18nFormat;
use std::fmt;

/// Placeholder shown wherever the API key would be rendered.
pub const API_KEY_MASK: &str = "****";

#[derive(Clone, PartialEq, Eq)]
/// API key for the translation service. Renders only as a mask.
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The literal key, for the translation client only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(API_KEY_MASK)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", API_KEY_MASK)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved `autotranslate` setting.
pub enum Autotranslate {
    Disabled,
    /// All configured languages except the default language.
    All,
    Languages(Vec<String>),
}

impl Autotranslate {
    pub fn is_enabled(&self) -> bool {
        match self {
            Autotranslate::Disabled => false,
            Autotranslate::All => true,
            Autotranslate::Languages(l) => !l.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Generated file for one language.
pub struct OutputFile {
    pub language: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Configuration used by validation, reporting and the merge step.
pub struct ResolvedConfig {
    pub verbose: bool,
    pub quiet: bool,
    pub used_profile_path: Option<String>,
    pub default_language: String,
    pub src_dir: String,
    pub gen_dir: String,
    pub i18n_base_file: Option<String>,
    /// Master file path including `src_dir`.
    pub i18n_file: String,
    pub i18n_format: String,
    pub languages: Vec<String>,
    pub output_files: Vec<OutputFile>,
    pub remove_unused_ids: bool,
    pub support_ngx_translate: bool,
    pub ngx_translate_extraction_pattern: String,
    pub use_source_as_target: bool,
    pub target_praefix: String,
    pub target_suffix: String,
    pub beautify_output: bool,
    pub preserve_order: bool,
    pub allow_id_change: bool,
    pub autotranslate: Autotranslate,
    pub apikey: Option<ApiKey>,
    pub apikeyfile: Option<String>,
}

impl ResolvedConfig {
    /// Parsed format, `None` when the configured value is unknown.
    pub fn format(&self) -> Option<I18nFormat> {
        self.i18n_format.parse().ok()
    }

    pub fn output_file(&self, language: &str) -> Option<&str> {
        self.output_files
            .iter()
            .find(|o| o.language == language)
            .map(|o| o.path.as_str())
    }

    /// Languages that should be machine translated.
    pub fn autotranslated_languages(&self) -> Vec<String> {
        match &self.autotranslate {
            Autotranslate::Disabled => Vec::new(),
            Autotranslate::All => self
                .languages
                .iter()
                .filter(|l| **l != self.default_language)
                .cloned()
                .collect(),
            Autotranslate::Languages(l) => l.clone(),
        }
    }

    /// Whether the verbose parameter dump should be printed.
    pub fn wants_report(&self) -> bool {
        self.verbose && !self.quiet
    }
}
