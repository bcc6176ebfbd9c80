//! Raw option sources: CLI flags and the `xliffmergeOptions` document section.
//!
//! Every document field is optional; absence means "use the next layer or
//! the default". Field names follow the camelCase spelling used in profiles
//! and `package.json`.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Parsed command-line flags.
pub struct ProgramOptions {
    pub verbose: bool,
    pub quiet: bool,
    pub profile_path: Option<String>,
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// Root of a profile or manifest document.
pub struct ConfigFile {
    #[serde(rename = "xliffmergeOptions", default)]
    pub xliffmerge_options: Option<RawMergeOptions>,
}

impl ConfigFile {
    pub fn new(options: RawMergeOptions) -> Self {
        Self {
            xliffmerge_options: Some(options),
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// The `xliffmergeOptions` section as written by the user.
pub struct RawMergeOptions {
    pub src_dir: Option<String>,
    pub gen_dir: Option<String>,
    pub i18n_file: Option<String>,
    pub i18n_base_file: Option<String>,
    /// Kept as text so an unknown format reaches validation.
    pub i18n_format: Option<String>,
    pub default_language: Option<String>,
    pub languages: Option<Vec<String>>,
    pub remove_unused_ids: Option<bool>,
    pub support_ngx_translate: Option<bool>,
    pub ngx_translate_extraction_pattern: Option<String>,
    pub use_source_as_target: Option<bool>,
    pub target_praefix: Option<String>,
    pub target_suffix: Option<String>,
    pub beautify_output: Option<bool>,
    pub preserve_order: Option<bool>,
    pub allow_id_change: Option<bool>,
    pub autotranslate: Option<AutotranslateSetting>,
    pub apikey: Option<String>,
    pub apikeyfile: Option<String>,
    pub verbose: Option<bool>,
    pub quiet: Option<bool>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
/// `autotranslate` accepts either a flag or an explicit list of languages.
pub enum AutotranslateSetting {
    Enabled(bool),
    Languages(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Supported i18n file formats.
pub enum I18nFormat {
    Xlf,
    Xlf2,
    Xmb,
}

impl I18nFormat {
    pub const ALL: [I18nFormat; 3] = [I18nFormat::Xlf, I18nFormat::Xlf2, I18nFormat::Xmb];

    pub fn as_str(self) -> &'static str {
        match self {
            I18nFormat::Xlf => "xlf",
            I18nFormat::Xlf2 => "xlf2",
            I18nFormat::Xmb => "xmb",
        }
    }

    /// Extension of the master file.
    pub fn master_extension(self) -> &'static str {
        match self {
            I18nFormat::Xmb => "xmb",
            _ => "xlf",
        }
    }

    /// Extension of the generated per-language files.
    pub fn output_extension(self) -> &'static str {
        match self {
            I18nFormat::Xmb => "xtb",
            _ => "xlf",
        }
    }
}

impl FromStr for I18nFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        I18nFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for I18nFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
