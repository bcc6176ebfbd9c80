//! Shared data models for options, resolved configuration and diagnostics.

pub mod options;
pub mod resolved;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Severity of a diagnostic. Errors stop the run, warnings are advisory.
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Validation rule that produced a diagnostic.
pub enum Rule {
    LoadProfile,
    Languages,
    I18nFile,
    SrcDir,
    GenDir,
    I18nFileReadable,
    LanguageSyntax,
    I18nFormat,
    Autotranslate,
    NgxTranslatePattern,
    TargetAffixes,
    Merge,
}

impl Rule {
    /// Stable identifier, used in log events.
    pub fn id(self) -> &'static str {
        match self {
            Rule::LoadProfile => "load-profile",
            Rule::Languages => "languages",
            Rule::I18nFile => "i18n-file",
            Rule::SrcDir => "src-dir",
            Rule::GenDir => "gen-dir",
            Rule::I18nFileReadable => "i18n-file-readable",
            Rule::LanguageSyntax => "language-syntax",
            Rule::I18nFormat => "i18n-format",
            Rule::Autotranslate => "autotranslate",
            Rule::NgxTranslatePattern => "ngx-translate-pattern",
            Rule::TargetAffixes => "target-affixes",
            Rule::Merge => "merge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single finding with severity, origin and a self-contained message.
pub struct Diagnostic {
    pub severity: Severity,
    pub rule: Rule,
    pub message: String,
}

impl Diagnostic {
    pub fn error(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            rule,
            message: message.into(),
        }
    }

    pub fn warning(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            rule,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.label(), self.message)
    }
}
