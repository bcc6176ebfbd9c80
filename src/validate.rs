//! Validation pipeline for a resolved configuration.
//!
//! Rules run in a fixed order. Each rule returns a `Verdict`; the runner
//! threads collected warnings through `Flow::Continue` and stops at the
//! first `Verdict::Fail`, so at most one error is reported per run while
//! every warning found up to that point is kept.

use crate::checks::{is_valid_language, parse_extraction_pattern};
use crate::models::resolved::ResolvedConfig;
use crate::models::{Diagnostic, Rule};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Outcome of a single rule.
pub enum Verdict {
    Pass,
    Warn(Vec<Diagnostic>),
    Fail(Diagnostic),
}

/// State threaded through the pipeline.
pub enum Flow {
    Continue(Vec<Diagnostic>),
    Stop {
        error: Diagnostic,
        warnings: Vec<Diagnostic>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Result of a validation run.
pub struct Validation {
    pub error: Option<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

impl From<Flow> for Validation {
    fn from(flow: Flow) -> Self {
        match flow {
            Flow::Continue(warnings) => Validation {
                error: None,
                warnings,
            },
            Flow::Stop { error, warnings } => Validation {
                error: Some(error),
                warnings,
            },
        }
    }
}

type CheckFn = fn(&ResolvedConfig, &Path) -> Verdict;

struct Check {
    rule: Rule,
    run: CheckFn,
}

/// Rules in evaluation order. Each rule may assume all earlier ones passed.
const CHECKS: &[Check] = &[
    Check {
        rule: Rule::Languages,
        run: check_languages,
    },
    Check {
        rule: Rule::I18nFile,
        run: check_i18n_file,
    },
    Check {
        rule: Rule::SrcDir,
        run: check_src_dir,
    },
    Check {
        rule: Rule::GenDir,
        run: check_gen_dir,
    },
    Check {
        rule: Rule::I18nFileReadable,
        run: check_i18n_file_readable,
    },
    Check {
        rule: Rule::LanguageSyntax,
        run: check_language_syntax,
    },
    Check {
        rule: Rule::I18nFormat,
        run: check_i18n_format,
    },
    Check {
        rule: Rule::Autotranslate,
        run: check_autotranslate,
    },
    Check {
        rule: Rule::NgxTranslatePattern,
        run: check_ngx_translate_pattern,
    },
    Check {
        rule: Rule::TargetAffixes,
        run: check_target_affixes,
    },
];

fn step(flow: Flow, check: &Check, cfg: &ResolvedConfig, root: &Path) -> Flow {
    let mut warnings = match flow {
        Flow::Continue(warnings) => warnings,
        stop @ Flow::Stop { .. } => return stop,
    };
    match (check.run)(cfg, root) {
        Verdict::Pass => {
            debug!(rule = check.rule.id(), "check passed");
            Flow::Continue(warnings)
        }
        Verdict::Warn(mut found) => {
            debug!(rule = check.rule.id(), count = found.len(), "check warned");
            warnings.append(&mut found);
            Flow::Continue(warnings)
        }
        Verdict::Fail(error) => {
            debug!(rule = check.rule.id(), message = %error.message, "check failed");
            Flow::Stop { error, warnings }
        }
    }
}

/// Run all rules against `cfg`; relative paths are resolved against `root`.
pub fn validate(cfg: &ResolvedConfig, root: &Path) -> Validation {
    CHECKS
        .iter()
        .fold(Flow::Continue(Vec::new()), |flow, check| {
            step(flow, check, cfg, root)
        })
        .into()
}

fn check_languages(cfg: &ResolvedConfig, _root: &Path) -> Verdict {
    if cfg.languages.is_empty() {
        Verdict::Fail(Diagnostic::error(Rule::Languages, "no languages specified"))
    } else {
        Verdict::Pass
    }
}

fn check_i18n_file(cfg: &ResolvedConfig, _root: &Path) -> Verdict {
    if cfg.i18n_file.is_empty() {
        Verdict::Fail(Diagnostic::error(Rule::I18nFile, "no i18nFile specified"))
    } else {
        Verdict::Pass
    }
}

fn check_dir(rule: Rule, name: &str, dir: &str, root: &Path) -> Verdict {
    if root.join(dir).is_dir() {
        Verdict::Pass
    } else {
        Verdict::Fail(Diagnostic::error(
            rule,
            format!("{} \"{}\" is not a directory", name, dir),
        ))
    }
}

fn check_src_dir(cfg: &ResolvedConfig, root: &Path) -> Verdict {
    check_dir(Rule::SrcDir, "srcDir", &cfg.src_dir, root)
}

fn check_gen_dir(cfg: &ResolvedConfig, root: &Path) -> Verdict {
    check_dir(Rule::GenDir, "genDir", &cfg.gen_dir, root)
}

fn check_i18n_file_readable(cfg: &ResolvedConfig, root: &Path) -> Verdict {
    let path = root.join(&cfg.i18n_file);
    if path.is_file() && fs::File::open(&path).is_ok() {
        Verdict::Pass
    } else {
        Verdict::Fail(Diagnostic::error(
            Rule::I18nFileReadable,
            format!("i18nFile \"{}\" is not readable", cfg.i18n_file),
        ))
    }
}

fn check_language_syntax(cfg: &ResolvedConfig, _root: &Path) -> Verdict {
    std::iter::once(&cfg.default_language)
        .chain(cfg.languages.iter())
        .find(|lang| !is_valid_language(lang))
        .map_or(Verdict::Pass, |lang| {
            Verdict::Fail(Diagnostic::error(
                Rule::LanguageSyntax,
                format!("language \"{}\" is not valid", lang),
            ))
        })
}

fn check_i18n_format(cfg: &ResolvedConfig, _root: &Path) -> Verdict {
    match cfg.format() {
        Some(_) => Verdict::Pass,
        None => Verdict::Fail(Diagnostic::error(
            Rule::I18nFormat,
            format!("i18nFormat \"{}\" invalid", cfg.i18n_format),
        )),
    }
}

fn check_autotranslate(cfg: &ResolvedConfig, _root: &Path) -> Verdict {
    if !cfg.autotranslate.is_enabled() {
        return Verdict::Pass;
    }
    if cfg.apikey.is_none() {
        return Verdict::Fail(Diagnostic::error(
            Rule::Autotranslate,
            "autotranslate requires an API key",
        ));
    }
    let targets = cfg.autotranslated_languages();
    if let Some(lang) = targets.iter().find(|l| !cfg.languages.contains(*l)) {
        return Verdict::Fail(Diagnostic::error(
            Rule::Autotranslate,
            format!("autotranslate language \"{}\" is not in list of languages", lang),
        ));
    }
    if let Some(lang) = targets.iter().find(|l| **l == cfg.default_language) {
        return Verdict::Fail(Diagnostic::error(
            Rule::Autotranslate,
            format!(
                "autotranslate language \"{}\" cannot be translated, because it is the source language",
                lang
            ),
        ));
    }
    Verdict::Pass
}

fn check_ngx_translate_pattern(cfg: &ResolvedConfig, _root: &Path) -> Verdict {
    if !cfg.support_ngx_translate {
        return Verdict::Pass;
    }
    match parse_extraction_pattern(&cfg.ngx_translate_extraction_pattern) {
        Ok(_) => Verdict::Pass,
        Err(e) => Verdict::Fail(Diagnostic::error(
            Rule::NgxTranslatePattern,
            format!(
                "ngxTranslateExtractionPattern \"{}\": {}",
                cfg.ngx_translate_extraction_pattern, e
            ),
        )),
    }
}

fn check_target_affixes(cfg: &ResolvedConfig, _root: &Path) -> Verdict {
    if cfg.use_source_as_target {
        return Verdict::Pass;
    }
    let warnings: Vec<Diagnostic> = [
        ("targetPraefix", &cfg.target_praefix),
        ("targetSuffix", &cfg.target_suffix),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(name, value)| {
        Diagnostic::warning(
            Rule::TargetAffixes,
            format!(
                "configured {} \"{}\" will not be used because \"useSourceAsTarget\" is disabled",
                name, value
            ),
        )
    })
    .collect();
    if warnings.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Warn(warnings)
    }
}
