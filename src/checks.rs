//! Syntax checks used by the validation rules.
//!
//! - Language tags: a primary subtag of letters, optionally followed by one
//!   region subtag separated by `-` or `_` (`en`, `en_US`, `zh-CN`).
//! - ngx-translate extraction patterns: `|`-separated parts where `@@`
//!   selects the explicit message id and every other part names a
//!   description prefix.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Marker selecting the explicit message id in an extraction pattern.
pub const EXPLICIT_ID_MARKER: &str = "@@";

/// Pattern used when ngx-translate support is on but no pattern is set.
pub const DEFAULT_EXTRACTION_PATTERN: &str = "@@|ngx-translate";

fn language_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z]{1,8}([-_][a-zA-Z0-9]{1,8})?$").expect("language regex")
    })
}

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("identifier regex"))
}

/// Whether `lang` is an acceptable language tag.
pub fn is_valid_language(lang: &str) -> bool {
    language_re().is_match(lang)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Syntax errors of an extraction pattern.
pub enum PatternError {
    #[error("extraction pattern must not contain @@ twice")]
    DuplicateMarker,
    #[error("description pattern must be an identifier containing only letters, digits, _ or -")]
    InvalidDescription,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parsed extraction pattern.
pub struct ExtractionPattern {
    pub extract_from_explicit_id: bool,
    pub description_identifiers: Vec<String>,
}

/// Parse an ngx-translate extraction pattern such as `@@|ngx-translate`.
pub fn parse_extraction_pattern(pattern: &str) -> Result<ExtractionPattern, PatternError> {
    let mut parsed = ExtractionPattern {
        extract_from_explicit_id: false,
        description_identifiers: Vec::new(),
    };
    for part in pattern.split('|') {
        if part == EXPLICIT_ID_MARKER {
            if parsed.extract_from_explicit_id {
                return Err(PatternError::DuplicateMarker);
            }
            parsed.extract_from_explicit_id = true;
        } else if identifier_re().is_match(part) {
            parsed.description_identifiers.push(part.to_string());
        } else {
            return Err(PatternError::InvalidDescription);
        }
    }
    Ok(parsed)
}
