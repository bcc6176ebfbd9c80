//! Profile discovery and effective configuration resolution.
//!
//! xliffmerge reads its options from the `xliffmergeOptions` section of a
//! profile given with `--profile` (JSON, or YAML/TOML by extension) and of
//! `package.json` in the working directory, then merges them with CLI flags
//! and defaults into a `ResolvedConfig`.
//!
//! Defaults:
//! - `defaultLanguage`: `en`
//! - `srcDir`: `.`, `genDir`: same as `srcDir`
//! - `i18nFormat`: `xlf`, `i18nFile`: `messages.xlf` (`messages.xmb` for xmb)
//! - `removeUnusedIds`, `useSourceAsTarget`, `preserveOrder`: true
//! - `ngxTranslateExtractionPattern`: `@@|ngx-translate`
//! - everything else: off or empty
//!
//! Overrides precedence: CLI > profile > package.json > defaults.

use crate::checks::DEFAULT_EXTRACTION_PATTERN;
use crate::models::options::{
    AutotranslateSetting, ConfigFile, I18nFormat, ProgramOptions, RawMergeOptions,
};
use crate::models::resolved::{ApiKey, Autotranslate, OutputFile, ResolvedConfig};
use crate::utils::{file_stem, join_display, parent_dir};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Project manifest consulted when no profile is given.
pub const MANIFEST_FILE: &str = "package.json";

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_SRC_DIR: &str = ".";
pub const DEFAULT_I18N_BASE_NAME: &str = "messages";

#[derive(Debug, Error)]
/// Failures while loading a profile document. Fatal for the run.
pub enum LoadError {
    #[error("could not read profile \"{path}\"")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("could not parse profile \"{path}\": {reason}")]
    Invalid { path: String, reason: String },
}

#[derive(Debug, Default, Clone)]
/// Raw option layers of one run, highest precedence first.
pub struct Sources {
    pub profile: Option<RawMergeOptions>,
    /// A profile was loaded or injected, even if it has no options section.
    pub profile_given: bool,
    pub profile_path: Option<String>,
    pub manifest: Option<RawMergeOptions>,
}

impl Sources {
    /// Path the options were actually taken from, for diagnostics.
    /// An injected profile has no path; the manifest is only named when no
    /// profile was given at all.
    pub fn used_profile_path(&self) -> Option<String> {
        if self.profile_given {
            return self.profile_path.clone();
        }
        self.manifest.as_ref().map(|_| MANIFEST_FILE.to_string())
    }
}

/// Return the first candidate that is present.
pub fn first_present<T>(candidates: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    candidates.into_iter().flatten().next()
}

struct Layers<'a>(Vec<&'a RawMergeOptions>);

impl<'a> Layers<'a> {
    fn new(sources: &'a Sources) -> Self {
        Self(
            [sources.profile.as_ref(), sources.manifest.as_ref()]
                .into_iter()
                .flatten()
                .collect(),
        )
    }

    /// Value of one field from the highest layer that sets it.
    fn pick<T: Clone + 'a>(&self, field: impl Fn(&'a RawMergeOptions) -> Option<&'a T>) -> Option<T> {
        first_present(self.0.iter().map(|layer| field(*layer))).cloned()
    }
}

fn parse_document(path: &str, text: &str) -> Result<ConfigFile, LoadError> {
    let lower = path.to_ascii_lowercase();
    let parsed = if lower.ends_with(".yaml") || lower.ends_with(".yml") {
        serde_yaml::from_str(text).map_err(|e| e.to_string())
    } else if lower.ends_with(".toml") {
        toml::from_str(text).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(text).map_err(|e| e.to_string())
    };
    parsed.map_err(|reason| LoadError::Invalid {
        path: path.to_string(),
        reason,
    })
}

/// Load a profile document; `path` is relative to `root` unless absolute.
pub fn load_profile(root: &Path, path: &str) -> Result<ConfigFile, LoadError> {
    let text = fs::read_to_string(root.join(path)).map_err(|source| LoadError::Unreadable {
        path: path.to_string(),
        source,
    })?;
    let doc = parse_document(path, &text)?;
    debug!(profile = path, "profile loaded");
    Ok(doc)
}

/// Load `package.json` from `root` if present.
pub fn load_manifest(root: &Path) -> Result<Option<ConfigFile>, LoadError> {
    let path = root.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    load_profile(root, MANIFEST_FILE).map(Some)
}

/// Collect the option layers for a run.
///
/// `preloaded` takes the place of the document at `options.profile_path`.
/// The manifest section is always added as the lowest layer; a broken
/// manifest is only fatal when it is the sole source.
pub fn load_sources(
    root: &Path,
    options: &ProgramOptions,
    preloaded: Option<ConfigFile>,
) -> Result<Sources, LoadError> {
    let has_profile = preloaded.is_some() || options.profile_path.is_some();
    let profile = match preloaded {
        Some(doc) => doc.xliffmerge_options,
        None => match options.profile_path.as_deref() {
            Some(p) => load_profile(root, p)?.xliffmerge_options,
            None => None,
        },
    };
    let manifest = match load_manifest(root) {
        Ok(doc) => doc.and_then(|d| d.xliffmerge_options),
        Err(e) if has_profile => {
            warn!(error = %e, "ignoring manifest");
            None
        }
        Err(e) => return Err(e),
    };
    Ok(Sources {
        profile,
        profile_given: has_profile,
        profile_path: options.profile_path.clone(),
        manifest,
    })
}

/// Key stored in `file`. Unreadable or empty files yield no key; validation
/// reports the missing key when autotranslate needs one.
fn read_api_key(root: &Path, file: &str) -> Option<ApiKey> {
    match fs::read_to_string(root.join(file)) {
        Ok(key) if !key.is_empty() => Some(ApiKey::new(key)),
        Ok(_) => {
            warn!(apikeyfile = file, "apikeyfile is empty");
            None
        }
        Err(e) => {
            warn!(apikeyfile = file, error = %e, "could not read apikeyfile");
            None
        }
    }
}

fn dedup_languages(languages: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(languages.len());
    for lang in languages {
        if out.contains(&lang) {
            warn!(language = %lang, "duplicate language ignored");
        } else {
            out.push(lang);
        }
    }
    out
}

/// Resolve `ResolvedConfig` by merging CLI flags, option layers and defaults.
pub fn resolve(options: &ProgramOptions, sources: &Sources, root: &Path) -> ResolvedConfig {
    let layers = Layers::new(sources);

    let verbose = options.verbose || layers.pick(|o| o.verbose.as_ref()).unwrap_or(false);
    let quiet = options.quiet || layers.pick(|o| o.quiet.as_ref()).unwrap_or(false);

    let i18n_format = layers
        .pick(|o| o.i18n_format.as_ref())
        .unwrap_or_else(|| I18nFormat::Xlf.to_string());
    // Unknown formats are reported by validation; derive paths as xlf meanwhile.
    let format = i18n_format.parse().unwrap_or(I18nFormat::Xlf);

    let src_dir = layers
        .pick(|o| o.src_dir.as_ref())
        .unwrap_or_else(|| DEFAULT_SRC_DIR.to_string());
    let gen_dir = layers
        .pick(|o| o.gen_dir.as_ref())
        .unwrap_or_else(|| src_dir.clone());

    let i18n_base_file = layers
        .pick(|o| o.i18n_base_file.as_ref())
        .filter(|b| !b.is_empty());
    let master = match &i18n_base_file {
        Some(base) => format!("{}.{}", base, format.master_extension()),
        None => layers.pick(|o| o.i18n_file.as_ref()).unwrap_or_else(|| {
            format!("{}.{}", DEFAULT_I18N_BASE_NAME, format.master_extension())
        }),
    };
    let i18n_file = if master.is_empty() {
        String::new()
    } else {
        join_display(&src_dir, &master)
    };

    let languages = dedup_languages(
        first_present([
            options.languages.clone(),
            layers.pick(|o| o.languages.as_ref()),
        ])
        .unwrap_or_default(),
    );
    let base = i18n_base_file
        .clone()
        .unwrap_or_else(|| file_stem(&master).to_string());
    // Outputs keep the master's directory below genDir.
    let out_dir = join_display(&gen_dir, parent_dir(&master));
    let output_files = languages
        .iter()
        .map(|lang| OutputFile {
            language: lang.clone(),
            path: join_display(
                &out_dir,
                &format!("{}.{}.{}", base, lang, format.output_extension()),
            ),
        })
        .collect();

    let autotranslate = match layers.pick(|o| o.autotranslate.as_ref()) {
        None | Some(AutotranslateSetting::Enabled(false)) => Autotranslate::Disabled,
        Some(AutotranslateSetting::Enabled(true)) => Autotranslate::All,
        Some(AutotranslateSetting::Languages(l)) => Autotranslate::Languages(l),
    };

    let apikeyfile = layers
        .pick(|o| o.apikeyfile.as_ref())
        .filter(|f| !f.is_empty());
    let apikey = match layers.pick(|o| o.apikey.as_ref()).filter(|k| !k.is_empty()) {
        Some(key) => Some(ApiKey::new(key)),
        None => match apikeyfile.as_deref() {
            Some(file) => read_api_key(root, file),
            None => None,
        },
    };

    let cfg = ResolvedConfig {
        verbose,
        quiet,
        used_profile_path: sources.used_profile_path(),
        default_language: layers
            .pick(|o| o.default_language.as_ref())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        src_dir,
        gen_dir,
        i18n_base_file,
        i18n_file,
        i18n_format,
        languages,
        output_files,
        remove_unused_ids: layers.pick(|o| o.remove_unused_ids.as_ref()).unwrap_or(true),
        support_ngx_translate: layers
            .pick(|o| o.support_ngx_translate.as_ref())
            .unwrap_or(false),
        ngx_translate_extraction_pattern: layers
            .pick(|o| o.ngx_translate_extraction_pattern.as_ref())
            .unwrap_or_else(|| DEFAULT_EXTRACTION_PATTERN.to_string()),
        use_source_as_target: layers
            .pick(|o| o.use_source_as_target.as_ref())
            .unwrap_or(true),
        target_praefix: layers.pick(|o| o.target_praefix.as_ref()).unwrap_or_default(),
        target_suffix: layers.pick(|o| o.target_suffix.as_ref()).unwrap_or_default(),
        beautify_output: layers.pick(|o| o.beautify_output.as_ref()).unwrap_or(false),
        preserve_order: layers.pick(|o| o.preserve_order.as_ref()).unwrap_or(true),
        allow_id_change: layers.pick(|o| o.allow_id_change.as_ref()).unwrap_or(false),
        autotranslate,
        apikey,
        apikeyfile,
    };
    debug!(
        profile = ?cfg.used_profile_path,
        languages = cfg.languages.len(),
        i18n_file = %cfg.i18n_file,
        "configuration resolved"
    );
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn raw(json: &str) -> RawMergeOptions {
        serde_json::from_str(json).unwrap()
    }

    fn profile_only(opts: RawMergeOptions) -> Sources {
        Sources {
            profile: Some(opts),
            profile_given: true,
            ..Sources::default()
        }
    }

    #[test]
    fn test_defaults_without_any_source() {
        let dir = tempdir().unwrap();
        let cfg = resolve(&ProgramOptions::default(), &Sources::default(), dir.path());
        assert_eq!(cfg.default_language, "en");
        assert_eq!(cfg.src_dir, ".");
        assert_eq!(cfg.gen_dir, ".");
        assert_eq!(cfg.i18n_file, "messages.xlf");
        assert_eq!(cfg.i18n_format, "xlf");
        assert!(cfg.languages.is_empty());
        assert!(cfg.output_files.is_empty());
        assert!(cfg.remove_unused_ids);
        assert!(cfg.use_source_as_target);
        assert!(!cfg.beautify_output);
        assert_eq!(cfg.ngx_translate_extraction_pattern, "@@|ngx-translate");
        assert_eq!(cfg.autotranslate, Autotranslate::Disabled);
        assert!(cfg.apikey.is_none());
        assert!(cfg.used_profile_path.is_none());
    }

    #[test]
    fn test_i18n_base_file_derivations() {
        let dir = tempdir().unwrap();
        let sources = profile_only(raw(
            r#"{"i18nBaseFile": "custom_file", "languages": ["de", "en", "fr"]}"#,
        ));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert_eq!(cfg.i18n_file, "custom_file.xlf");
        assert_eq!(cfg.output_file("de"), Some("custom_file.de.xlf"));
        assert_eq!(cfg.output_file("en"), Some("custom_file.en.xlf"));
        assert_eq!(cfg.output_file("fr"), Some("custom_file.fr.xlf"));
        assert_eq!(cfg.output_files.len(), 3);
    }

    #[test]
    fn test_output_files_follow_src_and_gen_dir() {
        let dir = tempdir().unwrap();
        let sources = profile_only(raw(
            r#"{"srcDir": "src/i18n", "genDir": "dist/i18n", "i18nFile": "master.xlf", "languages": ["de"]}"#,
        ));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert_eq!(cfg.i18n_file, "src/i18n/master.xlf");
        assert_eq!(cfg.output_file("de"), Some("dist/i18n/master.de.xlf"));

        // genDir defaults to srcDir
        let sources = profile_only(raw(r#"{"srcDir": "src/i18n", "languages": ["de"]}"#));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert_eq!(cfg.gen_dir, "src/i18n");
        assert_eq!(cfg.output_file("de"), Some("src/i18n/messages.de.xlf"));
    }

    #[test]
    fn test_xmb_format_extensions() {
        let dir = tempdir().unwrap();
        let sources = profile_only(raw(r#"{"i18nFormat": "xmb", "languages": ["de"]}"#));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert_eq!(cfg.i18n_file, "messages.xmb");
        assert_eq!(cfg.output_file("de"), Some("messages.de.xtb"));
    }

    #[test]
    fn test_precedence_profile_over_manifest_over_default() {
        let dir = tempdir().unwrap();
        let sources = Sources {
            profile: Some(raw(r#"{"srcDir": "from-profile"}"#)),
            profile_given: true,
            profile_path: Some("profile.json".into()),
            manifest: Some(raw(
                r#"{"srcDir": "from-manifest", "genDir": "gen-manifest", "languages": ["de"]}"#,
            )),
        };
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert_eq!(cfg.src_dir, "from-profile");
        assert_eq!(cfg.gen_dir, "gen-manifest");
        assert_eq!(cfg.languages, vec!["de".to_string()]);
        assert_eq!(cfg.default_language, "en");
        assert_eq!(cfg.used_profile_path.as_deref(), Some("profile.json"));
    }

    #[test]
    fn test_cli_languages_replace_profile_languages() {
        let dir = tempdir().unwrap();
        let sources = profile_only(raw(r#"{"languages": ["de", "en"]}"#));
        let opts = ProgramOptions {
            languages: Some(vec!["fr".into(), "fr".into(), "it".into()]),
            ..ProgramOptions::default()
        };
        let cfg = resolve(&opts, &sources, dir.path());
        // Duplicates collapse so each language has exactly one output file
        assert_eq!(cfg.languages, vec!["fr".to_string(), "it".to_string()]);
        assert_eq!(cfg.output_files.len(), 2);
    }

    #[test]
    fn test_cli_flags_override_profile_flags() {
        let dir = tempdir().unwrap();
        let sources = profile_only(raw(r#"{"verbose": false, "quiet": true}"#));
        let opts = ProgramOptions {
            verbose: true,
            ..ProgramOptions::default()
        };
        let cfg = resolve(&opts, &sources, dir.path());
        assert!(cfg.verbose);
        assert!(cfg.quiet);
        assert!(!cfg.wants_report());
    }

    #[test]
    fn test_apikey_read_from_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("key.txt"), "abc-123").unwrap();
        let sources = profile_only(raw(
            r#"{"autotranslate": ["de"], "apikey": "", "apikeyfile": "key.txt"}"#,
        ));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        let key = cfg.apikey.as_ref().unwrap();
        assert_eq!(key.expose(), "abc-123");
        assert_eq!(key.to_string(), "****");
        assert!(!format!("{:?}", cfg).contains("abc-123"));
    }

    #[test]
    fn test_literal_apikey_wins_over_file() {
        let dir = tempdir().unwrap();
        let sources = profile_only(raw(r#"{"apikey": "literal", "apikeyfile": "missing.txt"}"#));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert_eq!(cfg.apikey.unwrap().expose(), "literal");
        assert_eq!(cfg.apikeyfile.as_deref(), Some("missing.txt"));
    }

    #[test]
    fn test_unreadable_apikeyfile_yields_no_key() {
        let dir = tempdir().unwrap();
        let sources = profile_only(raw(r#"{"languages": ["de"], "apikeyfile": "missing.txt"}"#));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert!(cfg.apikey.is_none());
        assert_eq!(cfg.apikeyfile.as_deref(), Some("missing.txt"));
        assert_eq!(cfg.languages, vec!["de".to_string()]);
    }

    #[test]
    fn test_empty_apikeyfile_yields_no_key() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("key.txt"), "").unwrap();
        let sources = profile_only(raw(r#"{"autotranslate": true, "apikeyfile": "key.txt"}"#));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert!(cfg.apikey.is_none());
    }

    #[test]
    fn test_output_files_keep_master_directory() {
        let dir = tempdir().unwrap();
        let sources = profile_only(raw(r#"{"i18nFile": "sub/m.xlf", "languages": ["de"]}"#));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert_eq!(cfg.i18n_file, "sub/m.xlf");
        assert_eq!(cfg.output_file("de"), Some("sub/m.de.xlf"));

        let sources = profile_only(raw(
            r#"{"srcDir": "src", "genDir": "dist", "i18nFile": "sub/m.xlf", "languages": ["de"]}"#,
        ));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert_eq!(cfg.i18n_file, "src/sub/m.xlf");
        assert_eq!(cfg.output_file("de"), Some("dist/sub/m.de.xlf"));
    }

    #[test]
    fn test_injected_profile_hides_manifest_path() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{"xliffmergeOptions": {"srcDir": "."}}"#,
        )
        .unwrap();
        let preloaded = ConfigFile::new(raw(r#"{"languages": ["de"]}"#));
        let sources = load_sources(dir.path(), &ProgramOptions::default(), Some(preloaded)).unwrap();
        assert!(sources.profile_given);
        assert!(sources.manifest.is_some());
        assert!(sources.used_profile_path().is_none());
    }

    #[test]
    fn test_autotranslate_setting_resolution() {
        let dir = tempdir().unwrap();
        let sources = profile_only(raw(
            r#"{"languages": ["en", "de", "fr"], "autotranslate": true}"#,
        ));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert_eq!(cfg.autotranslate, Autotranslate::All);
        assert_eq!(
            cfg.autotranslated_languages(),
            vec!["de".to_string(), "fr".to_string()]
        );

        let sources = profile_only(raw(r#"{"autotranslate": false}"#));
        let cfg = resolve(&ProgramOptions::default(), &sources, dir.path());
        assert_eq!(cfg.autotranslate, Autotranslate::Disabled);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let dir = tempdir().unwrap();
        let sources = profile_only(raw(
            r#"{"i18nBaseFile": "custom_file", "languages": ["de", "en"], "apikey": "k", "autotranslate": ["de"]}"#,
        ));
        let opts = ProgramOptions {
            verbose: true,
            ..ProgramOptions::default()
        };
        let a = resolve(&opts, &sources, dir.path());
        let b = resolve(&opts, &sources, dir.path());
        assert_eq!(a, b);
    }

    #[test]
    fn test_load_profile_json_yaml_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("xliffmerge.json"),
            r#"{"xliffmergeOptions": {"srcDir": "test", "languages": ["de", "en"]}}"#,
        )
        .unwrap();
        let mut f = fs::File::create(root.join("xliffmerge.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
xliffmergeOptions:
  srcDir: test
  languages:
    - de
    - en
  autotranslate: true
            "#
        )
        .unwrap();
        let mut f = fs::File::create(root.join("xliffmerge.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
[xliffmergeOptions]
srcDir = "test"
languages = ["de", "en"]
autotranslate = ["de"]
            "#
        )
        .unwrap();

        for name in ["xliffmerge.json", "xliffmerge.yaml", "xliffmerge.toml"] {
            let doc = load_profile(root, name).unwrap();
            let opts = doc.xliffmerge_options.unwrap();
            assert_eq!(opts.src_dir.as_deref(), Some("test"), "{}", name);
            assert_eq!(
                opts.languages,
                Some(vec!["de".to_string(), "en".to_string()]),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_load_profile_errors() {
        let dir = tempdir().unwrap();
        let err = load_profile(dir.path(), "lmaa").unwrap_err();
        assert_eq!(err.to_string(), "could not read profile \"lmaa\"");

        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        let err = load_profile(dir.path(), "broken.json").unwrap_err();
        assert!(matches!(err, LoadError::Invalid { .. }));
        assert!(err.to_string().starts_with("could not parse profile \"broken.json\""));
    }

    #[test]
    fn test_manifest_fallback_sets_used_profile_path() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join(MANIFEST_FILE),
            r#"{"name": "app", "xliffmergeOptions": {"languages": ["de"]}}"#,
        )
        .unwrap();
        let sources = load_sources(root, &ProgramOptions::default(), None).unwrap();
        assert!(sources.profile.is_none());
        assert_eq!(sources.used_profile_path().as_deref(), Some("package.json"));
        let cfg = resolve(&ProgramOptions::default(), &sources, root);
        assert_eq!(cfg.languages, vec!["de".to_string()]);
    }

    #[test]
    fn test_manifest_without_section_is_ignored() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), r#"{"name": "app"}"#).unwrap();
        let sources = load_sources(dir.path(), &ProgramOptions::default(), None).unwrap();
        assert!(sources.manifest.is_none());
        assert!(sources.used_profile_path().is_none());
    }

    #[test]
    fn test_broken_manifest_only_fatal_without_profile() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "{").unwrap();
        assert!(load_sources(dir.path(), &ProgramOptions::default(), None).is_err());
        let preloaded = ConfigFile::new(raw(r#"{"languages": ["de"]}"#));
        let sources = load_sources(dir.path(), &ProgramOptions::default(), Some(preloaded)).unwrap();
        assert!(sources.manifest.is_none());
        assert!(sources.profile.is_some());
    }

    #[test]
    fn test_missing_profile_path_is_fatal() {
        let dir = tempdir().unwrap();
        let opts = ProgramOptions {
            profile_path: Some("lmaa".into()),
            ..ProgramOptions::default()
        };
        let err = load_sources(dir.path(), &opts, None).unwrap_err();
        assert!(matches!(err, LoadError::Unreadable { .. }));
    }

    #[test]
    fn test_first_present() {
        assert_eq!(first_present([None, Some(2), Some(3)]), Some(2));
        assert_eq!(first_present::<i32>([None, None]), None);
    }
}
