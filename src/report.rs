//! Verbose parameter dump.
//!
//! Prints the version banner, a `Used Parameters:` header and one
//! `* name:\tvalue` line per resolved field in a fixed order. Strings are
//! quoted, lists are comma-joined and the API key only ever shows as `****`.

use crate::models::resolved::{Autotranslate, ResolvedConfig};
use crate::output::{print_debug, print_info, OutputSink};

const NONE: &str = "none";

fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

fn quoted_or_none(value: Option<&str>) -> String {
    value.map_or_else(|| NONE.to_string(), quoted)
}

fn autotranslate_value(setting: &Autotranslate) -> String {
    match setting {
        Autotranslate::Disabled => "false".to_string(),
        Autotranslate::All => "true".to_string(),
        Autotranslate::Languages(l) => l.join(","),
    }
}

/// Parameter lines without the `* ` prefix, in report order.
pub fn parameter_lines(cfg: &ResolvedConfig) -> Vec<String> {
    let mut lines = vec![
        format!(
            "usedProfilePath:\t{}",
            quoted_or_none(cfg.used_profile_path.as_deref())
        ),
        format!("defaultLanguage:\t{}", quoted(&cfg.default_language)),
        format!("srcDir:\t{}", quoted(&cfg.src_dir)),
        format!("genDir:\t{}", quoted(&cfg.gen_dir)),
        format!(
            "i18nBaseFile:\t{}",
            quoted_or_none(cfg.i18n_base_file.as_deref())
        ),
        format!("i18nFile:\t{}", quoted(&cfg.i18n_file)),
        format!("i18nFormat:\t{}", cfg.i18n_format),
        format!("languages:\t{}", cfg.languages.join(",")),
    ];
    for out in &cfg.output_files {
        lines.push(format!("outputFile[{}]:\t{}", out.language, out.path));
    }
    lines.push(format!("removeUnusedIds:\t{}", cfg.remove_unused_ids));
    lines.push(format!("supportNgxTranslate:\t{}", cfg.support_ngx_translate));
    if cfg.support_ngx_translate {
        lines.push(format!(
            "ngxTranslateExtractionPattern:\t{}",
            cfg.ngx_translate_extraction_pattern
        ));
    }
    lines.push(format!("useSourceAsTarget:\t{}", cfg.use_source_as_target));
    if cfg.use_source_as_target {
        lines.push(format!("targetPraefix:\t{}", quoted(&cfg.target_praefix)));
        lines.push(format!("targetSuffix:\t{}", quoted(&cfg.target_suffix)));
    }
    lines.push(format!("allowIdChange:\t{}", cfg.allow_id_change));
    lines.push(format!("beautifyOutput:\t{}", cfg.beautify_output));
    lines.push(format!("preserveOrder:\t{}", cfg.preserve_order));
    lines.push(format!(
        "autotranslate:\t{}",
        autotranslate_value(&cfg.autotranslate)
    ));
    if cfg.autotranslate.is_enabled() {
        lines.push(format!(
            "autotranslated languages:\t{}",
            cfg.autotranslated_languages().join(",")
        ));
        lines.push(format!(
            "apikey:\t{}",
            cfg.apikey
                .as_ref()
                .map_or_else(|| "NOT SET".to_string(), |k| k.to_string())
        ));
        lines.push(format!(
            "apikeyfile:\t{}",
            cfg.apikeyfile.as_deref().unwrap_or(NONE)
        ));
    }
    lines
}

/// Print the banner, header and parameter lines.
pub fn report_parameters(sink: &mut dyn OutputSink, cfg: &ResolvedConfig, version: &str) {
    print_info(sink, &format!("xliffmerge version {}", version));
    print_info(sink, "Used Parameters:");
    for line in parameter_lines(cfg) {
        print_debug(sink, &line);
    }
}
