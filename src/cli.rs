//! CLI argument parsing via `clap`.

use crate::models::options::ProgramOptions;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "xliffmerge",
    version,
    about = "Merge translation files (xlf, xlf2, xmb) for Angular i18n",
    long_about = "xliffmerge — merges the i18n master file into per-language translation files.\n\nConfiguration precedence: CLI > profile > package.json (xliffmergeOptions) > defaults.",
    after_help = "Examples:\n  xliffmerge --profile xliffmerge.json de en\n  xliffmerge -v de fr\n  xliffmerge -q -p config/xliffmerge.yaml"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(
        short = 'p',
        long = "profile",
        value_name = "CONFIGFILE",
        help = "Profile (json, yaml or toml) with an xliffmergeOptions section (default: package.json)"
    )]
    pub profile: Option<String>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Show version and used parameters")]
    pub verbose: bool,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Only errors and warnings are shown")]
    pub quiet: bool,
    #[arg(value_name = "LANGUAGE", help = "Languages to generate (overrides the profile list)")]
    pub languages: Vec<String>,
}

impl Cli {
    /// Convert parsed flags into engine options. An empty language list means
    /// "not given" so the profile list stays in effect.
    pub fn into_program_options(self) -> ProgramOptions {
        ProgramOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            profile_path: self.profile,
            languages: if self.languages.is_empty() {
                None
            } else {
                Some(self.languages)
            },
        }
    }
}
