//! Diagnostic logging for the binary.
//!
//! Library code emits `tracing` events; the binary installs a human-readable
//! subscriber on stderr so stdout stays reserved for the parameter dump.
//! The filter comes from `XLIFFMERGE_LOG`, then `RUST_LOG`, else `warn`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "XLIFFMERGE_LOG";

const DEFAULT_DIRECTIVE: &str = "xliffmerge=warn";

/// Build the filter from the environment.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .try_init();
}
