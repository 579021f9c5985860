//! Diagnostic output setup.
//!
//! Operator-facing reports are printed directly; everything else (parse
//! failures, skipped writes, per-file detail) goes through `tracing` to
//! stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the diagnostic filter
pub const LOG_ENV: &str = "S4A_DICT_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
