//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr so they never mix with command output. The filter comes
//! from `BUILDVER_LOG`, then `RUST_LOG`, and defaults to warnings only.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BUILDVER_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
