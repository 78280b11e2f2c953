//! Logging setup using **tracing**.
//!
//! Logs go to stderr so generated source printed on stdout stays clean.
//!
//! # Environment Variables
//! - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=enumgen_core=debug`).
//!   Defaults to `warn`, which still shows formatting fallbacks.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initializes a JSON subscriber on stderr.
///
/// Call once at startup. Later calls are ignored.
pub fn init_structured_logging() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initializes a human-readable subscriber on stderr.
///
/// Call once at startup. Later calls are ignored.
pub fn init_pretty_logging() {
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
