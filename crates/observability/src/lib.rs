//! Process-wide logging setup.
//!
//! JSON lines on stdout, filtered by `RUST_LOG`. Library crates only emit
//! `tracing` events; binaries call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    init_with_default(DEFAULT_DIRECTIVE);
}

/// Like [`init`], with a caller-chosen fallback filter (e.g. `"debug"` or
/// `"spellstudy_state=trace,info"`).
pub fn init_with_default(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(default = directive, "logging initialized");
    }
}
