//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing with `RUST_LOG` (falling back to `info`).
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with("info");
}

/// Initialize tracing with an explicit fallback filter directive.
///
/// `RUST_LOG` still wins when set; `default_directives` applies otherwise.
/// Useful for tests that want `debug` output from the store layer only.
pub fn init_with(default_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
