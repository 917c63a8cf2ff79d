//! Tracing/logging setup shared by front ends (dispatchers, CLIs, tests).

/// Initialize process-wide tracing with the default filter.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
