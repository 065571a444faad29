//! Tracing/logging setup shared by the service binaries.
//!
//! The domain crates stay pure and never log; this adapter exists for the
//! surrounding service processes to call once at startup.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing with the default `info` filter.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with_filter("info");
}

/// Initialize process-wide tracing with an explicit fallback filter.
///
/// `RUST_LOG` still wins when set. Output is JSON, one object per line,
/// suitable for log shipping.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(true)
        .try_init();
}
