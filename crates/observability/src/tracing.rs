//! Subscriber construction.
//!
//! Filtering follows `RUST_LOG` when set, otherwise the default directive
//! passed to [`env_filter`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "info";
pub const TEST_DIRECTIVE: &str = "warn";

/// `RUST_LOG` if present and valid, else `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// JSON logs + timestamps, configurable via RUST_LOG.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_DIRECTIVE))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(TEST_DIRECTIVE))
        .compact()
        .with_test_writer()
        .try_init();
}
