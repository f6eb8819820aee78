//! Tracing/logging setup shared by binaries and test suites.

/// Initialize process-wide JSON logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize compact logging routed through the test harness's capture.
///
/// Safe to call from every test.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Subscriber construction (filters, formatters).
pub mod tracing;
