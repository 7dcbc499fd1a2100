//! Test logging
//!
//! Routes `tracing` output through the test harness so it only shows up for
//! failing tests. Filter with `RUST_LOG`, e.g. `RUST_LOG=federation_core=debug`.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber once per test binary
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed by another test
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
