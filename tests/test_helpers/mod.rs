//! Shared setup for integration tests.

use tracing_subscriber::{EnvFilter, fmt};

/// Routes crate logs to the test harness output.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("boardsync=debug".parse().expect("valid directive")),
        )
        .with_test_writer()
        .try_init();
}
