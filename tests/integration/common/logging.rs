//! Test logging initialization
//!
//! Uses `std::sync::Once` so initialization only happens once, even if called
//! from multiple tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing subscriber for integration tests.
///
/// Loads `.env.integration` when present (`RELAYER_ID`, `API_KEY`,
/// `HOST_PORT`, `KEYSTORE_PASSWORD`). Verbosity follows `RUST_LOG` and
/// defaults to `info`.
pub fn init_test_logging() {
    INIT.call_once(|| {
        // In CI the variables are set directly and the file is absent
        let _ = dotenvy::from_filename(".env.integration");

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            // Real-time output instead of with_test_writer(), which only shows logs on failure
            .with_target(false)
            .with_ansi(false)
            .try_init();
    });
}
