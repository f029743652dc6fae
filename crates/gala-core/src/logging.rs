//! Process-wide `tracing` subscriber setup.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global fmt subscriber once per process.
///
/// The filter defaults to `gala=info` and can be overridden with the
/// `GALA_LOG` environment variable. Safe to call repeatedly; tests share
/// a process, so only the first call installs anything.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("GALA_LOG")
            .unwrap_or_else(|_| EnvFilter::new("gala=info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    });
}
