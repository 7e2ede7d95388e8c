// src/log.rs
use tracing_subscriber::EnvFilter;

use crate::config::consts::DEFAULT_LOG_FILTER;

/// Install the stderr subscriber. `RUST_LOG` overrides the default filter.
/// Stdout stays free for record output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
