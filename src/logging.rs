//! Log setup shared by the binaries

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "info";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the formatting subscriber, honouring `RUST_LOG`
pub fn init() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}
