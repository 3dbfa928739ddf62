//! Tracing setup for the weft binary.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set; keeps the REPL quiet
const DEFAULT_FILTER: &str = "weft=warn";

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
