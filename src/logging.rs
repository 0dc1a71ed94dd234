//! Logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unreadable.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a `tracing` subscriber writing to stderr, filtered by `RUST_LOG`.
///
/// Stdout stays reserved for the data a binary prints. Calling this twice is harmless.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
