//! Logging setup for the command line binary
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! left to the binary.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber honouring `RUST_LOG`.
///
/// Without `RUST_LOG` the level is `warn`, or `debug` for `--verbose`.
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
