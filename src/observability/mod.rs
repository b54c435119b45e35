//! Tracing setup helper for hosts and tests.
//!
//! The crate itself only emits `tracing` spans and events; it never installs
//! a subscriber. Hosts that have no subscriber of their own (and the
//! integration tests) can use [`init_tracing`] to get filtered stderr
//! output.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global `tracing` subscriber writing to stderr.
///
/// The filter is taken from `RUST_LOG` when set, falling back to `level`
/// (e.g. `"info"`, `"sheetstack=debug"`). Idempotent: if a global
/// subscriber is already installed, this is a no-op.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
