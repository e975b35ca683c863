//! Logging setup.
//!
//! The library only emits `tracing` events; hosts decide where they go.
//! `RUST_LOG` controls the filter (default: `info`), e.g.
//! `RUST_LOG=composite_core=debug`.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a formatted subscriber reading its filter from `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
