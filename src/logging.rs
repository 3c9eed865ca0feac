// src/logging.rs
//! Subscriber setup for binaries; the library itself only emits `tracing` events

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a fmt subscriber honouring `RUST_LOG` (default `info`).
/// Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}
