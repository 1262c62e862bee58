//! Logging setup
//!
//! The library only emits `tracing` events. Applications that want them on
//! stderr can install the stock subscriber here.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`
///
/// Falls back to `default_directive` (e.g. "info" or "geolocate=debug") when
/// `RUST_LOG` is unset or invalid. Errors if a global subscriber is already set.
pub fn init(default_directive: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}
