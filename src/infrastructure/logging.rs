//! Logging system configuration and initialization
//!
//! Console logging via `tracing` with `RUST_LOG`-style filtering. The
//! default level keeps per-row fetch chatter at debug while surfacing
//! batch progress at info.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with the default filter.
pub fn init_logging() -> Result<()> {
    init_logging_with_filter("info")
}

/// Initialize the logging system, honoring `RUST_LOG` when set and
/// falling back to the given directive otherwise.
pub fn init_logging_with_filter(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
