//! Logging initialization.
//!
//! The crate logs through the `tracing` facade; hosts that want output call
//! [`init`] once at startup. Filtering follows the standard `RUST_LOG`
//! environment variable.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber with env-filter support.
///
/// Fails if a global subscriber is already set; embedders that install
/// their own subscriber should simply not call this.
pub fn init() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}
