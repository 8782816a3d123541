//! Logging setup for the quickinsight binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to whoever embeds it. The CLI calls [`init`] once at startup.
//!
//! ```no_run
//! quickinsight::logging::init().expect("Failed to initialize logging");
//! tracing::info!("ready");
//! ```

use anyhow::{Context as _, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Default filter directive when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the env filter - default to INFO, allow override with `RUST_LOG`.
///
/// # Errors
///
/// Returns error if neither `RUST_LOG` nor the fallback directive parses.
pub fn build_filter(fallback: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .context("Failed to create env filter")
}

/// Initializes console logging on stderr so report output on stdout stays clean.
///
/// # Errors
///
/// Returns error if the filter cannot be built or a global subscriber is
/// already installed.
pub fn init() -> Result<()> {
    let env_filter = build_filter(DEFAULT_FILTER)?;

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(true)
        .with_file(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!("Logging initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_filter_parses() {
        let filter = build_filter("debug");
        assert!(filter.is_ok(), "fallback directive should parse");
    }
}
