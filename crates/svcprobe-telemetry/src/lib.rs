//! Diagnostic logging for the service probes
//!
//! Installs a `tracing` subscriber that writes to stderr, leaving stdout to
//! the probe report.

use svcprobe_config::TelemetryConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when the configured directive does not parse
const FALLBACK_FILTER: &str = "info";

/// Initialize logging from configuration
///
/// `override_filter` (from the command line) takes precedence over
/// `config.log_filter`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &TelemetryConfig, override_filter: Option<&str>) -> anyhow::Result<()> {
    let directive = override_filter.unwrap_or(&config.log_filter);
    let filter = build_filter(directive);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::debug!(filter = directive, "logging initialized");

    Ok(())
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}
