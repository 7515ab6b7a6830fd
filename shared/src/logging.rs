//! Shared logging utilities for consistent tracing across binaries

use chrono::{DateTime, Utc};
use tracing::info;

/// Initialize the tracing subscriber with the default `info` level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Initialize the tracing subscriber with an explicit base level
///
/// `RUST_LOG` takes precedence over `log_level` when set, so deployed
/// binaries can still be re-filtered without a restart flag.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "scorekeeper={base_level},aggregator={base_level},shared={base_level}"
        ))
    });

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &str, details: &str) {
    info!(
        component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}
