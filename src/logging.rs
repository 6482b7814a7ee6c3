// src/logging.rs
// =============================================================================
// Sets up tracing.
//
// RUST_LOG takes precedence when set; otherwise the level from --log-level
// (or EXAMLIST_LOG_LEVEL) applies to this crate. Logs go to stderr so that
// stdout only ever carries the JSON output.
// =============================================================================

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

// Unknown levels fall back to warn
fn default_directive(log_level: &str) -> String {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "error" => "error",
        _ => "warn",
    };
    format!("examlist_fetch={}", level)
}
