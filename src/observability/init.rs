//! Tracing initialization and subscriber setup.
//!
//! Installs the tracing subscriber for the session. Output goes to a log
//! file, not the terminal: stdout carries the interactive menu, and mixing
//! span output into it would corrupt the UI.

use crate::infrastructure::paths;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file output.
///
/// Sets up a subscriber pipeline that filters events by the configured trace
/// level and appends them, without ANSI escapes, to the session log file.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Appends to the existing log file, creating it if needed
/// - Silently does nothing if the log file cannot be opened (observability
///   is optional)
/// - Idempotent: safe to call multiple times (only the first call takes
///   effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::log_path())
    else {
        return;
    };

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(log_file)));

    let _ = subscriber.try_init();
}
