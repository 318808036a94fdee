//! Tracing subscriber setup.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages (includes per-rule point breakdowns)
//! - `RUST_LOG=receipts_store=trace` - Trace for the store crate only
//! - Default: [`DEFAULT_LOG_FILTER`]

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::{ApiConfig, DEFAULT_LOG_FILTER};

/// Installs the global tracing subscriber.
///
/// Logs go to stdout, or are appended to `log_file_path` when it is set.
pub fn init_tracing(config: &ApiConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match &config.log_file_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;

            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {}", e))
}
