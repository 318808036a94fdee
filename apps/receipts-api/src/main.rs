//! # Receipts API Server
//!
//! ## Startup Sequence
//! 1. Load the first env file found, then configuration from the environment
//! 2. Initialize tracing (stdout or log file)
//! 3. Create the in-memory store
//! 4. Serve HTTP until Ctrl+C / SIGTERM

use std::sync::Arc;

use receipts_api::config::{load_env_files, ENV_FILE_PATHS};
use receipts_api::{server, telemetry, ApiConfig};
use receipts_store::ReceiptStore;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_files = load_env_files(&ENV_FILE_PATHS);
    let config = ApiConfig::load()?;
    telemetry::init_tracing(&config)?;
    env_files.log();

    info!(
        port = config.port,
        log_file = ?config.log_file_path,
        "Configuration loaded"
    );

    let store = Arc::new(ReceiptStore::default());

    server::run_server(config, store).await
}
