//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! Before that, the first readable file in [`ENV_FILE_PATHS`] is loaded into
//! the environment. Variables already set in the process are never
//! overridden by a file.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Env files tried in order at startup. Only the first that loads is used.
pub const ENV_FILE_PATHS: [&str; 3] = [".env", "/opt/receipts.dev.env", "/opt/receipts.prod.env"];

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,receipts=debug,tower_http=info";

/// Receipts API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Append logs to this file instead of stdout (optional)
    pub log_file_path: Option<PathBuf>,

    /// Tracing filter directives
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_file_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),

            port: match lookup("PORT").filter(|p| !p.trim().is_empty()) {
                Some(port) => port
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
                None => defaults.port,
            },

            log_file_path: lookup("LOG_FILE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),

            log_filter: lookup("RUST_LOG")
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        };

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Outcome of [`load_env_files`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnvFiles {
    /// The file that was loaded, if any.
    pub loaded: Option<PathBuf>,

    /// Files tried before it that could not be loaded.
    pub skipped: Vec<PathBuf>,
}

impl EnvFiles {
    /// Logs the outcome. Called once tracing is installed, since loading
    /// happens before the log settings are known.
    pub fn log(&self) {
        for path in &self.skipped {
            debug!(path = %path.display(), "Env file not loaded");
        }
        match &self.loaded {
            Some(path) => info!(path = %path.display(), "Env file loaded"),
            None => debug!("No env file loaded"),
        }
    }
}

/// Loads the first env file in `paths` that can be read and parsed.
pub fn load_env_files<P: AsRef<Path>>(paths: &[P]) -> EnvFiles {
    let mut files = EnvFiles::default();

    for path in paths {
        let path = path.as_ref();
        match dotenvy::from_path(path) {
            Ok(()) => {
                files.loaded = Some(path.to_path_buf());
                break;
            }
            Err(_) => files.skipped.push(path.to_path_buf()),
        }
    }

    files
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
