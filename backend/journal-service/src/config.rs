/// Configuration management for the journal service
///
/// Loads configuration from environment variables; everything has a default
/// so a zero-setup local install works.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Storage configuration
    pub storage: StorageConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted records
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

// Default values
fn default_data_dir() -> PathBuf {
    PathBuf::from("./journal-data")
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        };

        let storage = StorageConfig {
            data_dir: std::env::var("JOURNAL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
        };

        Ok(Config { app, storage })
    }
}
