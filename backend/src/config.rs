//! # Configuration
//!
//! Runtime settings for the card demo.
//!
//! Resolution order:
//! 1. built-in defaults
//! 2. `config.yaml` in the data directory, when present
//! 3. `ASPIRE_CARDS_DATA_DIR` overrides the data directory itself
//!
//! ## YAML Format
//!
//! ```yaml
//! transactions_per_card: 4
//! transaction_days_back: 120
//! feed_limit: 4
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DATA_DIR_ENV: &str = "ASPIRE_CARDS_DATA_DIR";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the `cards` and `transactions` files live. Never read from the
    /// YAML file itself since the file sits inside this directory.
    #[serde(skip)]
    pub data_directory: PathBuf,
    /// Random transactions generated for every newly created card
    pub transactions_per_card: usize,
    /// Window, in days ending today, that random transaction dates fall in
    pub transaction_days_back: u32,
    /// Transactions shown in the feed for the selected card
    pub feed_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            transactions_per_card: 4,
            transaction_days_back: 120,
            feed_limit: 4,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from the environment and the data directory
    pub fn load() -> Result<Self, ConfigError> {
        let data_directory = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_directory);
        Self::load_from_directory(data_directory)
    }

    /// Load `config.yaml` from `data_directory` if it exists, defaults otherwise
    pub fn load_from_directory<P: AsRef<Path>>(data_directory: P) -> Result<Self, ConfigError> {
        let data_directory = data_directory.as_ref().to_path_buf();
        let config_path = data_directory.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
                path: config_path.clone(),
                source,
            })?;
            let config: AppConfig =
                serde_yaml::from_str(&yaml_content).map_err(|source| ConfigError::Parse {
                    path: config_path.clone(),
                    source,
                })?;
            debug!("Loaded config from {:?}", config_path);
            config
        } else {
            debug!("No config file at {:?}, using defaults", config_path);
            AppConfig::default()
        };

        config.data_directory = data_directory;
        config.validate()?;
        info!("Using data directory {}", config.data_directory.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.transaction_days_back == 0 {
            return Err(ConfigError::InvalidValue(
                "transaction_days_back",
                "must be at least 1".to_string(),
            ));
        }
        if self.feed_limit == 0 {
            return Err(ConfigError::InvalidValue(
                "feed_limit",
                "must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_data_directory() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("Aspire Cards"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_from_directory(temp_dir.path()).unwrap();
        assert_eq!(config.data_directory, temp_dir.path());
        assert_eq!(config.transactions_per_card, 4);
        assert_eq!(config.transaction_days_back, 120);
        assert_eq!(config.feed_limit, 4);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "transaction_days_back: 30\n").unwrap();

        let config = AppConfig::load_from_directory(temp_dir.path()).unwrap();
        assert_eq!(config.transaction_days_back, 30);
        assert_eq!(config.transactions_per_card, 4);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "feed_limit: [oops").unwrap();

        let result = AppConfig::load_from_directory(temp_dir.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "transaction_days_back: 0\n").unwrap();

        let result = AppConfig::load_from_directory(temp_dir.path());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue("transaction_days_back", _))
        ));
    }
}
