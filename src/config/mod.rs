//! Configuration for the relay number client.
//!
//! ## Configuration sources (in precedence order)
//!
//! 1. `.relaynum/config.json` - project-level config
//! 2. `~/.config/relaynum/config.json` - global config
//! 3. Built-in defaults
//!
//! The API token itself never lives in a config file; only the name of
//! the environment variable holding it does.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{RelayError, Result};

const PROJECT_CONFIG_DIR: &str = ".relaynum";
const CONFIG_FILE: &str = "config.json";

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Base URL of the relay API, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Environment variable name containing the API token.
    #[serde(default = "default_api_token_env")]
    pub api_token_env: String,

    /// Timeout for API calls in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_token_env: default_api_token_env(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://relay.firefox.com/api/v1".to_string()
}

fn default_api_token_env() -> String {
    "RELAY_API_TOKEN".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl RelayConfig {
    /// Load configuration, trying project config first, then global,
    /// then built-in defaults.
    pub fn load() -> Result<Self> {
        let project = PathBuf::from(PROJECT_CONFIG_DIR).join(CONFIG_FILE);
        if project.is_file() {
            return Self::load_from_path(&project);
        }

        if let Some(dirs) = directories::ProjectDirs::from("", "", "relaynum") {
            let global = dirs.config_dir().join(CONFIG_FILE);
            if global.is_file() {
                return Self::load_from_path(&global);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            RelayError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            RelayError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
