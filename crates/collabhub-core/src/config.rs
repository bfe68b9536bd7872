// Rust guideline compliant 2026-08-18

//! Policy configuration for CollabHub.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configurable policy inputs.
///
/// The permission table itself is fixed product behavior; only the
/// reserved channel list varies per deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Channel names that can never be renamed or deleted.
    #[serde(default = "default_reserved_channel_names")]
    pub reserved_channel_names: Vec<String>,
}

/// Default reserved channel list.
fn default_reserved_channel_names() -> Vec<String> {
    vec![crate::permissions::GENERAL_CHANNEL.to_string()]
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            reserved_channel_names: default_reserved_channel_names(),
        }
    }
}

impl PolicyConfig {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/collabhub.toml`
    /// 3. Environment variables with `COLLABHUB_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory containing `collabhub.toml`
    ///
    /// # Returns
    ///
    /// A PolicyConfig with values from file and environment applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join("collabhub.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_config: PolicyConfig = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidPolicy(format!("Invalid config file: {}", e)))?;
            config = file_config;
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `COLLABHUB_RESERVED_CHANNELS` - Comma-separated reserved channel names
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("COLLABHUB_RESERVED_CHANNELS") {
            self.reserved_channel_names = val
                .split(',')
                .map(|name| name.trim().to_string())
                .collect();
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any reserved channel name is empty.
    fn validate(&self) -> Result<()> {
        if self
            .reserved_channel_names
            .iter()
            .any(|name| name.is_empty())
        {
            return Err(crate::Error::InvalidPolicy(
                "Reserved channel names cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `<dir>/collabhub.toml`.
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory to write `collabhub.toml` into
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization
    /// fails.
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join("collabhub.toml");
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidPolicy(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
