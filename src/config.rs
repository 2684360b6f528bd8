//! Configuration module for dashr
//!
//! Manages the few knobs the interactive adapters need.
//! Configuration is stored in the user's config directory.

use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
#[derive(Default)]
pub struct DashrConfig {
    /// Suppress informational notifications by default
    #[serde(default)]
    pub quiet: bool,

    /// Answer pre-selected by the interactive confirmation prompt
    #[serde(default)]
    pub confirm_default: bool,
}

impl DashrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        let dashr_config_dir = config_dir.join("dashr");
        Ok(dashr_config_dir.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_conservative() {
        let config = DashrConfig::default();
        assert!(!config.quiet);
        assert!(!config.confirm_default);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DashrConfig { quiet: true, confirm_default: true };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: DashrConfig = toml::from_str(&text).unwrap();
        assert!(parsed.quiet);
        assert!(parsed.confirm_default);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: DashrConfig = toml::from_str("quiet = true").unwrap();
        assert!(parsed.quiet);
        assert!(!parsed.confirm_default);
    }
}
