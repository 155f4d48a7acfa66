//! Configuration module for tablr
//!
//! Optional on-disk settings for the two tunables frontends care about:
//! the debounce quiet period and the default page size. Configuration is
//! stored in the user's config directory; a missing file means library
//! defaults.

use crate::pipeline::paginate::DEFAULT_PAGE_SIZE;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const fn default_debounce_ms() -> u64 {
    500
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// View engine configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Quiet period before a filter edit commits, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Page size a new view starts with (one of 10, 20, 25, 50)
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            default_page_size: default_page_size(),
        }
    }
}

impl ViewConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("tablr").join("config.toml"))
    }

    /// Load configuration from the default location, falling back to
    /// defaults when no file exists
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an existing config file cannot be read or
    /// parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = ViewConfig {
            debounce_ms: 250,
            default_page_size: 25,
        };
        config.save_to(&path).unwrap();

        let loaded = ViewConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "debounce_ms = 100\n").unwrap();

        let loaded = ViewConfig::load_from(&path).unwrap();
        assert_eq!(loaded.debounce_ms, 100);
        assert_eq!(loaded.default_page_size, 10);
    }
}
