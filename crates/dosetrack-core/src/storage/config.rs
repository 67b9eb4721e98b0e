//! TOML-based program configuration.
//!
//! Stores the few knobs the core honors:
//! - Program length (the 180-day default journey)
//! - An optional override for the snapshot file location
//!
//! Configuration is stored at `~/.config/dosetrack/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Program-shape configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSection {
    #[serde(default = "default_length_days")]
    pub length_days: u32,
}

/// Storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSection {
    /// Override for the snapshot file path. Defaults to
    /// `journal.json` inside the data directory.
    #[serde(default)]
    pub snapshot_file: Option<PathBuf>,
}

/// Program configuration.
///
/// Serialized to/from TOML at `~/.config/dosetrack/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramConfig {
    #[serde(default)]
    pub program: ProgramSection,
    #[serde(default)]
    pub storage: StorageSection,
}

fn default_length_days() -> u32 {
    180
}

impl Default for ProgramSection {
    fn default() -> Self {
        Self {
            length_days: default_length_days(),
        }
    }
}

impl ProgramConfig {
    /// Path of the configuration file inside the data directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/dosetrack"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })
    }
}
