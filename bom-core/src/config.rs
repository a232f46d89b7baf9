use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// A location the user has chosen as their default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLocation {
    pub geohash: String,
    pub name: String,
}

/// Top-level configuration stored on disk.
///
/// The API needs no credentials; all the CLI persists is which location to
/// show when none is given on the command line.
///
/// Example TOML:
/// ```toml
/// [default_location]
/// geohash = "r3gk01s"
/// name = "Cordeaux Heights"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub default_location: Option<SavedLocation>,
}

impl Config {
    /// Geohash of the saved default location, if one is set.
    pub fn default_geohash(&self) -> Option<&str> {
        self.default_location.as_ref().map(|loc| loc.geohash.as_str())
    }

    pub fn set_default_location(&mut self, geohash: String, name: String) {
        self.default_location = Some(SavedLocation { geohash, name });
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "bom-core", "bom-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
