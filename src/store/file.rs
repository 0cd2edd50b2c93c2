//! Preferences file I/O

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::store as store_config;
use crate::error::{ConsoleError, Result};

use super::models::LocalConfig;

/// Handles reading and writing the preferences file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Create a store at $CONSOLECTL_CONFIG or ~/.consolectl/prefs.json
    pub fn new() -> Self {
        let config_path = match std::env::var(store_config::ENV_VAR) {
            Ok(path) if !path.is_empty() => {
                debug!(
                    "Using preferences file from {}: {}",
                    store_config::ENV_VAR,
                    path
                );
                PathBuf::from(path)
            }
            _ => Self::default_config_path(),
        };
        Self { config_path }
    }

    /// Create a store with a custom path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Path of the preferences file
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Whether the preferences file exists on disk
    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(store_config::DIR_NAME)
            .join(store_config::FILE_NAME)
    }

    /// Load preferences from disk.
    /// Returns Default if the file doesn't exist, errors on corrupt JSON.
    pub fn load(&self) -> Result<LocalConfig> {
        if !self.exists() {
            debug!(
                "No preferences file at {}, using defaults",
                self.config_path.display()
            );
            return Ok(LocalConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            ConsoleError::Config(format!(
                "Failed to read preferences {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ConsoleError::Config(format!(
                "Failed to parse preferences {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }

    /// Save preferences to disk.
    /// Uses atomic write (tmp file + rename) and creates parent dir if needed.
    pub fn save(&self, config: &LocalConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConsoleError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| ConsoleError::Config(format!("Failed to serialize preferences: {}", e)))?;

        let tmp_path = self.config_path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            ConsoleError::Config(format!(
                "Failed to write temp preferences file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        // Holds the API key and session cookies
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                ConsoleError::Config(format!("Failed to set permissions on preferences: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.config_path).map_err(|e| {
            ConsoleError::Config(format!(
                "Failed to rename temp preferences file to {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        debug!("Saved preferences to {}", self.config_path.display());
        Ok(())
    }

    /// Load, apply `f`, and save in one step
    pub fn update<F>(&self, f: F) -> Result<LocalConfig>
    where
        F: FnOnce(&mut LocalConfig),
    {
        let mut config = self.load()?;
        f(&mut config);
        self.save(&config)?;
        Ok(config)
    }
}
