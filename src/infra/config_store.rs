// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and restores the PipelineConfig as pretty-printed JSON.
//
// File layout:
//   <dir>/flashcards.json
//
// Missing fields in the file fall back to their defaults, so a
// file may override only the values it cares about. Loaded
// configs are validated before they are handed out.

use std::{fs, path::{Path, PathBuf}};

use crate::application::pipeline_config::PipelineConfig;
use crate::domain::error::ConfigError;

/// Default config file name inside a config directory
pub const CONFIG_FILE_NAME: &str = "flashcards.json";

pub struct ConfigStore {
    /// Full path to the JSON file
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `<dir>/flashcards.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `cfg` as pretty JSON, creating parent directories as needed.
    pub fn save(&self, cfg: &PipelineConfig) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write { path: self.path.clone(), source };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let json = serde_json::to_string_pretty(cfg).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(write_err)?;

        tracing::debug!("Saved pipeline config to '{}'", self.path.display());
        Ok(())
    }

    /// Read, parse and validate the config file.
    pub fn load(&self) -> Result<PipelineConfig, ConfigError> {
        let json = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        let cfg: PipelineConfig = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        cfg.validate()?;
        tracing::debug!("Loaded pipeline config from '{}'", self.path.display());
        Ok(cfg)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(&self) -> Result<PipelineConfig, ConfigError> {
        if self.path.exists() {
            self.load()
        } else {
            tracing::info!("No config at '{}', using defaults", self.path.display());
            Ok(PipelineConfig::default())
        }
    }
}
