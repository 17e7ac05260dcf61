//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/arbori/arbori.toml`
//! 3. Local config: `<dir>/.arbori.toml` (usually the working directory)
//! 4. Environment variables: `ARBORI_*` prefix
//!
//! Command-line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::BlankLines;

/// Unified configuration for arbori.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Blank-line handling in outlines (default: skip)
    pub blank_lines: BlankLines,
    /// Print a summary line after creating directories (default: true)
    pub summary: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            blank_lines: BlankLines::Skip,
            summary: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub blank_lines: Option<BlankLines>,
    pub summary: Option<bool>,
}

/// Get the XDG config directory for arbori.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "arbori").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("arbori.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".arbori.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            blank_lines: overlay.blank_lines.unwrap_or(self.blank_lines),
            summary: overlay.summary.unwrap_or(self.summary),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.arbori.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current, Environment::with_prefix("ARBORI"))
    }

    /// Apply `ARBORI_*` environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env.try_parsing(true))
            .build()
            .map_err(config_err)?;
        let raw: RawSettings = config.try_deserialize().map_err(config_err)?;

        Ok(settings.merge_with(&raw))
    }

    /// Render settings as TOML (used by `--show-config`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
