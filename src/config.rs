use crate::theme::{ThemeName, ThemeOverrides};
use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub search: SearchConfig,
    pub startup: StartupConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub theme: ThemeName,
    /// Wait for Enter after each menu action.
    pub pause_after_action: bool,
    /// Per-element colour replacements applied on top of `theme`.
    pub overrides: ThemeOverrides,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            theme: ThemeName::Dark,
            pause_after_action: true,
            overrides: ThemeOverrides::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub case_sensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StartupConfig {
    pub load_sample_data: bool,
}

impl Config {
    pub fn create_default(path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))
    }

    /// Loads the config at `path`, writing a default file first if none
    /// exists. A default that cannot be written is not fatal.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Err(e) = Self::create_default(path) {
                warn!("Could not write default config to {:?}: {}", path, e);
            }
            return Ok(Self::default());
        }

        Self::load(path)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "logsift", "logsift")
        .ok_or_else(|| anyhow!("Could not determine config directory"))?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
