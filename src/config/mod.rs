// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving operator preferences to a `settings.toml` file.
//!
//! The config file is operator-facing (kiosk staff editing a TOML file on
//! the machine), as opposed to the visitor state persisted by
//! [`crate::app::persisted_state`]. A malformed file never prevents the
//! kiosk from starting: parse failures fall back to defaults.

mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Operator preferences loaded from `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Slideshow autoplay interval in milliseconds.
    #[serde(default)]
    pub autoplay_interval_ms: Option<u64>,
    /// Helpdesk endpoint inquiries are posted to.
    #[serde(default)]
    pub inquiry_endpoint: Option<String>,
    /// Campus name shown on the login and home screens.
    #[serde(default)]
    pub campus_name: Option<String>,
    /// Whether to run borderless fullscreen (the normal kiosk deployment).
    #[serde(default)]
    pub fullscreen: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: Some(DEFAULT_AUTOPLAY_INTERVAL_MS),
            inquiry_endpoint: None,
            campus_name: None,
            fullscreen: Some(true),
        }
    }
}

impl Config {
    /// Effective campus name, falling back to the built-in default.
    pub fn campus_name(&self) -> &str {
        self.campus_name.as_deref().unwrap_or(DEFAULT_CAMPUS_NAME)
    }

    /// Effective inquiry endpoint, falling back to the built-in default.
    pub fn inquiry_endpoint(&self) -> &str {
        self.inquiry_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_INQUIRY_ENDPOINT)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(|e| {
        crate::error::Error::Config(format!("failed to serialize settings: {e}"))
    })?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            autoplay_interval_ms: Some(2500),
            inquiry_endpoint: Some("http://helpdesk.plv.edu.ph/api/inquiries".to_string()),
            campus_name: Some("PLV (Maysan Annex)".to_string()),
            fullscreen: Some(false),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_enables_fullscreen_and_autoplay_interval() {
        let config = Config::default();
        assert_eq!(config.fullscreen, Some(true));
        assert_eq!(
            config.autoplay_interval_ms,
            Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
        );
    }

    #[test]
    fn accessors_fall_back_to_built_in_defaults() {
        let config = Config {
            campus_name: None,
            inquiry_endpoint: None,
            ..Config::default()
        };
        assert_eq!(config.campus_name(), DEFAULT_CAMPUS_NAME);
        assert_eq!(config.inquiry_endpoint(), DEFAULT_INQUIRY_ENDPOINT);
    }
}
