//! Configuration management for Ailab
//!
//! Two user preferences are persisted: the display mode (light/dark) and the
//! color theme. Both are stored as plain strings; an unrecognized stored
//! value behaves exactly like an unset one and silently falls back to the
//! default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::theme::{ColorTheme, DisplayMode, Theme};

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> = Lazy::new(|| ProjectDirs::from("", "", "ailab"));

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Persisted display mode: "light" or "dark"
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Persisted color theme: "purple", "neon" or "cyberpunk"
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_mode() -> String {
    DisplayMode::default().name().to_string()
}

fn default_theme() -> String {
    ColorTheme::default().name().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self { mode: default_mode(), theme: default_theme() }
    }
}

impl Config {
    /// Load configuration from disk, or defaults when no usable store exists
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(config_path) => Self::load_from(&config_path),
            Err(e) => {
                tracing::warn!("could not locate config directory: {e:#}");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path. A missing, unreadable or
    /// unparseable file behaves like an unset store and yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("could not read config from {path:?}: {e}");
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("could not parse config from {path:?}: {e}");
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            PROJECT_DIRS.as_ref().context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// The effective display mode; unrecognized stored values read as dark
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_name(&self.mode)
    }

    /// The effective color theme; unrecognized stored values read as purple
    pub fn color_theme(&self) -> ColorTheme {
        ColorTheme::from_name(&self.theme)
    }

    /// Set and immediately persist the display mode
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<()> {
        self.mode = mode.name().to_string();
        self.save()
    }

    /// Set and immediately persist the color theme
    pub fn set_color_theme(&mut self, theme: ColorTheme) -> Result<()> {
        self.theme = theme.name().to_string();
        self.save()
    }

    /// Resolve the active palette from the two preferences
    pub fn active_theme(&self) -> Theme {
        Theme::resolve(self.color_theme(), self.display_mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_dark_purple() {
        let config = Config::default();
        assert_eq!(config.display_mode(), DisplayMode::Dark);
        assert_eq!(config.color_theme(), ColorTheme::Purple);
    }

    #[test]
    fn unrecognized_values_fall_back_to_defaults() {
        let config = Config { mode: "sepia".to_string(), theme: "rainbow".to_string() };
        assert_eq!(config.display_mode(), DisplayMode::Dark);
        assert_eq!(config.color_theme(), ColorTheme::Purple);
        // Repeated reads are stable
        assert_eq!(config.display_mode(), config.display_mode());
        assert_eq!(config.color_theme(), config.color_theme());
    }

    #[test]
    fn recognized_values_round_trip() {
        let config = Config { mode: "light".to_string(), theme: "cyberpunk".to_string() };
        assert_eq!(config.display_mode(), DisplayMode::Light);
        assert_eq!(config.color_theme(), ColorTheme::Cyberpunk);
    }

    #[test]
    fn config_serializes_to_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("dark"));
        assert!(json.contains("purple"));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{"mode":"light"}"#).unwrap();
        assert_eq!(config.display_mode(), DisplayMode::Light);
        assert_eq!(config.color_theme(), ColorTheme::Purple);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config { mode: "light".to_string(), theme: "neon".to_string() };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded.display_mode(), DisplayMode::Light);
        assert_eq!(loaded.color_theme(), ColorTheme::Neon);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("nope.json"));
        assert_eq!(loaded.display_mode(), DisplayMode::Dark);
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not valid json").unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded.display_mode(), DisplayMode::Dark);
        assert_eq!(loaded.color_theme(), ColorTheme::Purple);
    }

    #[test]
    fn active_theme_tracks_preferences() {
        let config = Config { mode: "dark".to_string(), theme: "neon".to_string() };
        assert_eq!(config.active_theme().name, "Neon Dark");
    }
}
