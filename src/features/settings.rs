//! Demo settings persistence
//!
//! Handles saving and loading the demo window preferences together with the
//! attribute bag the progress bar is built from.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ProgressBarAttributes;

/// Demo application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Use the dark theme
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Styling attributes applied when the progress bar is constructed
    #[serde(default)]
    pub progress_bar: ProgressBarAttributes,
}

fn default_true() -> bool {
    true
}

fn default_window_width() -> f32 {
    520.0
}

fn default_window_height() -> f32 {
    360.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            window_width: default_window_width(),
            window_height: default_window_height(),
            progress_bar: ProgressBarAttributes {
                corner_radius: Some(6.0),
                padding: Some(2),
                ..Default::default()
            },
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("de", "thkoeln", "SimpleProgressBar")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                tracing::debug!("No settings at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)?;
            tracing::info!("Saved settings to {}", path.display());
            Ok(())
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("simple-progressbar-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_save_and_load_file() {
        let path = temp_settings_path("roundtrip/settings.json");
        let mut settings = Settings::default();
        settings.dark_mode = false;
        settings.progress_bar.progress_max = Some(250);
        settings.progress_bar.primary_progress_color = Some(iced::Color::from_rgb8(10, 20, 30));

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"dark_mode": false}"#).unwrap();
        assert!(!settings.dark_mode);
        assert_eq!(settings.window_width, 520.0);
        assert_eq!(settings.window_height, 360.0);
        assert_eq!(settings.progress_bar, ProgressBarAttributes::default());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let path = temp_settings_path("corrupt.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));

        let _ = std::fs::remove_file(&path);
    }
}
