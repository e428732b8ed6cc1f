use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::GridParams;

/// Errors reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returns the path to the settings file: `~/.config/shape-grid/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shape-grid");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Panels
    pub show_settings: bool,

    // Display
    pub zoom: f32,

    // Grid
    pub params: GridParams,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_settings: true,
            zoom: 1.0,
            params: GridParams::default(),
        }
    }
}

impl AppSettings {
    /// Read settings from `path`
    pub fn try_load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    /// Write settings to `path` as pretty JSON, creating parent directories
    pub fn try_save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::try_load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file found, using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk, logging any failure.
    pub fn save(&self) {
        let path = settings_path();
        match self.try_save_to(&path) {
            Ok(()) => log::info!("Saved settings to {}", path.display()),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationType;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("shape-grid-test-{}-{}", std::process::id(), name));
        path.push("settings.json");
        path
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch_path("roundtrip");
        let settings = AppSettings {
            show_settings: false,
            zoom: 1.5,
            params: GridParams {
                grid_width: 20,
                seed: Some(99),
                animation_type: AnimationType::Combined,
                shape_color: [1, 2, 3],
                ..GridParams::default()
            },
        };

        settings.try_save_to(&path).unwrap();
        let loaded = AppSettings::try_load_from(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"params": {"grid_width": 7}}"#).unwrap();
        assert_eq!(settings.params.grid_width, 7);
        assert_eq!(settings.params.grid_height, GridParams::default().grid_height);
        assert!(settings.show_settings);
        assert_eq!(settings.zoom, 1.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = scratch_path("missing");
        let err = AppSettings::try_load_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_bad_json_is_json_error() {
        let path = scratch_path("bad-json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppSettings::try_load_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_path_under_app_directory() {
        let path = settings_path();
        assert!(path.ends_with("shape-grid/settings.json"));
    }
}
