use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use tracing::{debug, info};
use crate::core::catalog::UnitCatalog;
use crate::shared::error::{AppError, AppResult};

/// Persisted widget preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub default_from_unit: String,
    pub default_to_unit: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            default_from_unit: "m".to_string(),
            default_to_unit: "cm".to_string(),
        }
    }
}

impl WidgetSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "unitwidget", "unit-widget")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Settings("Failed to determine config directory".to_string()))
    }

    /// Load from the default location, writing defaults on first run
    pub fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path)?;
            info!(path = %path.display(), "Wrote default settings");
            return Ok(settings);
        }

        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| AppError::Settings(format!("Failed to parse {}: {}", path.display(), e)))?;

        debug!(path = %path.display(), from = %settings.default_from_unit, to = %settings.default_to_unit, "Loaded settings");
        Ok(settings)
    }

    pub fn save(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;
        self.save_to(&path)
    }

    /// Written to a sibling temp file, then renamed into place
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        let tmp_path = path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4()));
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Both default units must be selectable
    pub fn validate(&self, catalog: &UnitCatalog) -> AppResult<()> {
        for symbol in [&self.default_from_unit, &self.default_to_unit] {
            if !catalog.contains(symbol) {
                return Err(AppError::Validation(format!("Unknown unit in settings: {}", symbol)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("unit-widget-{}", uuid::Uuid::new_v4()))
            .join("settings.json")
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let path = temp_settings_path();
        let settings = WidgetSettings::load_from(&path).unwrap();
        assert_eq!(settings, WidgetSettings::default());
        assert!(path.exists());
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_settings_path();
        let settings = WidgetSettings {
            default_from_unit: "°C".to_string(),
            default_to_unit: "°F".to_string(),
        };
        settings.save_to(&path).unwrap();
        assert_eq!(WidgetSettings::load_from(&path).unwrap(), settings);
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let path = temp_settings_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"default_to_unit": "km"}"#).unwrap();

        let settings = WidgetSettings::load_from(&path).unwrap();
        assert_eq!(settings.default_from_unit, "m");
        assert_eq!(settings.default_to_unit, "km");
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = temp_settings_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        assert!(matches!(WidgetSettings::load_from(&path), Err(AppError::Settings(_))));
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_validate_against_catalog() {
        let catalog = UnitCatalog::default();
        assert!(WidgetSettings::default().validate(&catalog).is_ok());

        let settings = WidgetSettings {
            default_from_unit: "mi".to_string(),
            ..WidgetSettings::default()
        };
        assert!(matches!(settings.validate(&catalog), Err(AppError::Validation(_))));
    }
}
