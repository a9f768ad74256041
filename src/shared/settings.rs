use serde::{Deserialize, Serialize};
use ts_rs::TS;
use std::fs;
use std::path::{Path, PathBuf};
use directories::{ProjectDirs, UserDirs};
use tracing::info;

use crate::core::history::export::DEFAULT_EXPORT_FILE_NAME;
use crate::core::unit_converter::{UnitCategory, CONVERSION_TABLE};
use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "settings.ts")]
#[serde(default)]
pub struct ConverterSettings {
    pub preferences: UserPreferences,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "settings.ts")]
#[serde(default)]
pub struct UserPreferences {
    pub default_category: String,
    pub default_from_unit: String,
    pub default_to_unit: String,
    pub default_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "settings.ts")]
#[serde(default)]
pub struct ExportSettings {
    pub file_name: String,
    /// Falls back to the user's download directory when unset
    pub directory: Option<String>,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            preferences: UserPreferences::default(),
            export: ExportSettings::default(),
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_category: "length".to_string(),
            default_from_unit: "meters".to_string(),
            default_to_unit: "kilometers".to_string(),
            default_value: 1.0,
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            directory: None,
        }
    }
}

impl ConverterSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "unit-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Io("Failed to determine config directory".to_string()))
    }

    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::get_settings_path()?)
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::get_settings_path()?)
    }

    /// Load settings, writing the defaults first if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path)?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))?;

        info!("[ConverterSettings] Saved settings to {}", path.display());
        Ok(())
    }

    /// Default selections must be convertible and the export target nameable
    pub fn validate(&self) -> AppResult<()> {
        let prefs = &self.preferences;
        let category: UnitCategory = prefs.default_category.parse()?;

        CONVERSION_TABLE.lookup(category, &prefs.default_from_unit)?;
        CONVERSION_TABLE.lookup(category, &prefs.default_to_unit)?;

        if prefs.default_from_unit == prefs.default_to_unit {
            return Err(AppError::Validation(
                "Default source and target units must differ".to_string(),
            ));
        }
        if !prefs.default_value.is_finite() || prefs.default_value < 0.0 {
            return Err(AppError::Validation(
                "Default value must be a non-negative number".to_string(),
            ));
        }
        if self.export.file_name.trim().is_empty() {
            return Err(AppError::Validation("Export file name cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Full path the CSV export is written to
    pub fn export_path(&self) -> PathBuf {
        let directory = match &self.export.directory {
            Some(dir) => PathBuf::from(dir),
            None => UserDirs::new()
                .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        directory.join(&self.export.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(ConverterSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("settings.json");

        let settings = ConverterSettings::load_from(&path).unwrap();

        assert_eq!(settings, ConverterSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_saved_settings_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = ConverterSettings::default();
        settings.preferences.default_category = "weight".to_string();
        settings.preferences.default_from_unit = "pounds".to_string();
        settings.preferences.default_to_unit = "kilograms".to_string();
        settings.export.directory = Some(dir.path().display().to_string());

        settings.save_to(&path).unwrap();

        assert_eq!(ConverterSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "export": { "file_name": "mine.csv" } }"#).unwrap();

        let settings = ConverterSettings::load_from(&path).unwrap();

        assert_eq!(settings.export.file_name, "mine.csv");
        assert_eq!(settings.preferences, UserPreferences::default());
    }

    #[test]
    fn test_rejects_unit_outside_category() {
        let mut settings = ConverterSettings::default();
        settings.preferences.default_to_unit = "hours".to_string();
        assert!(matches!(settings.validate(), Err(AppError::UnknownUnit { .. })));
    }

    #[test]
    fn test_rejects_equal_default_units() {
        let mut settings = ConverterSettings::default();
        settings.preferences.default_to_unit = "meters".to_string();
        assert!(matches!(settings.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            ConverterSettings::load_from(&path),
            Err(AppError::Serialization(_))
        ));
    }

    #[test]
    fn test_export_path_uses_configured_directory() {
        let mut settings = ConverterSettings::default();
        settings.export.directory = Some("/tmp/exports".to_string());
        assert_eq!(
            settings.export_path(),
            PathBuf::from("/tmp/exports").join("conversion_history.csv")
        );
    }
}
