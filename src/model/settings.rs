// Per-app settings and their TOML persistence

use crate::error::{Result, SettingsError};
use crate::model::resolution::{AspectRatio, ResolutionMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// iOS device models an app can be told it runs on: (identifier, label).
pub const DEVICE_MODELS: [(&str, &str); 3] = [
    ("iPad6,7", "iPad Pro (12.9-inch) (1st gen) | A9X | 4GB"),
    ("iPad8,6", "iPad Pro (12.9-inch) (3rd gen) | A12Z | 4GB"),
    ("iPad13,8", "iPad Pro (12.9-inch) (5th gen) | M1 | 8GB"),
];

pub const REFRESH_RATES: [u32; 2] = [60, 120];

pub const SENSITIVITY_RANGE: std::ops::RangeInclusive<f32> = 0.0..=100.0;

/// Values stored for one app
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SettingsData {
    /// Map keyboard input to touches
    pub keymapping: bool,
    /// Map mouse movement to touches
    pub mouse_mapping: bool,
    /// Mouse sensitivity, 0-100
    pub sensitivity: f32,
    /// Keep the display awake while the app runs
    pub disable_timeout: bool,
    pub ios_device_model: String,
    /// Hz, 60 or 120
    pub refresh_rate: u32,
    pub resolution: ResolutionMode,
    pub aspect_ratio: AspectRatio,
    pub window_width: i32,
    pub window_height: i32,
    /// Hide jailbreak indicators from the app
    pub bypass: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        SettingsData {
            keymapping: true,
            mouse_mapping: true,
            sensitivity: 50.0,
            disable_timeout: false,
            ios_device_model: "iPad8,6".to_string(),
            refresh_rate: 60,
            resolution: ResolutionMode::default(),
            aspect_ratio: AspectRatio::default(),
            window_width: 1920,
            window_height: 1080,
            bypass: false,
        }
    }
}

impl SettingsData {
    pub fn device_label(&self) -> &str {
        DEVICE_MODELS
            .iter()
            .find(|(id, _)| *id == self.ios_device_model)
            .map(|(_, label)| *label)
            .unwrap_or(self.ios_device_model.as_str())
    }
}

/// Settings of one app bound to the file they live in.
#[derive(Clone, Debug)]
pub struct AppSettings {
    pub bundle_identifier: String,
    pub path: PathBuf,
    pub data: SettingsData,
}

impl AppSettings {
    pub fn file_path(dir: &Path, bundle_identifier: &str) -> PathBuf {
        dir.join(format!("{bundle_identifier}.toml"))
    }

    /// Load settings for `bundle_identifier`, falling back to defaults when
    /// no file exists yet.
    pub fn load(dir: &Path, bundle_identifier: &str) -> Result<Self> {
        let path = Self::file_path(dir, bundle_identifier);
        let data = read_data(&path)?;

        Ok(Self {
            bundle_identifier: bundle_identifier.to_string(),
            path,
            data,
        })
    }

    /// Re-read the settings file, picking up changes saved elsewhere.
    pub fn reload(&mut self) -> Result<()> {
        self.data = read_data(&self.path)?;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
        }
        let contents = toml::to_string_pretty(&self.data)?;
        fs::write(&self.path, contents).map_err(|e| SettingsError::io(&self.path, e))?;
        tracing::debug!(bundle_identifier = %self.bundle_identifier, path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Restore every setting to its default and save.
    pub fn reset(&mut self) -> Result<()> {
        self.data = SettingsData::default();
        tracing::info!(bundle_identifier = %self.bundle_identifier, "settings reset");
        self.save()
    }

    /// Restore only the input mapping settings and save.
    pub fn reset_keymapping(&mut self) -> Result<()> {
        let defaults = SettingsData::default();
        self.data.keymapping = defaults.keymapping;
        self.data.mouse_mapping = defaults.mouse_mapping;
        self.data.sensitivity = defaults.sensitivity;
        tracing::info!(bundle_identifier = %self.bundle_identifier, "keymapping reset");
        self.save()
    }
}

fn read_data(path: &Path) -> Result<SettingsData> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(SettingsData::default());
    }
    let contents = fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| SettingsError::parse(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let data = SettingsData::default();
        assert!(data.keymapping);
        assert!(data.mouse_mapping);
        assert_eq!(data.sensitivity, 50.0);
        assert_eq!(data.ios_device_model, "iPad8,6");
        assert_eq!(data.refresh_rate, 60);
        assert_eq!(data.resolution, ResolutionMode::P1080);
        assert_eq!(data.aspect_ratio, AspectRatio::Wide16x9);
        assert_eq!((data.window_width, data.window_height), (1920, 1080));
        assert!(!data.bypass);
        assert_eq!(data.device_label(), "iPad Pro (12.9-inch) (3rd gen) | A12Z | 4GB");
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = AppSettings::load(dir.path(), "com.example.game").expect("load");

        assert_eq!(settings.data, SettingsData::default());
        assert_eq!(settings.path, dir.path().join("com.example.game.toml"));
        assert!(!settings.path.exists());
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("com.example.game.toml"),
            "bypass = true\nresolution = \"4k\"\naspect_ratio = \"16:10\"\n",
        )
        .expect("write");

        let settings = AppSettings::load(dir.path(), "com.example.game").expect("load");
        assert!(settings.data.bypass);
        assert_eq!(settings.data.resolution, ResolutionMode::P4k);
        assert_eq!(settings.data.aspect_ratio, AspectRatio::Wide16x10);
        assert!(settings.data.keymapping);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("broken.toml"), "keymapping = \"maybe\"").expect("write");

        let err = AppSettings::load(dir.path(), "broken").unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_save_then_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("settings");
        let mut settings = AppSettings::load(&nested, "com.example.game").expect("load");
        settings.data.sensitivity = 80.0;
        settings.data.refresh_rate = 120;
        settings.save().expect("save");

        let reloaded = AppSettings::load(&nested, "com.example.game").expect("reload");
        assert_eq!(reloaded.data, settings.data);
    }

    #[test]
    fn test_reload_picks_up_saved_changes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut stale = AppSettings::load(dir.path(), "com.example.game").expect("load");
        let mut edited = stale.clone();
        edited.data.bypass = true;
        edited.save().expect("save");

        assert!(!stale.data.bypass);
        stale.reload().expect("reload");
        assert!(stale.data.bypass);
    }

    #[test]
    fn test_reset_keymapping_keeps_graphics() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut settings = AppSettings::load(dir.path(), "com.example.game").expect("load");
        settings.data.keymapping = false;
        settings.data.sensitivity = 10.0;
        settings.data.refresh_rate = 120;

        settings.reset_keymapping().expect("reset keymapping");
        assert!(settings.data.keymapping);
        assert_eq!(settings.data.sensitivity, 50.0);
        assert_eq!(settings.data.refresh_rate, 120);

        settings.reset().expect("reset");
        assert_eq!(settings.data, SettingsData::default());
        assert!(settings.path.exists());
    }
}
