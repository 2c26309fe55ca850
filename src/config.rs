use crate::error::{Result, SettingsError};
use crate::navigation::{Animation, AnimationDescriptor, Edge, TransitionKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "playcover-settings";

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub navigation: NavigationConfig,
    pub library: LibraryConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 640.0,
            height: 480.0,
        }
    }
}

/// Transition between the app list and an app's settings
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransitionSetting {
    /// Settings slide in from the right over the list
    #[default]
    Default,
    /// Switch instantly
    None,
    /// Cross-fade
    Fade,
    /// Settings rise from the bottom
    Rise,
    /// Settings drop from the top
    Drop,
}

impl TransitionSetting {
    pub fn kind(&self) -> TransitionKind {
        match self {
            TransitionSetting::Default => TransitionKind::Default,
            TransitionSetting::None => TransitionKind::None,
            TransitionSetting::Fade => TransitionKind::Custom(
                AnimationDescriptor::opacity().animated(Animation::linear(0.2)),
            ),
            TransitionSetting::Rise => TransitionKind::Custom(
                AnimationDescriptor::move_edge(Edge::Bottom).animated(Animation::ease_in_out(0.3)),
            ),
            TransitionSetting::Drop => TransitionKind::Custom(
                AnimationDescriptor::move_edge(Edge::Top).animated(Animation::ease_in_out(0.3)),
            ),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct NavigationConfig {
    pub transition: TransitionSetting,
}

/// Where installed apps and their settings are read from
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct LibraryConfig {
    /// Library file; defaults to `apps.toml` next to the config file
    pub apps_file: Option<PathBuf>,
    /// Per-app settings directory; defaults to `settings/` next to the config file
    pub settings_dir: Option<PathBuf>,
}

impl Config {
    /// Get the directory holding the config, library and settings files
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("no config directory, using default configuration");
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "configuration loaded");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;
        toml::from_str(&contents).map_err(|e| SettingsError::parse(path, e))
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|e| SettingsError::io(path, e))
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<()> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save_to(&path)?;
                tracing::info!(path = %path.display(), "default configuration written");
            }
        }
        Ok(())
    }

    pub fn apps_file(&self) -> Result<PathBuf> {
        match &self.library.apps_file {
            Some(path) => Ok(path.clone()),
            None => Self::config_dir()
                .map(|dir| dir.join("apps.toml"))
                .ok_or(SettingsError::NoConfigDir),
        }
    }

    pub fn settings_dir(&self) -> Result<PathBuf> {
        match &self.library.settings_dir {
            Some(path) => Ok(path.clone()),
            None => Self::config_dir()
                .map(|dir| dir.join("settings"))
                .ok_or(SettingsError::NoConfigDir),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.mode != "light"
    }
}
