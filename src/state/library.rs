// Installed apps, read from the library file

use crate::error::{Result, SettingsError};
use crate::model::{AppInfo, AppSettings, PlayApp, SettingsData};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Default)]
struct LibraryFile {
    #[serde(default, rename = "app")]
    apps: Vec<LibraryEntry>,
}

#[derive(Serialize, Deserialize, Debug)]
struct LibraryEntry {
    #[serde(flatten)]
    info: AppInfo,
    icon: Option<PathBuf>,
}

pub struct AppLibrary {
    pub apps: Vec<PlayApp>,
}

impl AppLibrary {
    pub fn empty() -> Self {
        Self { apps: Vec::new() }
    }

    /// Read `apps_file` and attach each app's settings from `settings_dir`.
    ///
    /// A missing library file is an empty library. A settings file that
    /// cannot be read is replaced by defaults so one broken app does not
    /// hide the others.
    pub fn load(apps_file: &Path, settings_dir: &Path) -> Result<Self> {
        if !apps_file.exists() {
            tracing::info!(path = %apps_file.display(), "no app library file");
            return Ok(Self::empty());
        }

        let contents =
            fs::read_to_string(apps_file).map_err(|e| SettingsError::io(apps_file, e))?;
        let file: LibraryFile =
            toml::from_str(&contents).map_err(|e| SettingsError::parse(apps_file, e))?;

        let apps: Vec<PlayApp> = file
            .apps
            .into_iter()
            .map(|entry| {
                let bundle_identifier = entry.info.bundle_identifier.clone();
                let settings = AppSettings::load(settings_dir, &bundle_identifier)
                    .unwrap_or_else(|e| {
                        tracing::warn!(%bundle_identifier, error = %e, "using default settings");
                        AppSettings {
                            path: AppSettings::file_path(settings_dir, &bundle_identifier),
                            bundle_identifier,
                            data: SettingsData::default(),
                        }
                    });
                PlayApp {
                    info: entry.info,
                    icon: entry.icon,
                    settings,
                }
            })
            .collect();

        tracing::info!(count = apps.len(), "app library loaded");
        Ok(Self { apps })
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
