use crate::model::settings::AppSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bundle metadata shown on the Info tab.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AppInfo {
    pub display_name: String,
    pub bundle_name: String,
    pub bundle_identifier: String,
    pub bundle_version: String,
    pub executable_name: String,
    pub minimum_os_version: String,
    pub url: String,
    pub is_game: bool,
}

impl AppInfo {
    /// Name shown in lists and titles.
    pub fn name(&self) -> &str {
        if !self.display_name.is_empty() {
            &self.display_name
        } else if !self.bundle_name.is_empty() {
            &self.bundle_name
        } else {
            &self.bundle_identifier
        }
    }

    /// (label, value) rows for the Info tab.
    pub fn rows(&self) -> [(&'static str, String); 8] {
        [
            ("Display name:", self.display_name.clone()),
            ("Bundle name:", self.bundle_name.clone()),
            ("Bundle identifier:", self.bundle_identifier.clone()),
            ("Bundle version:", self.bundle_version.clone()),
            ("Executable name:", self.executable_name.clone()),
            ("Minimum OS version:", self.minimum_os_version.clone()),
            ("URL:", self.url.clone()),
            ("Is Game:", if self.is_game { "Yes" } else { "No" }.to_string()),
        ]
    }
}

/// An installed app together with its settings.
#[derive(Clone, Debug)]
pub struct PlayApp {
    pub info: AppInfo,
    pub icon: Option<PathBuf>,
    pub settings: AppSettings,
}

impl PlayApp {
    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn icon_uri(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|path| format!("file://{}", path.display()))
    }
}
