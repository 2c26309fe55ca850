mod app;
pub mod resolution;
pub mod settings;

pub use app::{AppInfo, PlayApp};
pub use settings::{AppSettings, SettingsData};
