use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing configuration, library and settings files.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine config directory")]
    NoConfigDir,
}

impl SettingsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = SettingsError> = std::result::Result<T, E>;
