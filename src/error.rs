// src/error.rs
//
// Error type shared by the loaders and the OSC listener.
// None of these are fatal: the host logs them and keeps running.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("layout file {0} is empty")]
    EmptyLayout(PathBuf),

    #[error("failed to parse settings {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config.toml not found next to the executable or in the working directory")]
    ConfigNotFound,

    #[error("failed to bind OSC receiver on port {port}: {message}")]
    OscBind { port: u16, message: String },
}

pub type Result<T> = std::result::Result<T, FilError>;
