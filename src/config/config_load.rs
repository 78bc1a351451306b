// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;
use crate::error::{FilError, Result};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathConfig,
    pub window: WindowConfig,
    pub grid: GridConfig,
    pub osc: OscConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        // First try to load from the executable's directory
        if let Some(exe_dir) = exe_dir() {
            let config_path = exe_dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        // Fallback to the current working directory
        let local = Path::new(CONFIG_FILE);
        if local.exists() {
            return Self::load_from(local);
        }
        Err(FilError::ConfigNotFound)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| FilError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| FilError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn resolve_segments_path(&self) -> PathBuf {
        resolve_path(&self.paths.segments_file)
    }

    pub fn resolve_settings_path(&self) -> PathBuf {
        resolve_path(&self.paths.settings_file)
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
}

// Relative paths prefer the executable's directory when the file exists there,
// otherwise they stay relative to the working directory.
fn resolve_path(file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match exe_dir().map(|dir| dir.join(path)) {
        Some(candidate) if candidate.exists() => candidate,
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str("[osc]\nrx_port = 9000\n").unwrap();
        assert_eq!(config.osc.rx_port, 9000);
        assert_eq!(config.window.width, 1600);
        assert_eq!(config.grid.cell_size, 10.0);
        assert_eq!(config.animation.satellite_hold_ms, 7000.0);
        assert_eq!(config.animation.preset_hold_ms, 3000.0);
        assert_eq!(config.paths.segments_file, "segments.json");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.osc.rx_port, 12345);
        assert!(!config.style.use_segment_colors);
    }

    #[test]
    fn test_bad_config_is_error() {
        assert!(Config::from_toml_str("[grid]\ncell_size = \"big\"\n").is_err());
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let abs = std::env::temp_dir().join("filvis_abs_segments.json");
        let resolved = resolve_path(abs.to_str().unwrap());
        assert_eq!(resolved, abs);
    }
}
