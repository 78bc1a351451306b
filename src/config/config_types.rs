// src/config/config_types.rs
//
// Config types for the app. Every section and field has a default so a
// partial config.toml still loads.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub segments_file: String,
    pub settings_file: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            segments_file: "segments.json".to_string(),
            settings_file: "settings.toml".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_size: f32, // pixels per grid unit
    pub padding: f32,   // window margin around the fitted grid
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            padding: 50.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OscConfig {
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self { rx_port: 12345 }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub satellite_hold_ms: f32,
    pub preset_hold_ms: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            satellite_hold_ms: 7000.0,
            preset_hold_ms: 3000.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub use_segment_colors: bool,
    pub grid_line_alpha: u8,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            use_segment_colors: false,
            grid_line_alpha: 10,
        }
    }
}
