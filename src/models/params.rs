// src/models/params.rs
//
// The four live-tunable parameters. Values are in milliseconds except
// wordmark_prob. The ranges are only enforced by the control panel: OSC
// writes replace values outright and the keyboard only floors decrements.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FilError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub speed: f32,
    pub overlap: f32,
    pub fade: f32,
    /// Exposed and persisted but not read by any sequencing logic.
    pub wordmark_prob: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            speed: 100.0,
            overlap: 50.0,
            fade: 0.0,
            wordmark_prob: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Speed,
    Overlap,
    Fade,
    WordmarkProb,
}

impl ParamKind {
    pub const ALL: [ParamKind; 4] = [
        ParamKind::Speed,
        ParamKind::Overlap,
        ParamKind::Fade,
        ParamKind::WordmarkProb,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParamKind::Speed => "Speed (ms)",
            ParamKind::Overlap => "Overlap (ms)",
            ParamKind::Fade => "Fade/Lifetime (ms)",
            ParamKind::WordmarkProb => "Wordmark Prob",
        }
    }

    /// Slider range of the control panel.
    pub fn range(self) -> (f32, f32) {
        match self {
            ParamKind::Speed => (10.0, 1000.0),
            ParamKind::Overlap => (-200.0, 500.0),
            ParamKind::Fade => (0.0, 2000.0),
            ParamKind::WordmarkProb => (0.0, 1.0),
        }
    }

    /// Lowest value a keyboard decrement may reach.
    pub fn nudge_floor(self) -> f32 {
        match self {
            ParamKind::Speed => 10.0,
            _ => 0.0,
        }
    }

    pub fn osc_addr(self) -> &'static str {
        match self {
            ParamKind::Speed => "/speed",
            ParamKind::Overlap => "/overlap",
            ParamKind::Fade => "/fade",
            ParamKind::WordmarkProb => "/prob",
        }
    }

    pub fn from_osc_addr(addr: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.osc_addr() == addr)
    }
}

impl Params {
    pub fn get(&self, kind: ParamKind) -> f32 {
        match kind {
            ParamKind::Speed => self.speed,
            ParamKind::Overlap => self.overlap,
            ParamKind::Fade => self.fade,
            ParamKind::WordmarkProb => self.wordmark_prob,
        }
    }

    /// Unchecked write, last one wins.
    pub fn set(&mut self, kind: ParamKind, value: f32) {
        match kind {
            ParamKind::Speed => self.speed = value,
            ParamKind::Overlap => self.overlap = value,
            ParamKind::Fade => self.fade = value,
            ParamKind::WordmarkProb => self.wordmark_prob = value,
        }
    }

    /// Write clamped to the panel range.
    pub fn set_clamped(&mut self, kind: ParamKind, value: f32) {
        let (min, max) = kind.range();
        self.set(kind, value.clamp(min, max));
    }

    /// Keyboard nudge: increments are unbounded, decrements stop at the floor.
    pub fn nudge(&mut self, kind: ParamKind, delta: f32) {
        let value = self.get(kind) + delta;
        if delta < 0.0 {
            self.set(kind, value.max(kind.nudge_floor()));
        } else {
            self.set(kind, value);
        }
    }

    /// Lifetime of an entry created by one sequencer step.
    pub fn entry_lifetime(&self) -> f32 {
        if self.overlap <= 0.0 {
            self.speed
        } else {
            self.speed + self.overlap
        }
    }

    /************************** Settings file ********************************** */

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FilError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| FilError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| FilError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_with_overlap() {
        let params = Params {
            speed: 100.0,
            overlap: 50.0,
            ..Params::default()
        };
        assert_eq!(params.entry_lifetime(), 150.0);
    }

    #[test]
    fn test_lifetime_without_overlap() {
        let mut params = Params {
            speed: 100.0,
            overlap: 0.0,
            ..Params::default()
        };
        assert_eq!(params.entry_lifetime(), 100.0);
        params.overlap = -80.0;
        assert_eq!(params.entry_lifetime(), 100.0);
    }

    #[test]
    fn test_nudge_floors() {
        let mut params = Params {
            speed: 15.0,
            overlap: 5.0,
            fade: 0.0,
            wordmark_prob: 0.5,
        };
        params.nudge(ParamKind::Speed, -10.0);
        assert_eq!(params.speed, 10.0);
        params.nudge(ParamKind::Overlap, -10.0);
        assert_eq!(params.overlap, 0.0);
        params.nudge(ParamKind::Fade, -10.0);
        assert_eq!(params.fade, 0.0);
        params.nudge(ParamKind::Fade, 10.0);
        assert_eq!(params.fade, 10.0);
    }

    #[test]
    fn test_nudge_up_ignores_panel_range() {
        let mut params = Params {
            speed: 1000.0,
            ..Params::default()
        };
        params.nudge(ParamKind::Speed, 10.0);
        assert_eq!(params.speed, 1010.0);
    }

    #[test]
    fn test_set_is_unchecked_and_set_clamped_is_not() {
        let mut params = Params::default();
        params.set(ParamKind::Overlap, -5000.0);
        assert_eq!(params.overlap, -5000.0);
        params.set_clamped(ParamKind::Overlap, -5000.0);
        assert_eq!(params.overlap, -200.0);
        params.set_clamped(ParamKind::WordmarkProb, 3.0);
        assert_eq!(params.wordmark_prob, 1.0);
    }

    #[test]
    fn test_osc_addresses() {
        assert_eq!(ParamKind::from_osc_addr("/speed"), Some(ParamKind::Speed));
        assert_eq!(ParamKind::from_osc_addr("/prob"), Some(ParamKind::WordmarkProb));
        assert_eq!(ParamKind::from_osc_addr("/wordmark"), None);
    }

    #[test]
    fn test_settings_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "filvis_settings_test_{}.toml",
            std::process::id()
        ));
        let params = Params {
            speed: 250.0,
            overlap: -20.0,
            fade: 400.0,
            wordmark_prob: 0.25,
        };
        params.save(&path).unwrap();
        let loaded = Params::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, params);
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let params: Params = toml::from_str("fade = 120.0\n").unwrap();
        assert_eq!(params.fade, 120.0);
        assert_eq!(params.speed, 100.0);
    }
}
