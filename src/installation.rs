// src/installation.rs
//
// The Installation is the whole app state behind a plain callback interface.
// The nannou run loop in main.rs calls on_update once per frame, on_draw once
// per view and forwards keys and mouse events. Nothing in here knows about
// windows, so it can be driven directly from tests.

use nannou::prelude::*;
use std::path::PathBuf;

use crate::animation::{apply_fade, Preset, Sequencer};
use crate::config::{Config, StyleConfig};
use crate::controllers::{ControlPanel, KeyAction, OscCommand};
use crate::models::{Params, SegmentRegistry};
use crate::views::{draw_debug_overlay, draw_grid_lines, draw_segments, GridFit};

pub struct Installation {
    pub registry: SegmentRegistry,
    pub sequencer: Sequencer,
    pub params: Params,
    pub panel: ControlPanel,
    pub debug: bool,

    settings_path: PathBuf,
    style: StyleConfig,
    padding: f32,
    last_update_ms: Option<f32>,
}

impl Installation {
    /// Loads layout and settings from the paths in `config`. Failures are
    /// logged and leave an empty registry or default parameters.
    pub fn on_setup(config: &Config) -> Self {
        let segments_path = config.resolve_segments_path();
        let registry = match SegmentRegistry::load(&segments_path, config.grid.cell_size) {
            Ok(registry) => {
                log::info!(
                    "Loaded {} segments ({}x{}) from {}",
                    registry.len(),
                    registry.cols,
                    registry.rows,
                    segments_path.display()
                );
                registry
            }
            Err(e) => {
                log::error!("Failed to load segments: {}", e);
                SegmentRegistry::empty(config.grid.cell_size)
            }
        };

        let settings_path = config.resolve_settings_path();
        let params = match Params::load(&settings_path) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("Using default parameters: {}", e);
                Params::default()
            }
        };

        Self::new(
            config,
            registry,
            params,
            Sequencer::new(config.animation.clone()),
        )
    }

    /// Applies the satellite preset and starts the first pass at t = 0.
    pub fn new(
        config: &Config,
        registry: SegmentRegistry,
        params: Params,
        sequencer: Sequencer,
    ) -> Self {
        let mut installation = Self {
            registry,
            sequencer,
            params,
            panel: ControlPanel::new(),
            debug: false,
            settings_path: config.resolve_settings_path(),
            style: config.style.clone(),
            padding: config.grid.padding,
            last_update_ms: None,
        };

        installation
            .sequencer
            .apply_preset(&mut installation.registry, Preset::Satellite.name());
        installation
            .sequencer
            .start_animation(&installation.registry, &installation.params, 0.0);
        installation
    }

    /************************** Frame callbacks ********************************** */

    pub fn on_update(&mut self, now_ms: f32, commands: Vec<OscCommand>) {
        for command in commands {
            command.apply(&mut self.params);
        }

        let dt_ms = self.last_update_ms.map_or(0.0, |last| now_ms - last);
        self.last_update_ms = Some(now_ms);

        self.sequencer
            .update(&mut self.registry, &self.params, now_ms);
        apply_fade(&mut self.registry, &self.sequencer, dt_ms, self.params.fade);
    }

    pub fn on_draw(&self, draw: &Draw, window: Rect, fps: f32) {
        let (grid_w, grid_h) = self.registry.grid_size();
        let fit = GridFit::new(window, grid_w, grid_h, self.padding);

        draw_grid_lines(draw, &fit, &self.registry, self.style.grid_line_alpha);
        draw_segments(draw, &fit, &self.registry, self.style.use_segment_colors);

        if self.debug {
            self.panel.draw(draw, &self.params);
            draw_debug_overlay(
                draw,
                window,
                fps,
                self.sequencer.current_preset(),
                self.sequencer.state_label(),
            );
        }
    }

    /************************** Input ********************************** */

    pub fn on_key(&mut self, action: KeyAction, now_ms: f32) {
        match action {
            KeyAction::ToggleAnimation => {
                self.sequencer
                    .toggle(&self.registry, &self.params, now_ms)
            }
            KeyAction::ApplyPreset(preset) => {
                self.sequencer
                    .apply_preset(&mut self.registry, preset.name())
            }
            KeyAction::ToggleDebug => self.debug = !self.debug,
            // the window belongs to the host
            KeyAction::ToggleFullscreen => (),
            KeyAction::SaveSettings => self.save_settings(),
            KeyAction::Nudge(kind, delta) => self.params.nudge(kind, delta),
        }
    }

    /// The panel only takes input while it is shown.
    pub fn on_mouse_pressed(&mut self, point: Point2, window: Rect) {
        if !self.debug {
            return;
        }
        self.panel.anchor_to(window);
        if self.panel.press(point, &mut self.params) {
            self.save_settings();
        }
    }

    pub fn on_mouse_moved(&mut self, point: Point2) {
        if self.debug {
            self.panel.drag(point, &mut self.params);
        }
    }

    pub fn on_mouse_released(&mut self) {
        self.panel.release();
    }

    pub fn on_resized(&mut self, window: Rect) {
        self.panel.anchor_to(window);
    }

    /************************** Settings ********************************** */

    pub fn save_settings(&self) {
        match self.params.save(&self.settings_path) {
            Ok(()) => log::info!("Saved settings to {}", self.settings_path.display()),
            Err(e) => log::error!("Failed to save settings: {}", e),
        }
    }

    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::SequencerState;
    use crate::config::AnimationConfig;
    use crate::models::{Layout, ParamKind, SegmentRecord};

    fn layout(ids: &[&str]) -> Layout {
        Layout {
            segments: ids
                .iter()
                .map(|id| SegmentRecord {
                    id: id.to_string(),
                    w: 1.0,
                    h: 1.0,
                    ..SegmentRecord::default()
                })
                .collect(),
            ..Layout::default()
        }
    }

    fn installation(ids: &[&str], settings: &str) -> Installation {
        let mut config = Config::default();
        config.paths.settings_file = std::env::temp_dir()
            .join(format!("filvis_{}_{}.toml", settings, std::process::id()))
            .to_string_lossy()
            .into_owned();
        let registry = SegmentRegistry::from_layout(&layout(ids), config.grid.cell_size);
        let sequencer = Sequencer::with_seed(AnimationConfig::default(), 3);
        Installation::new(&config, registry, Params::default(), sequencer)
    }

    #[test]
    fn test_setup_starts_satellite_pass() {
        let inst = installation(&["V_TL_01", "X_01", "H_ML_01"], "setup");
        assert_eq!(inst.sequencer.current_preset(), "satellite");
        assert!(inst.sequencer.is_animating());
        assert_eq!(inst.registry.visible_indices().len(), 3);
    }

    #[test]
    fn test_empty_registry_keeps_running() {
        let mut inst = installation(&[], "empty");
        assert_eq!(inst.sequencer.state(), SequencerState::Idle);
        for frame in 0..10 {
            inst.on_update(frame as f32 * 16.0, Vec::new());
        }
        assert!(inst.registry.is_empty());
    }

    #[test]
    fn test_osc_commands_apply_before_stepping() {
        let mut inst = installation(&["A", "B", "C"], "osc");
        inst.on_update(
            16.0,
            vec![
                OscCommand::SetParam {
                    kind: ParamKind::Speed,
                    value: 5.0,
                },
                OscCommand::SetParam {
                    kind: ParamKind::WordmarkProb,
                    value: 0.9,
                },
            ],
        );
        assert_eq!(inst.params.speed, 5.0);
        assert_eq!(inst.params.wordmark_prob, 0.9);
        // 16ms since the first step exceeds the new 5ms interval
        assert_eq!(inst.sequencer.cursor(), 2);
    }

    #[test]
    fn test_fade_targets_only_lit_segment() {
        let mut inst = installation(&["A", "B", "C"], "fade");
        inst.params.overlap = 0.0;
        inst.on_update(0.0, Vec::new());

        let lit = inst.sequencer.entries()[0].segment_index;
        for (index, segment) in inst.registry.segments.iter().enumerate() {
            let expected = if index == lit { 1.0 } else { 0.0 };
            assert_eq!(segment.active_level, expected);
        }
    }

    #[test]
    fn test_key_actions() {
        let mut inst = installation(&["V_TL_01", "X_01", "H_ML_01"], "keys");

        inst.on_key(KeyAction::ApplyPreset(Preset::Wordmark), 0.0);
        assert_eq!(inst.sequencer.current_preset(), "wordmark");
        assert_eq!(inst.registry.visible_indices(), vec![0, 2]);

        inst.on_key(KeyAction::ToggleAnimation, 10.0);
        assert_eq!(
            inst.sequencer.state(),
            SequencerState::Holding { since: 10.0 }
        );
        inst.on_key(KeyAction::ToggleAnimation, 20.0);
        assert!(inst.sequencer.is_animating());
        assert_eq!(inst.sequencer.order().len(), 2);

        inst.on_key(KeyAction::Nudge(ParamKind::Speed, -10.0), 30.0);
        inst.on_key(KeyAction::Nudge(ParamKind::Speed, -10.0), 30.0);
        inst.on_key(KeyAction::Nudge(ParamKind::Speed, -10.0), 30.0);
        assert_eq!(inst.params.speed, 70.0);

        inst.on_key(KeyAction::ToggleDebug, 40.0);
        assert!(inst.debug);
    }

    #[test]
    fn test_save_key_writes_settings() {
        let mut inst = installation(&["A"], "save");
        inst.params.fade = 321.0;
        inst.on_key(KeyAction::SaveSettings, 0.0);

        let loaded = Params::load(inst.settings_path()).unwrap();
        let _ = std::fs::remove_file(inst.settings_path());
        assert_eq!(loaded.fade, 321.0);
    }

    #[test]
    fn test_panel_ignored_while_hidden() {
        let mut inst = installation(&["A"], "panel");
        let window = Rect::from_w_h(1600.0, 1000.0);
        // first slider row, far right
        let point = pt2(-800.0 + 10.0 + 259.0, 500.0 - 10.0 - 10.0);

        inst.on_mouse_pressed(point, window);
        assert_eq!(inst.params, Params::default());

        inst.on_key(KeyAction::ToggleDebug, 0.0);
        inst.on_mouse_pressed(point, window);
        inst.on_mouse_released();
        assert!(inst.params.speed > 990.0);
    }
}
