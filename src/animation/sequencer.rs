// src/animation/sequencer.rs
//
// The preset/animation sequencer.
//
// Idle -> Animating: start_animation (keyboard, or the end of a hold)
// Animating -> Holding: step_animation runs past the end of the order
// Holding -> Animating: hold time for the current preset has elapsed, the
//                       next preset in the cycle is applied and restarted
// Animating -> Holding: toggle while animating (keyboard), same hold as a
//                       finished pass
//
// All times are milliseconds on the frame clock.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::preset::{apply_preset, next_preset_name, Preset};
use crate::config::AnimationConfig;
use crate::models::{Params, SegmentRegistry};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequencerState {
    Idle,
    Animating,
    Holding { since: f32 },
}

/// A segment lit by one step, alive until `lifetime` has passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveEntry {
    pub segment_index: usize,
    pub start_time: f32,
    pub lifetime: f32,
}

impl ActiveEntry {
    pub fn is_expired(&self, now: f32) -> bool {
        now - self.start_time > self.lifetime
    }
}

pub struct Sequencer {
    state: SequencerState,
    order: Vec<usize>, // shuffled indices of visible segments
    cursor: usize,
    last_step_time: f32,
    current_preset: String,
    entries: Vec<ActiveEntry>,
    hold: AnimationConfig,
    rng: StdRng,
}

impl Sequencer {
    pub fn new(hold: AnimationConfig) -> Self {
        Self::with_rng(hold, StdRng::from_entropy())
    }

    /// Deterministic shuffles, for tests and reproducible runs.
    pub fn with_seed(hold: AnimationConfig, seed: u64) -> Self {
        Self::with_rng(hold, StdRng::seed_from_u64(seed))
    }

    fn with_rng(hold: AnimationConfig, rng: StdRng) -> Self {
        Self {
            state: SequencerState::Idle,
            order: Vec::new(),
            cursor: 0,
            last_step_time: 0.0,
            current_preset: Preset::Satellite.name().to_string(),
            entries: Vec::new(),
            hold,
            rng,
        }
    }

    /************************** Accessors ********************************** */

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state == SequencerState::Animating
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.state, SequencerState::Holding { .. })
    }

    pub fn state_label(&self) -> &'static str {
        match self.state {
            SequencerState::Idle => "IDLE",
            SequencerState::Animating => "ANIM",
            SequencerState::Holding { .. } => "HOLD",
        }
    }

    pub fn current_preset(&self) -> &str {
        &self.current_preset
    }

    pub fn entries(&self) -> &[ActiveEntry] {
        &self.entries
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /************************** Presets ********************************** */

    /// Sets visibility for `name` and records it as current, even when the
    /// name is unknown. Does not restart the animation.
    pub fn apply_preset(&mut self, registry: &mut SegmentRegistry, name: &str) {
        if Preset::from_name(name).is_none() {
            log::warn!("Unknown preset '{}', visibility unchanged", name);
        }
        apply_preset(&mut registry.segments, name);
        self.current_preset = name.to_string();
    }

    pub fn hold_duration(&self) -> f32 {
        if self.current_preset == Preset::Satellite.name() {
            self.hold.satellite_hold_ms
        } else {
            self.hold.preset_hold_ms
        }
    }

    /************************** Animation ********************************** */

    /// Returns false (and changes nothing) when there is nothing visible.
    pub fn start_animation(
        &mut self,
        registry: &SegmentRegistry,
        params: &Params,
        now: f32,
    ) -> bool {
        if registry.is_empty() {
            return false;
        }

        let mut order = registry.visible_indices();
        if order.is_empty() {
            return false;
        }
        order.shuffle(&mut self.rng);
        self.order = order;
        self.cursor = 0;

        self.stop_animation();
        self.state = SequencerState::Animating;
        // back-date so the first step is due immediately
        self.last_step_time = now - params.speed;
        log::debug!(
            "Animating {} segments of '{}'",
            self.order.len(),
            self.current_preset
        );

        self.step_animation(params, now);
        true
    }

    pub fn stop_animation(&mut self) {
        self.state = SequencerState::Idle;
        self.entries.clear();
    }

    /// Stopping a pass by hand still holds and then auto-advances.
    pub fn toggle(&mut self, registry: &SegmentRegistry, params: &Params, now: f32) {
        if self.is_animating() {
            self.stop_animation();
            self.state = SequencerState::Holding { since: now };
        } else {
            self.start_animation(registry, params, now);
        }
    }

    /// Lights the next segment in the order, or finishes the pass.
    pub fn step_animation(&mut self, params: &Params, now: f32) {
        if !self.is_animating() || self.order.is_empty() {
            return;
        }

        if self.cursor >= self.order.len() {
            self.entries.clear();
            self.state = SequencerState::Holding { since: now };
            log::debug!(
                "Pass of '{}' finished, holding for {} ms",
                self.current_preset,
                self.hold_duration()
            );
            return;
        }

        if params.overlap <= 0.0 {
            self.entries.clear();
        }
        self.entries.push(ActiveEntry {
            segment_index: self.order[self.cursor],
            start_time: now,
            lifetime: params.entry_lifetime(),
        });
        self.cursor += 1;
        self.last_step_time = now;
    }

    /// Drops entries whose lifetime has passed.
    pub fn sweep_expired(&mut self, now: f32) {
        self.entries.retain(|entry| !entry.is_expired(now));
    }

    /// One frame of sequencing: hold expiry, cadence step, expiry sweep.
    pub fn update(&mut self, registry: &mut SegmentRegistry, params: &Params, now: f32) {
        if let SequencerState::Holding { since } = self.state {
            if now - since > self.hold_duration() {
                self.advance_preset(registry, params, now);
            }
        }

        if self.is_animating() && now - self.last_step_time > params.speed {
            self.step_animation(params, now);
        }

        self.sweep_expired(now);
    }

    fn advance_preset(&mut self, registry: &mut SegmentRegistry, params: &Params, now: f32) {
        let next = next_preset_name(&self.current_preset);
        log::info!("Auto-advancing preset {} -> {}", self.current_preset, next);

        self.state = SequencerState::Idle;
        self.apply_preset(registry, next);
        if !self.start_animation(registry, params, now) && !registry.is_empty() {
            // nothing visible under this preset, wait and move on
            log::warn!("Preset '{}' has no visible segments", next);
            self.state = SequencerState::Holding { since: now };
        }
    }

    /************************** Fade targets ********************************** */

    /// Which segments should be lit this frame: while animating only those
    /// with a live entry, otherwise everything the preset made visible.
    pub fn targets(&self, registry: &SegmentRegistry) -> Vec<bool> {
        if self.is_animating() {
            let mut targets = vec![false; registry.len()];
            for entry in &self.entries {
                if let Some(target) = targets.get_mut(entry.segment_index) {
                    *target = true;
                }
            }
            targets
        } else {
            registry.segments.iter().map(|s| s.visible).collect()
        }
    }
}
