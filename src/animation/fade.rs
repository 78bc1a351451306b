// src/animation/fade.rs
//
// Linear fade of each segment's active_level toward its target.

use super::sequencer::Sequencer;
use crate::models::SegmentRegistry;

/// Moves `level` toward `target` by `dt_ms / fade_ms`, without overshooting.
/// A fade of zero (or less) is an instant cut.
pub fn step_level(level: f32, target: f32, dt_ms: f32, fade_ms: f32) -> f32 {
    let delta = if fade_ms > 0.0 {
        (dt_ms / fade_ms).max(0.0)
    } else {
        1.0
    };

    let next = if level < target {
        (level + delta).min(target)
    } else if level > target {
        (level - delta).max(target)
    } else {
        level
    };
    next.clamp(0.0, 1.0)
}

pub fn apply_fade(registry: &mut SegmentRegistry, sequencer: &Sequencer, dt_ms: f32, fade_ms: f32) {
    let targets = sequencer.targets(registry);
    for (segment, lit) in registry.segments.iter_mut().zip(targets) {
        let target = if lit { 1.0 } else { 0.0 };
        segment.active_level = step_level(segment.active_level, target, dt_ms, fade_ms);
    }
}
