// src/animation/preset.rs
//
// The three hard-coded presets. Each one is a visibility rule over the
// registry keyed by segment id.

use crate::models::Segment;

const WORDMARK_SEGMENTS: [&str; 9] = [
    "V_TL_01", "V_TM_01", "V_TR_01", "V_BL_01", "V_BM_01", "V_BR_01", "H_TL_01", "H_ML_01",
    "H_BR_01",
];

const INFRAPOSITIVE_SEGMENTS: [&str; 7] = [
    "V_TM_01", "V_BM_01", "H_TL_01", "H_ML_01", "H_MR_01", "H_BR_01", "H_MM_01",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Satellite,
    Wordmark,
    Infrapositive,
}

impl Preset {
    pub const CYCLE: [Preset; 3] = [Preset::Satellite, Preset::Wordmark, Preset::Infrapositive];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Satellite => "satellite",
            Preset::Wordmark => "wordmark",
            Preset::Infrapositive => "infrapositive",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::CYCLE.into_iter().find(|preset| preset.name() == name)
    }

    /// Auto-cycle successor.
    pub fn next(self) -> Self {
        match self {
            Preset::Satellite => Preset::Wordmark,
            Preset::Wordmark => Preset::Infrapositive,
            Preset::Infrapositive => Preset::Satellite,
        }
    }

    /// None means every segment is a member.
    fn members(self) -> Option<&'static [&'static str]> {
        match self {
            Preset::Satellite => None,
            Preset::Wordmark => Some(&WORDMARK_SEGMENTS[..]),
            Preset::Infrapositive => Some(&INFRAPOSITIVE_SEGMENTS[..]),
        }
    }

    pub fn includes(self, id: &str) -> bool {
        self.members().map_or(true, |ids| ids.contains(&id))
    }

    pub fn apply(self, segments: &mut [Segment]) {
        for segment in segments.iter_mut() {
            segment.visible = self.includes(&segment.id);
        }
    }
}

/// Applies the preset called `name`. Unknown names leave visibility as it was.
pub fn apply_preset(segments: &mut [Segment], name: &str) {
    if let Some(preset) = Preset::from_name(name) {
        preset.apply(segments);
    }
}

/// The preset the auto-cycle moves to after `current`. Unknown names restart
/// the cycle at satellite.
pub fn next_preset_name(current: &str) -> &'static str {
    Preset::from_name(current)
        .map(Preset::next)
        .unwrap_or(Preset::Satellite)
        .name()
}
