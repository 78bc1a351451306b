// src/controllers/keyboard.rs
//
// Keyboard bindings.

use nannou::prelude::Key;

use crate::animation::Preset;
use crate::models::ParamKind;

/// Step used by the parameter nudge keys.
pub const NUDGE_STEP: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    ToggleAnimation,
    ApplyPreset(Preset),
    ToggleDebug,
    ToggleFullscreen,
    SaveSettings,
    Nudge(ParamKind, f32),
}

pub fn action_for_key(key: Key) -> Option<KeyAction> {
    let action = match key {
        Key::Space => KeyAction::ToggleAnimation,
        Key::Key1 => KeyAction::ApplyPreset(Preset::Satellite),
        Key::Key2 => KeyAction::ApplyPreset(Preset::Wordmark),
        Key::Key3 => KeyAction::ApplyPreset(Preset::Infrapositive),
        Key::D => KeyAction::ToggleDebug,
        Key::F => KeyAction::ToggleFullscreen,
        Key::S => KeyAction::SaveSettings,
        Key::Up => KeyAction::Nudge(ParamKind::Speed, NUDGE_STEP),
        Key::Down => KeyAction::Nudge(ParamKind::Speed, -NUDGE_STEP),
        Key::Right => KeyAction::Nudge(ParamKind::Overlap, NUDGE_STEP),
        Key::Left => KeyAction::Nudge(ParamKind::Overlap, -NUDGE_STEP),
        Key::Q => KeyAction::Nudge(ParamKind::Fade, NUDGE_STEP),
        Key::A => KeyAction::Nudge(ParamKind::Fade, -NUDGE_STEP),
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        assert_eq!(action_for_key(Key::Space), Some(KeyAction::ToggleAnimation));
        assert_eq!(
            action_for_key(Key::Key2),
            Some(KeyAction::ApplyPreset(Preset::Wordmark))
        );
        assert_eq!(
            action_for_key(Key::Down),
            Some(KeyAction::Nudge(ParamKind::Speed, -10.0))
        );
        assert_eq!(
            action_for_key(Key::Q),
            Some(KeyAction::Nudge(ParamKind::Fade, 10.0))
        );
        assert_eq!(action_for_key(Key::Z), None);
    }
}
