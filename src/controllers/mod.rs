pub mod keyboard;
pub mod osc;
pub mod panel;

pub use keyboard::{action_for_key, KeyAction};
pub use osc::{OscCommand, OscController};
pub use panel::{ControlPanel, PanelHit};
