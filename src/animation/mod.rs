pub mod fade;
pub mod preset;
pub mod sequencer;

pub use fade::{apply_fade, step_level};
pub use preset::{apply_preset, next_preset_name, Preset};
pub use sequencer::{ActiveEntry, Sequencer, SequencerState};
