// src/views/mod.rs

pub mod debug_overlay;
pub mod grid_view;

pub use debug_overlay::draw_debug_overlay;
pub use grid_view::{draw_grid_lines, draw_segments, GridFit};
