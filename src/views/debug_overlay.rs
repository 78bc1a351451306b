// src/views/debug_overlay.rs
//
// FPS / preset / sequencer state readout, shown with the control panel.

use nannou::prelude::*;

pub fn draw_debug_overlay(draw: &Draw, window: Rect, fps: f32, preset: &str, state: &str) {
    let text = format!("FPS: {:.1}\nMode: {}\nState: {}", fps, preset, state);
    let w = 300.0;
    let h = 60.0;
    draw.text(&text)
        .x_y(window.left() + 20.0 + w / 2.0, window.top() - 200.0 - h / 2.0)
        .w_h(w, h)
        .left_justify()
        .font_size(12)
        .color(WHITE);
}
