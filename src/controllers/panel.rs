// src/controllers/panel.rs
//
// On-screen control panel: one slider per tunable parameter and a save
// button. Slider edits are clamped to each parameter's range.
// Coordinates are nannou window coordinates (origin at the centre, y up).

use nannou::prelude::*;

use crate::models::{ParamKind, Params};

const PANEL_WIDTH: f32 = 260.0;
const ROW_HEIGHT: f32 = 20.0;
const ROW_GAP: f32 = 4.0;
const MARGIN: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelHit {
    Slider { kind: ParamKind, value: f32 },
    Save,
}

pub struct ControlPanel {
    top_left: Point2,
    dragging: Option<ParamKind>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            top_left: pt2(0.0, 0.0),
            dragging: None,
        }
    }

    /// Pins the panel inside the top-left corner of `window`.
    pub fn anchor_to(&mut self, window: Rect) {
        self.top_left = pt2(window.left() + MARGIN, window.top() - MARGIN);
    }

    fn row_rect(&self, row: usize) -> Rect {
        let y = self.top_left.y - ROW_HEIGHT / 2.0 - row as f32 * (ROW_HEIGHT + ROW_GAP);
        Rect::from_x_y_w_h(
            self.top_left.x + PANEL_WIDTH / 2.0,
            y,
            PANEL_WIDTH,
            ROW_HEIGHT,
        )
    }

    fn save_rect(&self) -> Rect {
        self.row_rect(ParamKind::ALL.len())
    }

    fn slider_value(rect: &Rect, kind: ParamKind, x: f32) -> f32 {
        let (min, max) = kind.range();
        let frac = ((x - rect.left()) / rect.w()).clamp(0.0, 1.0);
        min + frac * (max - min)
    }

    pub fn hit_test(&self, point: Point2) -> Option<PanelHit> {
        for (row, kind) in ParamKind::ALL.into_iter().enumerate() {
            let rect = self.row_rect(row);
            if inside(&rect, point) {
                return Some(PanelHit::Slider {
                    kind,
                    value: Self::slider_value(&rect, kind, point.x),
                });
            }
        }
        if inside(&self.save_rect(), point) {
            return Some(PanelHit::Save);
        }
        None
    }

    /// Mouse press. Returns true when the save button was hit.
    pub fn press(&mut self, point: Point2, params: &mut Params) -> bool {
        match self.hit_test(point) {
            Some(PanelHit::Slider { kind, value }) => {
                params.set_clamped(kind, value);
                self.dragging = Some(kind);
                false
            }
            Some(PanelHit::Save) => true,
            None => false,
        }
    }

    /// Mouse move while a slider is held; x outside the bar pins to the ends.
    pub fn drag(&mut self, point: Point2, params: &mut Params) {
        if let Some(kind) = self.dragging {
            let row = ParamKind::ALL
                .iter()
                .position(|k| *k == kind)
                .unwrap_or_default();
            let rect = self.row_rect(row);
            params.set_clamped(kind, Self::slider_value(&rect, kind, point.x));
        }
    }

    pub fn release(&mut self) {
        self.dragging = None;
    }

    pub fn draw(&self, draw: &Draw, params: &Params) {
        for (row, kind) in ParamKind::ALL.into_iter().enumerate() {
            let rect = self.row_rect(row);
            let (min, max) = kind.range();
            let value = params.get(kind);
            let frac = ((value - min) / (max - min)).clamp(0.0, 1.0);
            let fill_w = rect.w() * frac;

            draw.rect()
                .xy(rect.xy())
                .wh(rect.wh())
                .color(rgba(0.1, 0.1, 0.1, 0.85));
            draw.rect()
                .x_y(rect.left() + fill_w / 2.0, rect.y())
                .w_h(fill_w, rect.h())
                .color(rgba(0.2, 0.45, 0.75, 0.9));
            draw.text(&format!("{}  {:.2}", kind.label(), value))
                .xy(rect.xy())
                .wh(rect.wh())
                .left_justify()
                .font_size(11)
                .color(WHITE);
        }

        let save = self.save_rect();
        draw.rect()
            .xy(save.xy())
            .wh(save.wh())
            .color(rgba(0.25, 0.25, 0.25, 0.85));
        draw.text("save settings")
            .xy(save.xy())
            .wh(save.wh())
            .font_size(11)
            .color(WHITE);
    }
}

fn inside(rect: &Rect, point: Point2) -> bool {
    point.x >= rect.left()
        && point.x <= rect.right()
        && point.y >= rect.bottom()
        && point.y <= rect.top()
}
