// src/views/grid_view.rs
//
// Draws the segment grid scaled to fit the window.
// Layout pixels have their origin at the top-left with y down; nannou's
// window has its origin at the centre with y up. GridFit maps one onto the
// other, keeping the grid centred inside the padded window.

use nannou::prelude::*;

use crate::models::{PixelRect, SegmentRegistry};

/// Segments dimmer than this are not drawn.
const MIN_VISIBLE_LEVEL: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFit {
    pub scale: f32,
    pub grid_w: f32,
    pub grid_h: f32,
}

impl GridFit {
    pub fn new(window: Rect, grid_w: f32, grid_h: f32, padding: f32) -> Self {
        let avail_w = window.w() - padding * 2.0;
        let avail_h = window.h() - padding * 2.0;
        let scale = if grid_w > 0.0 && grid_h > 0.0 {
            (avail_w / grid_w).min(avail_h / grid_h).max(0.0)
        } else {
            1.0
        };

        Self {
            scale,
            grid_w,
            grid_h,
        }
    }

    /// Layout pixel position to window coordinates.
    pub fn point(&self, x: f32, y: f32) -> Point2 {
        pt2(
            (x - self.grid_w / 2.0) * self.scale,
            (self.grid_h / 2.0 - y) * self.scale,
        )
    }

    pub fn to_window(&self, rect: &PixelRect) -> Rect {
        let (cx, cy) = rect.center();
        let center = self.point(cx, cy);
        Rect::from_x_y_w_h(
            center.x,
            center.y,
            rect.w * self.scale,
            rect.h * self.scale,
        )
    }
}

pub fn draw_grid_lines(draw: &Draw, fit: &GridFit, registry: &SegmentRegistry, alpha: u8) {
    let color = rgba(1.0, 1.0, 1.0, alpha as f32 / 255.0);
    let cell = registry.cell_size;

    for col in 0..=registry.cols {
        let x = col as f32 * cell;
        draw.line()
            .start(fit.point(x, 0.0))
            .end(fit.point(x, fit.grid_h))
            .weight(1.0)
            .color(color);
    }
    for row in 0..=registry.rows {
        let y = row as f32 * cell;
        draw.line()
            .start(fit.point(0.0, y))
            .end(fit.point(fit.grid_w, y))
            .weight(1.0)
            .color(color);
    }
}

pub fn draw_segments(draw: &Draw, fit: &GridFit, registry: &SegmentRegistry, use_colors: bool) {
    for segment in &registry.segments {
        let level = segment.active_level;
        if level <= MIN_VISIBLE_LEVEL {
            continue;
        }

        let color = if use_colors {
            let c = segment.color;
            rgba(
                c.r as f32 / 255.0,
                c.g as f32 / 255.0,
                c.b as f32 / 255.0,
                level * c.a as f32 / 255.0,
            )
        } else {
            rgba(1.0, 1.0, 1.0, level)
        };

        let rect = fit.to_window(&segment.rect);
        draw.rect().xy(rect.xy()).wh(rect.wh()).color(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_uses_tighter_axis() {
        // 1450x860 grid in a 1600x1000 window with 50px padding
        let fit = GridFit::new(Rect::from_w_h(1600.0, 1000.0), 1450.0, 860.0, 50.0);
        assert!((fit.scale - 1500.0 / 1450.0).abs() < 1e-6);
    }

    #[test]
    fn test_corners_map_to_centred_extent() {
        let fit = GridFit::new(Rect::from_w_h(1200.0, 700.0), 1000.0, 500.0, 100.0);
        assert_eq!(fit.scale, 1.0);
        assert_eq!(fit.point(0.0, 0.0), pt2(-500.0, 250.0));
        assert_eq!(fit.point(1000.0, 500.0), pt2(500.0, -250.0));
    }

    #[test]
    fn test_rect_flips_y() {
        let fit = GridFit::new(Rect::from_w_h(1200.0, 700.0), 1000.0, 500.0, 100.0);
        let rect = fit.to_window(&PixelRect {
            x: 0.0,
            y: 0.0,
            w: 100.0,
            h: 50.0,
        });
        assert_eq!(rect.x(), -450.0);
        assert_eq!(rect.y(), 225.0);
        assert_eq!(rect.w(), 100.0);
        assert_eq!(rect.h(), 50.0);
    }

    #[test]
    fn test_empty_grid_does_not_divide_by_zero() {
        let fit = GridFit::new(Rect::from_w_h(800.0, 600.0), 0.0, 0.0, 50.0);
        assert_eq!(fit.scale, 1.0);
    }
}
