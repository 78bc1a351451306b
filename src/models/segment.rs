// src/models/segment.rs
//
// The segment registry: every lightable rectangle of the installation,
// converted from grid units to pixels once at load time and then mutated in
// place (visibility by presets, active_level by the fade step).

use std::path::Path;

use super::color::{parse_color, SegmentColor};
use super::data_model::{Layout, SegmentRecord};
use crate::error::Result;

/// Axis-aligned rectangle in layout pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl PixelRect {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

#[derive(Debug, Clone)]
pub struct Segment {
    pub id: String,
    pub name: String,
    pub rect: PixelRect,
    pub color: SegmentColor,

    pub visible: bool,     // logically "on" under the current preset
    pub active_level: f32, // 0.0 to 1.0 fade intensity
}

impl Segment {
    pub fn from_record(record: &SegmentRecord, cell_size: f32) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            rect: PixelRect {
                x: record.x * cell_size,
                y: record.y * cell_size,
                w: record.w * cell_size,
                h: record.h * cell_size,
            },
            color: parse_color(&record.color),
            visible: true,
            active_level: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SegmentRegistry {
    pub cols: u32,
    pub rows: u32,
    pub cell_size: f32,
    pub segments: Vec<Segment>,
}

impl SegmentRegistry {
    pub fn load<P: AsRef<Path>>(path: P, cell_size: f32) -> Result<Self> {
        let layout = Layout::load(path)?;
        Ok(Self::from_layout(&layout, cell_size))
    }

    pub fn from_layout(layout: &Layout, cell_size: f32) -> Self {
        let segments = layout
            .segments
            .iter()
            .map(|record| Segment::from_record(record, cell_size))
            .collect();

        Self {
            cols: layout.frame.cols,
            rows: layout.frame.rows,
            cell_size,
            segments,
        }
    }

    /// Empty registry that keeps the cell size, used when loading fails.
    pub fn empty(cell_size: f32) -> Self {
        Self {
            cell_size,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Pixel width and height of the whole grid.
    pub fn grid_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| segment.visible)
            .map(|(index, _)| index)
            .collect()
    }
}
