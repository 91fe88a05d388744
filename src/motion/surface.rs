use std::collections::HashMap;

use eframe::egui::{Color32, Pos2, Rect, Vec2};

use super::ControlId;

/// Compositing of a stroke against what is already drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    /// Additive; shows up over dark pixels.
    Lighter,
    /// Contrast-preserving; shows up over light pixels.
    Overlay,
}

/// Stroke parameters. Caps and joins are always round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color32,
    pub blend: BlendMode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Logical size in points.
    pub size: Vec2,
    pub pixels_per_point: f32,
}

impl Viewport {
    pub fn new(size: Vec2, pixels_per_point: f32) -> Self {
        Self {
            size,
            pixels_per_point: if pixels_per_point > 0.0 {
                pixels_per_point
            } else {
                1.0
            },
        }
    }

    /// Backing store size in physical pixels.
    pub fn backing_size(&self) -> [u32; 2] {
        [
            (self.size.x * self.pixels_per_point).round().max(0.0) as u32,
            (self.size.y * self.pixels_per_point).round().max(0.0) as u32,
        ]
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 1.0)
    }
}

/// Drawing target for one frame, in logical coordinates.
pub trait Surface {
    fn clear(&mut self, viewport: &Viewport);
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    fn stroke_polyline(&mut self, points: &[Pos2], style: StrokeStyle);
}

/// Live layout boxes of registered controls.
pub trait GeometryProvider {
    /// `None` while the control is not laid out.
    fn box_of(&self, control: ControlId) -> Option<Rect>;
}

impl GeometryProvider for HashMap<ControlId, Rect> {
    fn box_of(&self, control: ControlId) -> Option<Rect> {
        self.get(&control).copied()
    }
}
