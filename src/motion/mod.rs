//! Focus head, trail and checkmark animation, independent of any UI toolkit.
//!
//! Host code registers its controls once, pushes [`ControlEvent`]s as they
//! happen and calls [`FocusController::tick`] once per display refresh with a
//! [`GeometryProvider`] for the current layout and a [`Surface`] to draw on.

mod checkmarks;
mod controller;
mod controls;
mod dash;
mod surface;
mod tracker;
mod trail;

use eframe::egui::Color32;

pub use checkmarks::{Checkmark, CheckmarkSet, checkmark_glyph};
pub use controller::{AnimationState, ControlEvent, FocusController};
pub use controls::{ControlId, ControlKind, ControlRegistry};
pub use dash::{path_length, sub_polyline, visible_spans};
pub use surface::{BlendMode, GeometryProvider, StrokeStyle, Surface, Viewport};
pub use tracker::{HeadState, Tracker, head_target};
pub use trail::{QuadSegment, Trail, TrailCurve, TrailPoint};

/// Horizontal gap between a control and the head / checkmark drawn left of it.
pub const SPACING: f32 = 16.0;
pub const RADIUS: f32 = 8.0;
/// Head radius while the focused control holds a valid value.
pub const CHECK_RADIUS: f32 = RADIUS * 1.8;
pub const CHECK_SIZE: f32 = 10.0;
/// Dash and gap length of the checkmark stroke, longer than the glyph itself.
pub const CHECK_LENGTH: f32 = 18.0;
pub const CHECK_STROKE_WIDTH: f32 = 3.0;
pub const CHECK_VISIBILITY_THRESHOLD: f32 = 0.05;
pub const CHECK_SHADOW_COLOR: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
pub const CHECK_HIGHLIGHT_COLOR: Color32 = Color32::WHITE;
pub const TAIL_LENGTH: usize = 8;
/// Fewer snapshots than this and no trail is drawn.
pub const MIN_TRAIL_POINTS: usize = 4;
/// Line segments per quadratic trail segment when flattening.
pub const TRAIL_CURVE_STEPS: usize = 6;

pub const SMOOTHING: f32 = 0.2;
pub const VELOCITY_DECAY: f32 = 0.8;
pub const IMPULSE_BASE: f32 = 8.0;
pub const IMPULSE_DISTANCE_DIVISOR: f32 = 5.0;

/// One step of exponential smoothing: the error shrinks by `1 - SMOOTHING`.
pub fn smooth_toward(value: f32, target: f32) -> f32 {
    value + (target - value) * SMOOTHING
}
