use std::collections::BTreeMap;

use eframe::egui::{Pos2, Rect, pos2};

use super::dash::{path_length, sub_polyline, visible_spans};
use super::{
    CHECK_LENGTH, CHECK_SIZE, CHECK_VISIBILITY_THRESHOLD, ControlId, SPACING, smooth_toward,
};

/// Reveal progress of one field's checkmark.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Checkmark {
    pub value: f32,
    pub target: f32,
}

impl Checkmark {
    pub fn set_valid(&mut self, valid: bool) {
        self.target = if valid { 1.0 } else { 0.0 };
    }

    pub fn step(&mut self) {
        self.value = smooth_toward(self.value, self.target);
    }

    pub fn is_visible(&self) -> bool {
        self.value > CHECK_VISIBILITY_THRESHOLD
    }

    /// Dash phase: one full dash length hides the glyph, two reveal all of it.
    pub fn dash_offset(&self) -> f32 {
        CHECK_LENGTH + (self.value * CHECK_LENGTH).round()
    }

    /// Polylines to stroke for a control laid out at `bounds`.
    pub fn visible_strokes(&self, bounds: Rect) -> Vec<Vec<Pos2>> {
        if !self.is_visible() {
            return Vec::new();
        }

        let glyph = checkmark_glyph(bounds);
        visible_spans(
            path_length(&glyph),
            CHECK_LENGTH,
            CHECK_LENGTH,
            self.dash_offset(),
        )
        .into_iter()
        .map(|(from, to)| sub_polyline(&glyph, from, to))
        .filter(|points| points.len() >= 2)
        .collect()
    }
}

/// Three-point check glyph just left of `bounds`, drawn long stroke first.
pub fn checkmark_glyph(bounds: Rect) -> [Pos2; 3] {
    let half = CHECK_SIZE / 2.0;
    let mid_x = bounds.left() - half - SPACING - 3.0;
    let mid_y = bounds.top() + bounds.height() / 2.0 + 1.0;

    [
        pos2(mid_x + half, mid_y - half),
        pos2(mid_x - 1.0, mid_y + half - 1.0),
        pos2(mid_x - half, mid_y),
    ]
}

/// One checkmark per monitored control, created at registration.
#[derive(Debug, Default)]
pub struct CheckmarkSet {
    entries: BTreeMap<ControlId, Checkmark>,
}

impl CheckmarkSet {
    pub fn track(&mut self, control: ControlId) {
        self.entries.entry(control).or_default();
    }

    /// Returns `false` when `control` has no checkmark.
    pub fn set_target(&mut self, control: ControlId, valid: bool) -> bool {
        match self.entries.get_mut(&control) {
            Some(checkmark) => {
                checkmark.set_valid(valid);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, control: ControlId) -> Option<&Checkmark> {
        self.entries.get(&control)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn step_all(&mut self) {
        self.entries.values_mut().for_each(Checkmark::step);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ControlId, &Checkmark)> {
        self.entries.iter().map(|(control, checkmark)| (*control, checkmark))
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    fn field() -> Rect {
        Rect::from_min_size(pos2(120.0, 40.0), vec2(240.0, 30.0))
    }

    #[test]
    fn glyph_sits_left_of_field() {
        let glyph = checkmark_glyph(field());
        assert_eq!(glyph[0], pos2(101.0, 51.0));
        assert_eq!(glyph[1], pos2(95.0, 60.0));
        assert_eq!(glyph[2], pos2(91.0, 56.0));
        assert!(path_length(&glyph) < CHECK_LENGTH);
    }

    #[test]
    fn hidden_below_threshold() {
        let checkmark = Checkmark {
            value: 0.05,
            target: 1.0,
        };
        assert!(checkmark.visible_strokes(field()).is_empty());
    }

    #[test]
    fn fully_revealed_stroke_covers_glyph() {
        let checkmark = Checkmark {
            value: 1.0,
            target: 1.0,
        };
        let strokes = checkmark.visible_strokes(field());

        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0], checkmark_glyph(field()).to_vec());
    }

    #[test]
    fn reveal_grows_from_short_leg() {
        let glyph = checkmark_glyph(field());
        let partial = Checkmark {
            value: 0.3,
            target: 1.0,
        };
        let strokes = partial.visible_strokes(field());

        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].last(), Some(&glyph[2]));
        assert!(path_length(&strokes[0]) < path_length(&glyph));
    }

    #[test]
    fn dash_offset_spans_one_dash_length() {
        let mut checkmark = Checkmark::default();
        assert_eq!(checkmark.dash_offset(), CHECK_LENGTH);
        checkmark.value = 1.0;
        assert_eq!(checkmark.dash_offset(), 2.0 * CHECK_LENGTH);
    }

    #[test]
    fn unknown_control_is_rejected() {
        let mut registry = crate::motion::ControlRegistry::default();
        let tracked = registry.register(crate::motion::ControlKind::Button);
        let untracked = registry.register(crate::motion::ControlKind::Button);
        let mut set = CheckmarkSet::default();
        set.track(tracked);

        assert!(set.set_target(tracked, true));
        assert!(!set.set_target(untracked, true));
        assert_eq!(set.get(tracked).map(|c| c.target), Some(1.0));
        assert_eq!(set.len(), 1);
    }
}
