use eframe::egui::{Pos2, Rect, pos2};

use super::{
    CHECK_RADIUS, ControlId, IMPULSE_BASE, IMPULSE_DISTANCE_DIVISOR, RADIUS, SPACING,
    VELOCITY_DECAY, smooth_toward,
};

/// Physical state of the focus head.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadState {
    /// `None` until the first trackable focus.
    pub position: Option<Pos2>,
    pub target: Pos2,
    pub radius: f32,
    pub target_radius: f32,
    pub velocity_x: f32,
}

impl Default for HeadState {
    fn default() -> Self {
        Self {
            position: None,
            target: Pos2::ZERO,
            radius: RADIUS,
            target_radius: RADIUS,
            velocity_x: 0.0,
        }
    }
}

impl HeadState {
    /// Advances one frame. Does nothing while the position is unset.
    pub fn step(&mut self) {
        let Some(position) = self.position.as_mut() else {
            return;
        };

        position.x = smooth_toward(position.x, self.target.x);
        position.y = smooth_toward(position.y, self.target.y);
        self.radius = smooth_toward(self.radius, self.target_radius);

        self.velocity_x *= VELOCITY_DECAY;
        position.x += self.velocity_x;
    }
}

/// Where the head rests for a control: left of it, vertically centered.
pub fn head_target(bounds: Rect) -> Pos2 {
    pos2(
        bounds.left() - SPACING - RADIUS,
        bounds.top() + bounds.height() / 2.0,
    )
}

#[derive(Debug, Default)]
pub struct Tracker {
    head: HeadState,
    focused: Option<ControlId>,
}

impl Tracker {
    pub fn head(&self) -> &HeadState {
        &self.head
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }

    /// Records `control` as focused and returns the previous focus.
    pub fn focus(&mut self, control: ControlId) -> Option<ControlId> {
        self.focused.replace(control)
    }

    /// Moves the target onto `bounds`. The first retarget snaps the head into
    /// place; a focus change kicks it leftwards, harder the further it has to
    /// travel.
    pub fn retarget(&mut self, bounds: Rect, focus_changed: bool) {
        self.head.target = head_target(bounds);
        let position = *self.head.position.get_or_insert(self.head.target);

        if focus_changed {
            self.head.velocity_x =
                -IMPULSE_BASE - (self.head.target.x - position.x).abs() / IMPULSE_DISTANCE_DIVISOR;
        }
    }

    pub fn step(&mut self, focused_valid: bool) {
        self.head.target_radius = if focused_valid { CHECK_RADIUS } else { RADIUS };
        self.head.step();
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Rect, pos2, vec2};

    use super::*;
    use crate::motion::ControlRegistry;
    use crate::motion::ControlKind;

    fn field_at(x: f32, y: f32) -> Rect {
        Rect::from_min_size(pos2(x, y), vec2(240.0, 32.0))
    }

    #[test]
    fn target_sits_left_of_control_and_centered() {
        assert_eq!(head_target(field_at(100.0, 40.0)), pos2(76.0, 56.0));
    }

    #[test]
    fn first_retarget_snaps_position() {
        let mut tracker = Tracker::default();
        tracker.retarget(field_at(100.0, 40.0), true);

        assert_eq!(tracker.head().position, Some(pos2(76.0, 56.0)));
        assert_eq!(tracker.head().velocity_x, -8.0);
    }

    #[test]
    fn retarget_without_focus_change_keeps_velocity() {
        let mut tracker = Tracker::default();
        tracker.retarget(field_at(100.0, 40.0), true);
        tracker.step(false);
        let velocity = tracker.head().velocity_x;

        tracker.retarget(field_at(100.0, 20.0), false);
        assert_eq!(tracker.head().velocity_x, velocity);
        assert_eq!(tracker.head().target, pos2(76.0, 36.0));
    }

    #[test]
    fn impulse_grows_with_horizontal_travel() {
        let mut tracker = Tracker::default();
        tracker.retarget(field_at(100.0, 40.0), true);
        tracker.retarget(field_at(300.0, 40.0), true);

        assert_eq!(tracker.head().velocity_x, -8.0 - 200.0 / 5.0);
    }

    #[test]
    fn step_without_position_is_a_no_op() {
        let mut tracker = Tracker::default();
        tracker.step(true);
        assert_eq!(tracker.head().position, None);
        assert_eq!(tracker.head().radius, RADIUS);
    }

    #[test]
    fn valid_focus_grows_radius_towards_check_radius() {
        let mut tracker = Tracker::default();
        tracker.retarget(field_at(100.0, 40.0), true);
        tracker.step(true);

        let radius = tracker.head().radius;
        assert!(radius > RADIUS && radius < CHECK_RADIUS);
    }

    #[test]
    fn focus_returns_previous_control() {
        let mut registry = ControlRegistry::default();
        let first = registry.register(ControlKind::Button);
        let second = registry.register(ControlKind::Button);
        let mut tracker = Tracker::default();

        assert_eq!(tracker.focus(first), None);
        assert_eq!(tracker.focus(second), Some(first));
        assert_eq!(tracker.focused(), Some(second));
    }
}
