use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use super::{
    CHECK_HIGHLIGHT_COLOR, CHECK_SHADOW_COLOR, CHECK_STROKE_WIDTH, BlendMode, CheckmarkSet,
    ControlId, ControlKind, ControlRegistry, GeometryProvider, RADIUS, StrokeStyle, Surface,
    TRAIL_CURVE_STEPS, Trail, TrailPoint, Tracker, Viewport,
};
use crate::style::Palette;
use crate::validate;

/// Input to the controller, applied in arrival order at the start of a tick.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlEvent {
    Focus(ControlId),
    Input { control: ControlId, value: String },
    Resize(Viewport),
    Scroll,
}

/// Everything animated, for the lifetime of the host window.
#[derive(Debug, Default)]
pub struct AnimationState {
    registry: ControlRegistry,
    tracker: Tracker,
    trail: Trail,
    checkmarks: CheckmarkSet,
    valid: HashSet<ControlId>,
    viewport: Viewport,
}

impl AnimationState {
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn checkmarks(&self) -> &CheckmarkSet {
        &self.checkmarks
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_valid(&self, control: ControlId) -> bool {
        self.valid.contains(&control)
    }

    fn focused_trackable(&self) -> Option<ControlId> {
        self.tracker
            .focused()
            .filter(|&control| self.registry.kind(control).is_some_and(ControlKind::is_trackable))
    }
}

/// Single owner of [`AnimationState`]. Events only queue; [`Self::tick`]
/// commits all of them before painting, so a frame never sees half an event.
#[derive(Debug)]
pub struct FocusController {
    state: AnimationState,
    palette: Palette,
    events: VecDeque<ControlEvent>,
}

impl FocusController {
    pub fn new(palette: Palette, viewport: Viewport) -> Self {
        Self {
            state: AnimationState {
                viewport,
                ..AnimationState::default()
            },
            palette,
            events: VecDeque::new(),
        }
    }

    pub fn register(&mut self, kind: ControlKind) -> ControlId {
        let control = self.state.registry.register(kind);
        if kind.has_checkmark() {
            self.state.checkmarks.track(control);
        }
        control
    }

    pub fn push(&mut self, event: ControlEvent) {
        self.events.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// One frame: drain queued events, then paint.
    pub fn tick<G, S>(&mut self, geometry: &G, surface: &mut S)
    where
        G: GeometryProvider + ?Sized,
        S: Surface + ?Sized,
    {
        while let Some(event) = self.events.pop_front() {
            self.apply(event, geometry);
        }
        self.paint(geometry, surface);
    }

    fn apply<G>(&mut self, event: ControlEvent, geometry: &G)
    where
        G: GeometryProvider + ?Sized,
    {
        match event {
            ControlEvent::Focus(control) => self.refocus(Some(control), geometry),
            ControlEvent::Input { control, value } => self.validate(control, &value),
            ControlEvent::Resize(viewport) => {
                let [width, height] = viewport.backing_size();
                trace!(width, height, "viewport resized");
                self.state.viewport = viewport;
                self.refocus(None, geometry);
            }
            ControlEvent::Scroll => {
                trace!("viewport scrolled");
                self.refocus(None, geometry);
            }
        }
    }

    /// `None` re-targets the current focus without a focus change.
    fn refocus<G>(&mut self, control: Option<ControlId>, geometry: &G)
    where
        G: GeometryProvider + ?Sized,
    {
        let tracker = &mut self.state.tracker;
        let previous = tracker.focused();
        if let Some(control) = control {
            tracker.focus(control);
        }

        let Some(focused) = self.state.focused_trackable() else {
            return;
        };
        let Some(bounds) = geometry.box_of(focused) else {
            debug!(control = focused.index(), "focused control has no layout yet");
            return;
        };

        let changed = previous != Some(focused);
        if changed {
            debug!(control = focused.index(), "focus moved");
        }
        self.state.tracker.retarget(bounds, changed);
    }

    fn validate(&mut self, control: ControlId, value: &str) {
        let Some(input_type) = self.state.registry.kind(control).and_then(ControlKind::input_type)
        else {
            debug!(control = control.index(), "input event from a non-input control");
            return;
        };

        let valid = validate::is_valid(input_type, value);
        let was_valid = if valid {
            !self.state.valid.insert(control)
        } else {
            self.state.valid.remove(&control)
        };
        if valid != was_valid {
            debug!(control = control.index(), ?input_type, valid, "validity changed");
        }

        if !self.state.checkmarks.set_target(control, valid) {
            trace!(control = control.index(), "control has no checkmark");
        }
    }

    fn paint<G, S>(&mut self, geometry: &G, surface: &mut S)
    where
        G: GeometryProvider + ?Sized,
        S: Surface + ?Sized,
    {
        surface.clear(&self.state.viewport);

        if let Some(focused) = self.state.focused_trackable()
            && let Some(snapshot) = TrailPoint::of(self.state.tracker.head())
        {
            self.state.trail.push(snapshot);
            if let Some(curve) = self.state.trail.curve() {
                surface.stroke_polyline(
                    &curve.flatten(TRAIL_CURVE_STEPS),
                    StrokeStyle {
                        width: RADIUS,
                        color: self.palette.tail,
                        blend: BlendMode::Normal,
                    },
                );
            }

            let focused_valid = self.state.is_valid(focused);
            self.state.tracker.step(focused_valid);
            let head = self.state.tracker.head();
            if let Some(position) = head.position {
                surface.fill_circle(position, head.radius, self.palette.head);
            }
        }

        self.state.checkmarks.step_all();
        for (control, checkmark) in self.state.checkmarks.iter() {
            if !checkmark.is_visible() {
                continue;
            }
            let Some(bounds) = geometry.box_of(control) else {
                continue;
            };

            for stroke in checkmark.visible_strokes(bounds) {
                for (color, blend) in [
                    (CHECK_SHADOW_COLOR, BlendMode::Lighter),
                    (CHECK_HIGHLIGHT_COLOR, BlendMode::Overlay),
                ] {
                    surface.stroke_polyline(
                        &stroke,
                        StrokeStyle {
                            width: CHECK_STROKE_WIDTH,
                            color,
                            blend,
                        },
                    );
                }
            }
        }
    }
}
