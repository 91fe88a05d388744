#![allow(dead_code)]

use std::collections::HashMap;

use eframe::egui::{Color32, Pos2, Rect, pos2, vec2};
use focus_trail::motion::{
    ControlId, ControlKind, FocusController, StrokeStyle, Surface, Viewport,
};
use focus_trail::style::Palette;
use focus_trail::validate::InputType;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Viewport),
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Polyline {
        points: Vec<Pos2>,
        style: StrokeStyle,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Circle { .. }))
            .count()
    }

    pub fn polylines_with_width(&self, width: f32) -> Vec<&StrokeStyle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Polyline { style, .. } if style.width == width => Some(style),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, viewport: &Viewport) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(*viewport));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_polyline(&mut self, points: &[Pos2], style: StrokeStyle) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            style,
        });
    }
}

pub struct Form {
    pub controller: FocusController,
    pub layout: HashMap<ControlId, Rect>,
    pub name: ControlId,
    pub email: ControlId,
    pub password: ControlId,
    pub remember: ControlId,
    pub submit: ControlId,
    pub surface: RecordingSurface,
}

impl Form {
    /// Fields stacked vertically, the submit button indented further right.
    pub fn new() -> Self {
        let mut controller =
            FocusController::new(Palette::default(), Viewport::new(vec2(800.0, 600.0), 2.0));
        let name = controller.register(ControlKind::Input(InputType::Text));
        let email = controller.register(ControlKind::Input(InputType::Email));
        let password = controller.register(ControlKind::Input(InputType::Password));
        let remember = controller.register(ControlKind::Input(InputType::Checkbox));
        let submit = controller.register(ControlKind::Button);

        let mut layout = HashMap::new();
        for (row, control) in [name, email, password, remember].into_iter().enumerate() {
            layout.insert(
                control,
                Rect::from_min_size(pos2(100.0, 40.0 + row as f32 * 60.0), vec2(240.0, 30.0)),
            );
        }
        layout.insert(
            submit,
            Rect::from_min_size(pos2(220.0, 280.0), vec2(120.0, 30.0)),
        );

        Self {
            controller,
            layout,
            name,
            email,
            password,
            remember,
            submit,
            surface: RecordingSurface::default(),
        }
    }

    pub fn tick(&mut self) {
        self.controller.tick(&self.layout, &mut self.surface);
    }

    pub fn run(&mut self, frames: usize) {
        for _ in 0..frames {
            self.tick();
        }
    }
}
