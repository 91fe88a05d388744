use std::collections::HashMap;

use eframe::egui::{self, Context, Id, LayerId, Order, Vec2};
use focus_trail::motion::{ControlEvent, FocusController, Viewport};
use focus_trail::style::Palette;

mod form;
mod surface;

use form::SignupForm;
use surface::PainterSurface;

pub struct FocusTrailApp {
    form: SignupForm,
    controller: FocusController,
    viewport: Viewport,
    scroll_offset: Vec2,
}

impl FocusTrailApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, palette: Palette) -> Self {
        let mut controller = FocusController::new(palette, Viewport::default());
        let form = SignupForm::register(&mut controller);

        Self {
            form,
            controller,
            viewport: Viewport::default(),
            scroll_offset: Vec2::ZERO,
        }
    }

    fn viewport_event(&mut self, ctx: &Context) -> Option<ControlEvent> {
        let viewport = Viewport::new(ctx.available_rect().size(), ctx.pixels_per_point());
        if viewport == self.viewport {
            return None;
        }

        self.viewport = viewport;
        Some(ControlEvent::Resize(viewport))
    }
}

impl eframe::App for FocusTrailApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();
        events.extend(self.viewport_event(ctx));

        let mut layout = HashMap::new();
        let state = self.controller.state();
        let form = &mut self.form;
        let scroll_offset = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| form.show(ui, state, &mut layout, &mut events))
                    .state
                    .offset
            })
            .inner;

        if scroll_offset != self.scroll_offset {
            self.scroll_offset = scroll_offset;
            events.push(ControlEvent::Scroll);
        }

        for event in events {
            self.controller.push(event);
        }

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("focus_trail")));
        let mut surface = PainterSurface::new(painter);
        self.controller.tick(&layout, &mut surface);

        ctx.request_repaint();
    }
}
