use std::collections::HashMap;

use eframe::egui::{self, Color32, Rect, Response, RichText, Ui};
use focus_trail::motion::{AnimationState, ControlEvent, ControlId, ControlKind, FocusController};
use focus_trail::validate::InputType;
use tracing::info;

/// Room left of the controls for the head and the checkmarks.
const LEFT_GUTTER: f32 = 72.0;
const FIELD_WIDTH: f32 = 280.0;
const VALID_LABEL_COLOR: Color32 = Color32::from_rgb(110, 196, 140);

struct TextField {
    control: ControlId,
    label: &'static str,
    hint: &'static str,
    input_type: InputType,
    value: String,
}

pub(super) struct SignupForm {
    fields: Vec<TextField>,
    remember_control: ControlId,
    remember: bool,
    submit_control: ControlId,
}

impl SignupForm {
    pub(super) fn register(controller: &mut FocusController) -> Self {
        let fields = [
            ("Full name", "Ada Lovelace", "text"),
            ("Email", "ada@example.org", "email"),
            ("Password", "at least 7 characters", "password"),
        ]
        .into_iter()
        .map(|(label, hint, discriminator)| {
            let input_type = InputType::parse(discriminator);
            TextField {
                control: controller.register(ControlKind::Input(input_type)),
                label,
                hint,
                input_type,
                value: String::new(),
            }
        })
        .collect();

        Self {
            fields,
            remember_control: controller.register(ControlKind::Input(InputType::Checkbox)),
            remember: false,
            submit_control: controller.register(ControlKind::Button),
        }
    }

    pub(super) fn show(
        &mut self,
        ui: &mut Ui,
        state: &AnimationState,
        layout: &mut HashMap<ControlId, Rect>,
        events: &mut Vec<ControlEvent>,
    ) {
        ui.horizontal(|ui| {
            ui.add_space(LEFT_GUTTER);
            ui.vertical(|ui| {
                ui.add_space(24.0);
                ui.heading("Create an account");
                ui.add_space(16.0);

                for field in &mut self.fields {
                    let label = RichText::new(field.label);
                    ui.label(if state.is_valid(field.control) {
                        label.color(VALID_LABEL_COLOR)
                    } else {
                        label
                    });

                    let response = ui.add(
                        egui::TextEdit::singleline(&mut field.value)
                            .hint_text(field.hint)
                            .password(field.input_type == InputType::Password)
                            .desired_width(FIELD_WIDTH),
                    );
                    track(&response, field.control, layout, events);
                    if response.changed() {
                        events.push(ControlEvent::Input {
                            control: field.control,
                            value: field.value.clone(),
                        });
                    }
                    ui.add_space(12.0);
                }

                let response = ui.checkbox(&mut self.remember, "Remember me");
                track(&response, self.remember_control, layout, events);
                if response.changed() {
                    let value = if self.remember { "on" } else { "" };
                    events.push(ControlEvent::Input {
                        control: self.remember_control,
                        value: value.to_owned(),
                    });
                }
                ui.add_space(16.0);

                let response = ui.button("Sign up");
                track(&response, self.submit_control, layout, events);
                if response.clicked() {
                    let valid = self
                        .fields
                        .iter()
                        .filter(|field| state.is_valid(field.control))
                        .count();
                    info!(valid, total = self.fields.len(), "sign-up submitted");
                }
            });
        });
    }
}

fn track(
    response: &Response,
    control: ControlId,
    layout: &mut HashMap<ControlId, Rect>,
    events: &mut Vec<ControlEvent>,
) {
    layout.insert(control, response.rect);
    if response.gained_focus() {
        events.push(ControlEvent::Focus(control));
    }
}
