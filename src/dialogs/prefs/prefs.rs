use std::ops::RangeInclusive;

use eframe::egui;

use super::prefs_events::*;
use crate::core::event_bus::EventBus;
use crate::render::{FontChoice, SceneRotation};

pub const TILT_RANGE: RangeInclusive<f32> = -60.0..=60.0;
pub const FONT_SIZE_RANGE: RangeInclusive<f32> = 40.0..=300.0;

/// Live scene and typography settings. Process-lifetime only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSettings {
    pub tilt_x: f32,
    pub tilt_y: f32,
    pub font_size: f32,
    pub font_family: FontChoice,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            tilt_x: 20.0,
            tilt_y: -20.0,
            font_size: 140.0,
            font_family: FontChoice::Monospace,
        }
    }
}

impl SceneSettings {
    pub fn rotation(&self) -> SceneRotation {
        SceneRotation {
            x_deg: self.tilt_x,
            y_deg: self.tilt_y,
        }
    }

    /// Pull every numeric field into the range its control allows.
    pub fn clamped(self) -> Self {
        Self {
            tilt_x: clamp_to(self.tilt_x, &TILT_RANGE),
            tilt_y: clamp_to(self.tilt_y, &TILT_RANGE),
            font_size: clamp_to(self.font_size, &FONT_SIZE_RANGE),
            font_family: self.font_family,
        }
    }
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}

/// Render the settings panel.
///
/// Edits are emitted to `bus` rather than written to `settings`; the
/// controller applies them next frame. Returns the panel's screen rect so
/// clicks on it can be told apart from stage clicks.
pub fn render_settings_window(ctx: &egui::Context, settings: &SceneSettings, bus: &EventBus) -> Option<egui::Rect> {
    let mut open = true;
    let mut tilt_x = settings.tilt_x;
    let mut tilt_y = settings.tilt_y;
    let mut font_size = settings.font_size;
    let mut font_family = settings.font_family;

    let response = egui::Window::new("Settings")
        .id(egui::Id::new("settings_window"))
        .open(&mut open)
        .default_width(320.0)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
        .show(ctx, |ui| {
            ui.heading("Orientation");
            ui.add_space(8.0);

            ui.label("Tilt X:");
            if ui
                .add(egui::Slider::new(&mut tilt_x, TILT_RANGE).suffix("°").step_by(1.0))
                .changed()
            {
                bus.emit(SetOrientationXEvent(tilt_x));
            }
            ui.add_space(4.0);

            ui.label("Tilt Y:");
            if ui
                .add(egui::Slider::new(&mut tilt_y, TILT_RANGE).suffix("°").step_by(1.0))
                .changed()
            {
                bus.emit(SetOrientationYEvent(tilt_y));
            }

            ui.add_space(16.0);
            ui.heading("Typography");
            ui.add_space(8.0);

            ui.label("Font Size:");
            if ui
                .add(egui::Slider::new(&mut font_size, FONT_SIZE_RANGE).suffix(" px").step_by(2.0))
                .changed()
            {
                bus.emit(SetFontSizeEvent(font_size));
            }
            ui.add_space(4.0);

            ui.label("Font Family:");
            egui::ComboBox::from_id_salt("font_family")
                .selected_text(font_family.label())
                .show_ui(ui, |ui| {
                    for choice in FontChoice::ALL {
                        if ui.selectable_value(&mut font_family, choice, choice.label()).clicked() {
                            bus.emit(SetFontFamilyEvent(choice));
                        }
                    }
                });

            ui.add_space(16.0);
            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Triple-click: settings · Double-click: fullscreen");
            });
            if ui.button("Close").clicked() {
                bus.emit(CloseSettingsEvent);
            }
        });

    if !open {
        bus.emit(CloseSettingsEvent);
    }

    response.map(|r| r.response.rect)
}
