//! Event handling for ClockApp.
//!
//! - Settings panel events from the bus (handle_events)
//! - Document-level pointer clicks (handle_clicks)
//! - Keyboard (handle_keyboard_input)

use std::time::Instant;

use eframe::egui;
use log::trace;

use super::ClockApp;
use crate::core::event_bus::downcast_event;
use crate::dialogs::prefs::prefs_events::*;
use crate::render::Shell;

impl ClockApp {
    /// Apply queued settings panel edits.
    pub(super) fn handle_events(&mut self) {
        for event in self.event_bus.poll() {
            trace!("Event: {}", (*event).type_name());

            if let Some(e) = downcast_event::<SetOrientationXEvent>(&event) {
                self.controller.set_orientation_x(e.0, &mut self.stage);
                continue;
            }
            if let Some(e) = downcast_event::<SetOrientationYEvent>(&event) {
                self.controller.set_orientation_y(e.0, &mut self.stage);
                continue;
            }
            if let Some(e) = downcast_event::<SetFontSizeEvent>(&event) {
                self.controller.set_font_size(e.0, &mut self.stage);
                continue;
            }
            if let Some(e) = downcast_event::<SetFontFamilyEvent>(&event) {
                self.controller.set_font_family(e.0, &mut self.stage);
                continue;
            }
            if downcast_event::<CloseSettingsEvent>(&event).is_some() {
                self.controller.close_settings();
                continue;
            }
        }
    }

    /// Feed primary clicks to the gesture classifier and fire due bursts.
    pub(super) fn handle_clicks<S: Shell>(&mut self, ctx: &egui::Context, shell: &mut S, now: Instant) {
        let click_pos = ctx.input(|i| {
            if i.pointer.primary_clicked() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });

        if let Some(pos) = click_pos {
            self.register_click(pos, now);
        }

        if self.controller.poll(now, shell).is_some() {
            ctx.request_repaint();
        }
    }

    /// Count a click at `pos` unless it landed on the open settings panel.
    pub(super) fn register_click(&mut self, pos: egui::Pos2, now: Instant) -> bool {
        let on_panel = self.settings_rect.is_some_and(|rect| rect.contains(pos));
        let counted = self.controller.click(now, on_panel);
        if !counted {
            trace!("Click on settings panel ignored");
        }
        counted
    }

    /// ESC backs out of fullscreen, then the settings panel.
    pub(super) fn handle_keyboard_input<S: Shell>(&mut self, ctx: &egui::Context, shell: &mut S) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.controller.escape(shell) {
            ctx.request_repaint();
        }
    }
}
