//! Main application loop - eframe::App implementation.

use std::time::Instant;

use eframe::egui;
use log::info;

use crate::app::ClockApp;
use crate::dialogs::prefs::render_settings_window;
use crate::render::EguiShell;

impl eframe::App for ClockApp {
    /// Called every frame by eframe.
    ///
    /// Flow:
    /// 1. Apply deferred command-line fullscreen
    /// 2. Tick the layer stack if a second has passed
    /// 3. Apply settings panel edits from last frame
    /// 4. Paint the stage
    /// 5. Settings panel
    /// 6. Clicks and keyboard
    /// 7. Schedule the next wake-up
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let mut shell = EguiShell::new(ctx);

        if std::mem::take(&mut self.pending_fullscreen) {
            info!("Starting fullscreen");
            self.controller.toggle_fullscreen(&mut shell);
        }

        self.tick_if_due(now);
        self.handle_events();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.stage.paint(ui.painter(), rect);
            });

        self.settings_rect = if self.controller.settings_open() {
            render_settings_window(ctx, self.controller.settings(), &self.event_bus)
        } else {
            None
        };

        self.handle_clicks(ctx, &mut shell, now);
        self.handle_keyboard_input(ctx, &mut shell);

        // Panel edits are applied next frame; don't wait for the tick to show them
        if self.event_bus.queue_len() > 0 {
            ctx.request_repaint();
        } else if let Some(wake) = self.next_wake() {
            ctx.request_repaint_after(wake.saturating_duration_since(Instant::now()));
        }
    }
}
