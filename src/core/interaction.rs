//! Interaction controller - click gestures, fullscreen, settings panel state.
//!
//! Owns the click burst classifier, the settings panel visibility, and the
//! current `SceneSettings`. All side effects go through `Renderer` and `Shell`,
//! so the whole state machine runs without a window in tests.

use std::time::Instant;

use log::{debug, info};

use super::gesture::{ClickGesture, GestureAction};
use crate::dialogs::prefs::SceneSettings;
use crate::render::{FontChoice, FontVariable, Renderer, Shell};

#[derive(Debug, Default)]
pub struct InteractionController {
    gesture: ClickGesture,
    settings: SceneSettings,
    settings_open: bool,
}

impl InteractionController {
    pub fn new(settings: SceneSettings) -> Self {
        Self {
            gesture: ClickGesture::default(),
            settings,
            settings_open: false,
        }
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    /// Push the full current settings to the renderer (startup).
    pub fn apply_all<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.set_scene_rotation(self.settings.rotation());
        renderer.set_font_variable(FontVariable::Size(self.settings.font_size));
        renderer.set_font_variable(FontVariable::Family(self.settings.font_family));
    }

    // ========== Click gestures ==========

    /// Register a document-level click.
    ///
    /// Clicks on the open settings panel are not gestures. Returns whether
    /// the click was counted.
    pub fn click(&mut self, now: Instant, on_settings_panel: bool) -> bool {
        if self.settings_open && on_settings_panel {
            return false;
        }
        self.gesture.click(now);
        true
    }

    /// Close the pending burst if due and run its action.
    pub fn poll<S: Shell + ?Sized>(&mut self, now: Instant, shell: &mut S) -> Option<GestureAction> {
        let action = self.gesture.poll(now)?;
        match action {
            GestureAction::ToggleFullscreen => self.toggle_fullscreen(shell),
            GestureAction::ToggleSettings => self.toggle_settings(),
        }
        Some(action)
    }

    /// When the pending click burst closes, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.gesture.deadline()
    }

    pub fn pending_clicks(&self) -> u32 {
        self.gesture.pending_clicks()
    }

    // ========== Actions ==========

    /// Enter fullscreen, or leave it if already there.
    ///
    /// A refused request is logged and otherwise ignored.
    pub fn toggle_fullscreen<S: Shell + ?Sized>(&mut self, shell: &mut S) {
        if shell.is_fullscreen() {
            debug!("Leaving fullscreen");
            shell.exit_fullscreen();
        } else if let Err(e) = shell.request_fullscreen() {
            info!("Fullscreen blocked: {:#}", e);
        } else {
            debug!("Entered fullscreen");
        }
    }

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
        debug!("Settings panel {}", if self.settings_open { "opened" } else { "closed" });
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    /// Escape: leave fullscreen first, otherwise close the settings panel.
    ///
    /// Returns false if there was nothing to back out of.
    pub fn escape<S: Shell + ?Sized>(&mut self, shell: &mut S) -> bool {
        if shell.is_fullscreen() {
            shell.exit_fullscreen();
            true
        } else if self.settings_open {
            self.settings_open = false;
            true
        } else {
            false
        }
    }

    // ========== Settings bindings ==========

    pub fn set_orientation_x<R: Renderer + ?Sized>(&mut self, degrees: f32, renderer: &mut R) {
        self.settings.tilt_x = degrees;
        renderer.set_scene_rotation(self.settings.rotation());
    }

    pub fn set_orientation_y<R: Renderer + ?Sized>(&mut self, degrees: f32, renderer: &mut R) {
        self.settings.tilt_y = degrees;
        renderer.set_scene_rotation(self.settings.rotation());
    }

    pub fn set_font_size<R: Renderer + ?Sized>(&mut self, px: f32, renderer: &mut R) {
        self.settings.font_size = px;
        renderer.set_font_variable(FontVariable::Size(px));
    }

    pub fn set_font_family<R: Renderer + ?Sized>(&mut self, family: FontChoice, renderer: &mut R) {
        self.settings.font_family = family;
        renderer.set_font_variable(FontVariable::Family(family));
        info!("Font family: {}", family.label());
    }
}
