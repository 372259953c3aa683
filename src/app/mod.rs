//! Application module - ClockApp and its frame loop.
//!
//! - `events` - event bus draining, pointer clicks, keyboard
//! - `run` - `eframe::App` implementation

mod events;
mod run;

use std::time::Instant;

use log::info;

use crate::core::clock::{SystemClock, TimeSource};
use crate::core::event_bus::EventBus;
use crate::core::interaction::InteractionController;
use crate::core::layer_stack::LayerStack;
use crate::core::ticker::Ticker;
use crate::dialogs::prefs::SceneSettings;
use crate::widgets::stage::StageRenderer;

/// Startup options resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub settings: SceneSettings,
    pub fullscreen: bool,
    pub show_settings: bool,
}

/// Main application state.
///
/// Two independent drivers feed it each frame: the 1 s ticker (layer stack)
/// and pointer/keyboard/panel input (interaction controller). They share no
/// state beyond the stage they both draw into.
pub struct ClockApp {
    stack: LayerStack,
    stage: StageRenderer,
    ticker: Ticker,
    clock: Box<dyn TimeSource>,
    controller: InteractionController,
    event_bus: EventBus,
    /// Screen rect of the settings panel as of the last frame it was shown.
    settings_rect: Option<eframe::egui::Rect>,
    /// Fullscreen requested on the command line, applied on the first frame.
    pending_fullscreen: bool,
}

impl Default for ClockApp {
    fn default() -> Self {
        Self::new(LaunchOptions::default())
    }
}

impl ClockApp {
    pub fn new(options: LaunchOptions) -> Self {
        Self::with_clock(options, Box::new(SystemClock))
    }

    pub fn with_clock(options: LaunchOptions, clock: Box<dyn TimeSource>) -> Self {
        let settings = options.settings.clamped();
        let mut controller = InteractionController::new(settings);
        let mut stage = StageRenderer::new();
        controller.apply_all(&mut stage);
        if options.show_settings {
            controller.toggle_settings();
        }

        info!(
            "Clock starting: tilt {} font {}px {}",
            settings.rotation(),
            settings.font_size,
            settings.font_family.label()
        );

        Self {
            stack: LayerStack::new(),
            stage,
            ticker: Ticker::default(),
            clock,
            controller,
            event_bus: EventBus::new(),
            settings_rect: None,
            pending_fullscreen: options.fullscreen,
        }
    }

    /// Run the layer stack tick if one is due.
    fn tick_if_due(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        let reading = self.clock.now();
        self.stack.tick(reading, &mut self.stage);
        true
    }

    /// Earliest instant something needs a repaint: next tick or gesture close.
    fn next_wake(&self) -> Option<Instant> {
        match (self.ticker.next_due(), self.controller.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
