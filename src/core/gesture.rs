//! Click-burst classifier.
//!
//! Every click restarts a short debounce window. When the window expires with
//! no further click, the burst is closed and its count decides the action:
//! 2 clicks toggle fullscreen, 3 toggle the settings panel, anything else is
//! dropped.
//!
//! Time is passed in explicitly so callers (and tests) control the clock:
//! ```ignore
//! // On click:
//! gesture.click(Instant::now());
//!
//! // In update loop:
//! if let Some(action) = gesture.poll(Instant::now()) { ... }
//! ```

use std::time::{Duration, Instant};

/// Idle time that closes a click burst.
pub const CLICK_DEBOUNCE: Duration = Duration::from_millis(400);

/// Action a completed burst maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAction {
    ToggleFullscreen,
    ToggleSettings,
}

impl GestureAction {
    pub fn from_click_count(count: u32) -> Option<Self> {
        match count {
            2 => Some(GestureAction::ToggleFullscreen),
            3 => Some(GestureAction::ToggleSettings),
            _ => None,
        }
    }
}

/// Debounced click counter.
#[derive(Debug, Clone)]
pub struct ClickGesture {
    delay: Duration,
    count: u32,
    /// Fire time of the pending debounce timer. `None` while idle.
    deadline: Option<Instant>,
}

impl Default for ClickGesture {
    fn default() -> Self {
        Self::new(CLICK_DEBOUNCE)
    }
}

impl ClickGesture {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            count: 0,
            deadline: None,
        }
    }

    /// Register a click. Replaces any pending timer (last click wins).
    pub fn click(&mut self, now: Instant) {
        self.count += 1;
        self.deadline = Some(now + self.delay);
        log::trace!("ClickGesture: click #{}, closes at +{}ms", self.count, self.delay.as_millis());
    }

    /// Close the burst if its timer has fired.
    ///
    /// Returns the resulting action, if any. The counter resets whenever the
    /// timer fires, action or not.
    pub fn poll(&mut self, now: Instant) -> Option<GestureAction> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        let count = std::mem::take(&mut self.count);
        self.deadline = None;
        let action = GestureAction::from_click_count(count);
        log::debug!("ClickGesture: burst of {} click(s) -> {:?}", count, action);
        action
    }

    /// Clicks counted in the open burst.
    pub fn pending_clicks(&self) -> u32 {
        self.count
    }

    /// When the pending timer fires, for repaint scheduling.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
