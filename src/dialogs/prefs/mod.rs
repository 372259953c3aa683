//! Settings panel: scene tilt and typography.

pub mod prefs;
pub mod prefs_events;

pub use prefs::{FONT_SIZE_RANGE, SceneSettings, TILT_RANGE, render_settings_window};
