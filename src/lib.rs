//! DepthClock - layered 3D digital clock library
//!
//! Re-exports all modules for use by the binary target.

// Core logic (layer stack, gestures, timing) - no window required
pub mod core;

// App modules
pub mod app;
pub mod cli;
pub mod dialogs;
pub mod paths;
pub mod render;
pub mod widgets;

// Re-export commonly used types
pub use crate::app::{ClockApp, LaunchOptions};
pub use crate::core::event_bus::EventBus;
pub use crate::core::interaction::InteractionController;
pub use crate::core::layer_stack::{LayerId, LayerStack};
pub use crate::render::{Renderer, Shell};
