//! Core clock modules - layer stack, interaction, timing
//!
//! These modules hold all the behaviour and never touch egui directly;
//! side effects go through `render::Renderer` and `render::Shell`.

pub mod clock;
pub mod event_bus;
pub mod gesture;
pub mod interaction;
pub mod layer_stack;
pub mod projection;
pub mod ticker;

// Re-exports for convenience
pub use clock::{ClockReading, SystemClock, TimeSource};
pub use event_bus::EventBus;
pub use gesture::{ClickGesture, GestureAction};
pub use interaction::InteractionController;
pub use layer_stack::LayerStack;
pub use ticker::Ticker;
