//! UI Widgets
//!
//! Widgets only paint and emit events via EventBus

pub mod stage;
