//! Settings panel events.

use crate::render::FontChoice;

#[derive(Clone, Debug)]
pub struct SetOrientationXEvent(pub f32);

#[derive(Clone, Debug)]
pub struct SetOrientationYEvent(pub f32);

#[derive(Clone, Debug)]
pub struct SetFontSizeEvent(pub f32);

/// Emitted when a family is picked, not while the list is open.
#[derive(Clone, Debug)]
pub struct SetFontFamilyEvent(pub FontChoice);

#[derive(Clone, Debug)]
pub struct CloseSettingsEvent;
