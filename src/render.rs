//! Capabilities the clock core needs from a display surface.
//!
//! The layer stack and the interaction controller only ever talk to these
//! traits. `widgets::stage::StageRenderer` is the egui implementation;
//! tests use recording fakes.

use crate::core::clock::{GLYPH_COUNT, Glyph};
use crate::core::layer_stack::{LayerId, LayerStyle};
use eframe::egui;

/// Scene tilt in degrees. Applied as X rotation first, then Y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneRotation {
    pub x_deg: f32,
    pub y_deg: f32,
}

impl std::fmt::Display for SceneRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rotateX({}deg) rotateY({}deg)", self.x_deg, self.y_deg)
    }
}

/// Font family offered by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FontChoice {
    #[default]
    Monospace,
    Proportional,
}

impl FontChoice {
    pub const ALL: [FontChoice; 2] = [FontChoice::Monospace, FontChoice::Proportional];

    pub fn label(&self) -> &'static str {
        match self {
            FontChoice::Monospace => "Monospace",
            FontChoice::Proportional => "Proportional",
        }
    }

    pub fn family(&self) -> egui::FontFamily {
        match self {
            FontChoice::Monospace => egui::FontFamily::Monospace,
            FontChoice::Proportional => egui::FontFamily::Proportional,
        }
    }
}

/// Global typography variables shared by every layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontVariable {
    Size(f32),
    Family(FontChoice),
}

/// Retained layer surface.
pub trait Renderer {
    /// Attach a new layer node showing `glyphs`.
    fn add_layer(&mut self, id: LayerId, glyphs: &[Glyph; GLYPH_COUNT]);

    /// Detach a layer node. Must be a no-op if `id` is no longer attached.
    fn remove_layer(&mut self, id: LayerId);

    /// Apply depth-dependent presentation to a live layer.
    fn style_layer(&mut self, id: LayerId, style: &LayerStyle);

    fn set_scene_rotation(&mut self, rotation: SceneRotation);

    fn set_font_variable(&mut self, var: FontVariable);
}

/// Window-level capabilities.
pub trait Shell {
    fn is_fullscreen(&self) -> bool;

    /// Ask the environment for fullscreen. `Err` means the request was refused.
    fn request_fullscreen(&mut self) -> anyhow::Result<()>;

    fn exit_fullscreen(&mut self);
}

/// `Shell` backed by the egui viewport.
pub struct EguiShell<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiShell<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }

    fn set_fullscreen(&self, enabled: bool) {
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(enabled));
        // Borderless while fullscreen
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Decorations(!enabled));
        self.ctx.request_repaint();
    }
}

impl Shell for EguiShell<'_> {
    fn is_fullscreen(&self) -> bool {
        self.ctx.input(|i| i.viewport().fullscreen.unwrap_or(false))
    }

    fn request_fullscreen(&mut self) -> anyhow::Result<()> {
        // Backends that cannot report fullscreen state cannot honour it either
        if self.ctx.input(|i| i.viewport().fullscreen.is_none()) {
            anyhow::bail!("fullscreen is not supported by this window backend");
        }
        self.set_fullscreen(true);
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        self.set_fullscreen(false);
    }
}
