//! Stage - egui implementation of `Renderer`.
//!
//! Keeps a retained set of layer nodes (glyphs + last style) keyed by
//! `LayerId`, and paints them every frame through `SceneProjection`. Nodes
//! are only created and destroyed by the layer stack; painting never mutates
//! them.

use std::collections::BTreeMap;

use eframe::egui::{self, Color32, FontId, Pos2, Rect, Vec2};
use glam::Vec3;
use log::trace;

use crate::core::clock::{GLYPH_COUNT, Glyph, layout_slots};
use crate::core::layer_stack::{LayerColor, LayerId, LayerStyle};
use crate::core::projection::SceneProjection;
use crate::render::{FontChoice, FontVariable, Renderer, SceneRotation};

/// Colour of the front layer.
pub const FRONT_COLOR: Color32 = Color32::from_rgb(0, 255, 65);
/// Glow under the front layer.
pub const FRONT_GLOW: Color32 = Color32::from_rgb(180, 255, 190);
pub const BACKGROUND: Color32 = Color32::BLACK;

/// Halo offsets for the glow pass, in fractions of the glyph size.
const GLOW_OFFSETS: [(f32, f32); 4] = [(-0.02, 0.0), (0.02, 0.0), (0.0, -0.02), (0.0, 0.02)];

#[derive(Debug, Clone)]
struct LayerNode {
    glyphs: [Glyph; GLYPH_COUNT],
    /// Unset until the first restyle after creation.
    style: Option<LayerStyle>,
}

#[derive(Debug)]
pub struct StageRenderer {
    nodes: BTreeMap<LayerId, LayerNode>,
    projection: SceneProjection,
    rotation: SceneRotation,
    font_size: f32,
    font_family: FontChoice,
}

impl Default for StageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StageRenderer {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            projection: SceneProjection::default(),
            rotation: SceneRotation::default(),
            font_size: 140.0,
            font_family: FontChoice::default(),
        }
    }

    pub fn layer_count(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub(crate) fn rotation(&self) -> SceneRotation {
        self.rotation
    }

    #[cfg(test)]
    pub(crate) fn font_size(&self) -> f32 {
        self.font_size
    }

    #[cfg(test)]
    pub(crate) fn font_family(&self) -> FontChoice {
        self.font_family
    }

    /// Paint all styled layers into `rect`, deepest first.
    pub fn paint(&self, painter: &egui::Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, BACKGROUND);

        let mut styled: Vec<(&LayerNode, &LayerStyle)> = self
            .nodes
            .values()
            .filter_map(|node| node.style.as_ref().map(|style| (node, style)))
            .collect();
        styled.sort_by(|a, b| b.1.depth_index.cmp(&a.1.depth_index));

        let center = rect.center();
        for (node, style) in styled {
            self.paint_layer(painter, center, node, style);
        }
    }

    fn paint_layer(&self, painter: &egui::Painter, center: Pos2, node: &LayerNode, style: &LayerStyle) {
        if style.opacity <= 0.0 {
            return;
        }
        let (text, glow) = layer_colors(style);
        let family = self.font_family.family();

        for slot in layout_slots(&node.glyphs, self.font_size) {
            let Some(p) = self.projection.project(Vec3::new(slot.center_x, 0.0, -style.depth)) else {
                continue;
            };
            let pos = center + Vec2::new(p.offset.x, p.offset.y);
            let size = self.font_size * p.scale;
            let font = FontId::new(size, family.clone());
            let glyph = slot.glyph.as_char().to_string();

            for (dx, dy) in GLOW_OFFSETS {
                painter.text(
                    pos + Vec2::new(dx * size, dy * size),
                    egui::Align2::CENTER_CENTER,
                    &glyph,
                    font.clone(),
                    glow,
                );
            }
            painter.text(pos, egui::Align2::CENTER_CENTER, &glyph, font, text);
        }
    }
}

/// Text and glow colours for a style, opacity folded into alpha.
pub fn layer_colors(style: &LayerStyle) -> (Color32, Color32) {
    let opacity = style.opacity.clamp(0.0, 1.0);
    match style.color {
        LayerColor::Front => (
            FRONT_COLOR.gamma_multiply(opacity),
            FRONT_GLOW.gamma_multiply(LayerColor::GLOW_ALPHA * opacity),
        ),
        LayerColor::Faded { green } => {
            let base = Color32::from_rgb(0, green, 0);
            (
                base.gamma_multiply(opacity),
                base.gamma_multiply(LayerColor::GLOW_ALPHA * opacity),
            )
        }
    }
}

impl Renderer for StageRenderer {
    fn add_layer(&mut self, id: LayerId, glyphs: &[Glyph; GLYPH_COUNT]) {
        self.nodes.insert(
            id,
            LayerNode {
                glyphs: *glyphs,
                style: None,
            },
        );
    }

    fn remove_layer(&mut self, id: LayerId) {
        if self.nodes.remove(&id).is_none() {
            trace!("Stage: layer {} already detached", id.0);
        }
    }

    fn style_layer(&mut self, id: LayerId, style: &LayerStyle) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.style = Some(*style);
        }
    }

    fn set_scene_rotation(&mut self, rotation: SceneRotation) {
        if self.rotation == rotation {
            return;
        }
        self.rotation = rotation;
        self.projection.set_rotation(rotation);
        trace!("Stage: scene transform {}", rotation);
    }

    fn set_font_variable(&mut self, var: FontVariable) {
        match var {
            FontVariable::Size(px) => self.font_size = px,
            FontVariable::Family(family) => self.font_family = family,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ClockReading;
    use crate::core::layer_stack::{LayerStack, MAX_LAYERS};

    #[test]
    fn test_tracks_stack() {
        let mut stack = LayerStack::new();
        let mut stage = StageRenderer::new();
        for s in 0..20 {
            stack.tick(ClockReading::new(10, 0, s), &mut stage);
        }
        assert_eq!(stage.layer_count(), MAX_LAYERS);
        assert!(stage.nodes.values().all(|n| n.style.is_some()));
    }

    #[test]
    fn test_remove_detached_is_noop() {
        let mut stage = StageRenderer::new();
        stage.add_layer(LayerId(1), &ClockReading::new(1, 2, 3).glyphs());
        stage.remove_layer(LayerId(1));
        stage.remove_layer(LayerId(1));
        stage.remove_layer(LayerId(99));
        assert_eq!(stage.layer_count(), 0);
    }

    #[test]
    fn test_style_unknown_layer_ignored() {
        let mut stage = StageRenderer::new();
        stage.style_layer(LayerId(5), &LayerStyle::for_depth(0, MAX_LAYERS));
        assert_eq!(stage.layer_count(), 0);
    }

    #[test]
    fn test_scene_and_font_variables() {
        let mut stage = StageRenderer::new();
        stage.set_scene_rotation(SceneRotation { x_deg: 30.0, y_deg: -15.0 });
        stage.set_font_variable(FontVariable::Size(72.0));
        stage.set_font_variable(FontVariable::Family(FontChoice::Proportional));
        assert_eq!(stage.rotation(), SceneRotation { x_deg: 30.0, y_deg: -15.0 });
        assert_eq!(stage.font_size(), 72.0);
        assert_eq!(stage.font_family(), FontChoice::Proportional);
    }

    #[test]
    fn test_layer_colors() {
        let (front, _) = layer_colors(&LayerStyle::for_depth(0, MAX_LAYERS));
        assert_eq!(front, FRONT_COLOR);

        let style = LayerStyle::for_depth(3, MAX_LAYERS);
        let (text, glow) = layer_colors(&style);
        assert_eq!(text, Color32::from_rgb(0, 193, 0));
        assert!(glow.a() < text.a());

        let (faded, _) = layer_colors(&LayerStyle::for_depth(10, MAX_LAYERS));
        assert!(faded.a() < 255);
    }
}
