//! Clock layer stack - one translucent snapshot per second, receding in depth.
//!
//! Layers live in a `VecDeque` ordered newest-first. Position in the deque is
//! the only record of age: index 0 is the front layer, index `len - 1` the
//! oldest. Nothing stores an index, so nothing can drift out of sync with it.
//!
//! Each tick:
//! 1. push a fresh layer at the front
//! 2. evict the tail if the stack is over capacity
//! 3. restyle every live layer from its current index

use std::collections::VecDeque;

use log::{debug, trace};

use super::clock::{ClockReading, GLYPH_COUNT, Glyph};
use crate::render::Renderer;

/// Maximum live layers.
pub const MAX_LAYERS: usize = 12;
/// Depth units between consecutive layers.
pub const LAYER_SPACING: f32 = 80.0;
/// Layers up to and including this index stay fully opaque.
pub const OPAQUE_DEPTH: usize = 4;
/// Brightness lost per depth index.
pub const BRIGHTNESS_STEP: f32 = 0.08;
/// Brightness never drops below this.
pub const MIN_BRIGHTNESS: f32 = 0.2;

/// Stable identity of a rendered layer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

/// One rendered clock snapshot. Content is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    id: LayerId,
    reading: ClockReading,
    glyphs: [Glyph; GLYPH_COUNT],
}

impl Layer {
    fn new(id: LayerId, reading: ClockReading) -> Self {
        Self {
            id,
            reading,
            glyphs: reading.glyphs(),
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn reading(&self) -> ClockReading {
        self.reading
    }

    pub fn glyphs(&self) -> &[Glyph; GLYPH_COUNT] {
        &self.glyphs
    }
}

/// Text colour of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerColor {
    /// Distinct styling reserved for the newest layer.
    Front,
    /// `rgb(0, green, 0)` with a same-coloured glow at 50% alpha.
    Faded { green: u8 },
}

impl LayerColor {
    /// Glow alpha relative to the text colour.
    pub const GLOW_ALPHA: f32 = 0.5;

    pub fn for_depth(index: usize) -> Self {
        if index == 0 {
            return LayerColor::Front;
        }
        let brightness = (1.0 - index as f32 * BRIGHTNESS_STEP).max(MIN_BRIGHTNESS);
        LayerColor::Faded {
            green: (255.0 * brightness).floor() as u8,
        }
    }
}

/// Presentation of a layer at a given depth index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub depth_index: usize,
    pub color: LayerColor,
    pub opacity: f32,
    /// Distance pushed away from the viewer.
    pub depth: f32,
}

impl LayerStyle {
    /// Style for `index` in a stack capped at `capacity`.
    pub fn for_depth(index: usize, capacity: usize) -> Self {
        Self {
            depth_index: index,
            color: LayerColor::for_depth(index),
            opacity: opacity_for_depth(index, capacity),
            depth: index as f32 * LAYER_SPACING,
        }
    }

    pub fn is_front(&self) -> bool {
        self.depth_index == 0
    }
}

/// Opacity falloff: opaque through `OPAQUE_DEPTH`, then linear toward 0 at `capacity`.
///
/// The floor at 0 only matters when `capacity` allows indices past the ramp,
/// but it is kept regardless of the current constant.
pub fn opacity_for_depth(index: usize, capacity: usize) -> f32 {
    if index <= OPAQUE_DEPTH {
        return 1.0;
    }
    // index > OPAQUE_DEPTH implies capacity > OPAQUE_DEPTH + 1 for any live layer
    let ramp = capacity.saturating_sub(OPAQUE_DEPTH).max(1) as f32;
    let opacity = 1.0 - (index - OPAQUE_DEPTH) as f32 / ramp;
    opacity.max(0.0)
}

/// Depth-ordered sequence of live layers.
#[derive(Debug)]
pub struct LayerStack {
    layers: VecDeque<Layer>,
    capacity: usize,
    next_id: u64,
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStack {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LAYERS)
    }

    /// Stack with a non-default cap (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            layers: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_id: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Live layers, newest first. Iteration index == depth index.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    pub fn front(&self) -> Option<&Layer> {
        self.layers.front()
    }

    /// Depth index of a live layer.
    pub fn depth_of(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    /// Insert a layer for `reading`, evict past capacity, restyle the rest.
    ///
    /// Returns the id of the new front layer.
    pub fn tick<R: Renderer + ?Sized>(&mut self, reading: ClockReading, renderer: &mut R) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        let layer = Layer::new(id, reading);
        renderer.add_layer(id, layer.glyphs());
        self.layers.push_front(layer);
        trace!("Layer {} added: {}", id.0, reading);

        if self.layers.len() > self.capacity
            && let Some(evicted) = self.layers.pop_back()
        {
            renderer.remove_layer(evicted.id);
            debug!("Layer {} evicted ({})", evicted.id.0, evicted.reading);
        }

        for (index, layer) in self.layers.iter().enumerate() {
            renderer.style_layer(layer.id, &LayerStyle::for_depth(index, self.capacity));
        }

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{FontVariable, SceneRotation};
    use std::collections::HashMap;

    /// Renderer that keeps the attached node set and every call it received.
    #[derive(Default)]
    struct RecordingRenderer {
        nodes: HashMap<LayerId, [Glyph; GLYPH_COUNT]>,
        styles: HashMap<LayerId, LayerStyle>,
        added: Vec<LayerId>,
        removed: Vec<LayerId>,
    }

    impl Renderer for RecordingRenderer {
        fn add_layer(&mut self, id: LayerId, glyphs: &[Glyph; GLYPH_COUNT]) {
            self.nodes.insert(id, *glyphs);
            self.added.push(id);
        }

        fn remove_layer(&mut self, id: LayerId) {
            self.nodes.remove(&id);
            self.styles.remove(&id);
            self.removed.push(id);
        }

        fn style_layer(&mut self, id: LayerId, style: &LayerStyle) {
            assert!(self.nodes.contains_key(&id), "styled a detached layer");
            self.styles.insert(id, *style);
        }

        fn set_scene_rotation(&mut self, _rotation: SceneRotation) {}

        fn set_font_variable(&mut self, _var: FontVariable) {}
    }

    fn reading(n: u32) -> ClockReading {
        ClockReading::new((n / 3600 % 24) as u8, (n / 60 % 60) as u8, (n % 60) as u8)
    }

    #[test]
    fn test_len_is_min_of_ticks_and_cap() {
        let mut stack = LayerStack::new();
        let mut renderer = RecordingRenderer::default();
        for n in 1..=30u32 {
            stack.tick(reading(n), &mut renderer);
            assert_eq!(stack.len(), (n as usize).min(MAX_LAYERS));
            assert_eq!(renderer.nodes.len(), stack.len());
        }
    }

    #[test]
    fn test_thirteenth_tick_evicts_first() {
        let mut stack = LayerStack::new();
        let mut renderer = RecordingRenderer::default();
        let first = stack.tick(reading(1), &mut renderer);
        for n in 2..=12 {
            stack.tick(reading(n), &mut renderer);
        }
        assert!(renderer.removed.is_empty());
        assert_eq!(stack.depth_of(first), Some(11));

        stack.tick(reading(13), &mut renderer);
        assert_eq!(renderer.removed, vec![first]);
        assert_eq!(stack.depth_of(first), None);
        assert!(stack.iter().all(|l| l.reading() != reading(1)));

        // Exactly one removal per tick from here on
        for n in 14..=20 {
            let before = renderer.removed.len();
            stack.tick(reading(n), &mut renderer);
            assert_eq!(renderer.removed.len(), before + 1);
        }
    }

    #[test]
    fn test_newest_is_front_and_order_by_age() {
        let mut stack = LayerStack::new();
        let mut renderer = RecordingRenderer::default();
        for n in 1..=15 {
            let id = stack.tick(reading(n), &mut renderer);
            assert_eq!(stack.front().map(Layer::id), Some(id));
            assert_eq!(renderer.styles[&id].depth_index, 0);
        }
        // Ids are monotonically assigned, so newer layers have larger ids
        let ids: Vec<LayerId> = stack.iter().map(Layer::id).collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
        for (index, id) in ids.iter().enumerate() {
            assert_eq!(renderer.styles[id].depth_index, index);
            assert_eq!(renderer.styles[id].depth, index as f32 * LAYER_SPACING);
        }
    }

    #[test]
    fn test_front_styling_only_at_zero() {
        assert_eq!(LayerColor::for_depth(0), LayerColor::Front);
        for i in 1..MAX_LAYERS {
            assert!(matches!(LayerColor::for_depth(i), LayerColor::Faded { .. }));
        }
        assert!(LayerStyle::for_depth(0, MAX_LAYERS).is_front());
        assert!(!LayerStyle::for_depth(1, MAX_LAYERS).is_front());
    }

    #[test]
    fn test_brightness_monotonic_with_floor() {
        let greens: Vec<u8> = (1..40)
            .map(|i| match LayerColor::for_depth(i) {
                LayerColor::Faded { green } => green,
                LayerColor::Front => unreachable!(),
            })
            .collect();
        assert!(greens.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(*greens.last().unwrap(), 51);
        assert!(greens.iter().all(|g| *g >= 51));
        // 1 - 0.08 = 0.92 -> floor(234.6)
        assert_eq!(greens[0], 234);
    }

    #[test]
    fn test_opacity_falloff() {
        for i in 0..=4 {
            assert_eq!(opacity_for_depth(i, MAX_LAYERS), 1.0);
        }
        let tail: Vec<f32> = (5..MAX_LAYERS).map(|i| opacity_for_depth(i, MAX_LAYERS)).collect();
        assert!(tail.windows(2).all(|w| w[0] > w[1]));
        assert!(tail.iter().all(|o| *o > 0.0 && *o < 1.0));
        assert!((opacity_for_depth(5, MAX_LAYERS) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_opacity_clamped_past_ramp() {
        assert_eq!(opacity_for_depth(12, 12), 0.0);
        assert_eq!(opacity_for_depth(20, 12), 0.0);

        // A larger cap keeps layers past the ramp alive; they must sit at 0, not below
        let mut stack = LayerStack::with_capacity(16);
        let mut renderer = RecordingRenderer::default();
        for n in 1..=16 {
            stack.tick(reading(n), &mut renderer);
        }
        assert!(renderer.styles.values().all(|s| s.opacity >= 0.0));
    }

    #[test]
    fn test_layer_content_frozen() {
        let mut stack = LayerStack::new();
        let mut renderer = RecordingRenderer::default();
        let id = stack.tick(ClockReading::new(9, 5, 7), &mut renderer);
        for n in 100..105 {
            stack.tick(reading(n), &mut renderer);
        }
        let chars: String = renderer.nodes[&id].iter().map(Glyph::as_char).collect();
        assert_eq!(chars, "09:05:07");
    }

    #[test]
    fn test_small_capacity() {
        let mut stack = LayerStack::with_capacity(0);
        let mut renderer = RecordingRenderer::default();
        stack.tick(reading(1), &mut renderer);
        stack.tick(reading(2), &mut renderer);
        assert_eq!(stack.capacity(), 1);
        assert_eq!(stack.len(), 1);
        assert_eq!(renderer.removed.len(), 1);
    }
}
