//! Layer-based rendering system for SVG output.
//!
//! Drawables add their SVG elements to a [`LayeredOutput`], tagging each with
//! a [`RenderLayer`]. When rendered, nodes are grouped per layer and emitted
//! bottom to top, so the hour grid always sits under the events and the
//! event labels always sit above every event box.
//!
//! # Example
//!
//! ```
//! # use dayplan_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! let bg = Rectangle::new().set("fill", "white");
//! output.add_to_layer(RenderLayer::Background, Box::new(bg));
//!
//! let text = svg::node::element::Text::new("9:00");
//! output.add_to_layer(RenderLayer::Text, Box::new(text));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas fills - renders first
    Background,
    /// Hour boxes and half-hour rules
    Grid,
    /// Event boxes and their accent bars
    Event,
    /// Event labels and time marks
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Grid => "grid",
            Self::Event => "event",
            Self::Text => "text",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes are kept in insertion order within their layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable, so insertion order survives within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
