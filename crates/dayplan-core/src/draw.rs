//! Drawable Components for the Calendar View
//!
//! This module provides drawable abstractions for the pieces of a rendered
//! calendar day. All drawable components implement the [`Drawable`] trait,
//! which provides a consistent interface for rendering to layered SVG output
//! and reporting size.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are automatically
//! ordered during final SVG generation. An [`EventBox`], for example, puts its
//! rectangle on the [`RenderLayer::Event`] layer and its labels on the
//! [`RenderLayer::Text`] layer so that no box can cover another box's text.
//!
//! # Positioning
//!
//! Calendar drawables are anchored at their top-left corner: the `position`
//! passed to [`Drawable::render_to_layers`] is the minimum point of the
//! drawable's bounds.

mod event_box;
mod hour_box;
mod layer;
mod stroke;
mod text;
mod time_mark;

pub use event_box::{EventBox, EventBoxDefinition};
pub use hour_box::{HourBox, HourBoxDefinition};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{TextAnchor, TextDefinition};
pub use time_mark::{TimeMark, TimeMarkDefinition, twelve_hour_time};

use crate::geometry::{Point, Size};

/// Trait for calendar elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// # Arguments
    ///
    /// * `position` - The top-left corner where this drawable should be rendered
    ///
    /// # Returns
    ///
    /// A [`LayeredOutput`] containing the SVG nodes organized by layer.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
