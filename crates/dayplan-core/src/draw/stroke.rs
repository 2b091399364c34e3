//! Stroke definitions for outlines and grid rules.
//!
//! - [`StrokeDefinition`]: color, width and dash style of a line
//! - [`StrokeStyle`]: solid or patterned lines
//! - [`apply_stroke!`](crate::apply_stroke!): applies a definition to an SVG element
//!
//! ```
//! use dayplan_core::draw::{StrokeDefinition, StrokeStyle};
//! use dayplan_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("#d5d5d5").unwrap(), 1.0)
//!     .with_style(StrokeStyle::Dashed);
//! let rule = svg_element::Line::new().set("x1", 0).set("x2", 600);
//! let rule = dayplan_core::apply_stroke!(rule, &stroke);
//! ```

use crate::color::Color;

/// Line pattern of a stroke.
///
/// `Solid` lines carry no `stroke-dasharray`; `Dashed` lines use "5,5".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
        }
    }
}

/// Visual definition of a stroked line.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Sets the line pattern (builder style).
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Applies all attributes of a [`StrokeDefinition`] to an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
