//! Text styles shared by the calendar labels.
//!
//! [`TextDefinition`] carries the font and color of a label and estimates the
//! space a label needs. Drawables build their own SVG `<text>` elements and
//! apply the style with [`TextDefinition::style`].

use svg::node::element as svg_element;

use crate::{color::Color, geometry::Size};

/// Average advance of a glyph relative to the font size.
///
/// No font shaping happens here, so sizes are estimates good enough for
/// spacing labels and sizing the time gutter.
const GLYPH_WIDTH_RATIO: f32 = 0.55;

/// Line height relative to the font size.
const LINE_HEIGHT_RATIO: f32 = 1.25;

/// Horizontal alignment of a label relative to its position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the left edge of the text
    #[default]
    Start,
    /// The position is the right edge of the text
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Defines the visual style for labels.
///
/// # Examples
///
/// ```
/// # use dayplan_core::draw::TextDefinition;
/// # use dayplan_core::color::Color;
/// let style = TextDefinition::new()
///     .with_font_size(14)
///     .with_bold(true)
///     .with_color(Color::new("navy").unwrap());
/// assert_eq!(style.font_size(), 14);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
    color: Option<Color>,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Creates a new text definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Replaces the text color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    /// Height of one line of text in this style.
    pub fn line_height(&self) -> f32 {
        f32::from(self.font_size) * LINE_HEIGHT_RATIO
    }

    /// Estimates the rendered size of `content` in this style.
    pub fn measure(&self, content: &str) -> Size {
        let glyphs = content.chars().count() as f32;
        Size::new(
            glyphs * f32::from(self.font_size) * GLYPH_WIDTH_RATIO,
            self.line_height(),
        )
    }

    /// Applies font and color attributes to an SVG text element.
    pub fn style(&self, text: svg_element::Text) -> svg_element::Text {
        let mut text = text
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size)
            .set("text-anchor", self.anchor.to_svg_value());

        if self.bold {
            text = text.set("font-weight", "bold");
        }

        if let Some(color) = self.color {
            text = text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        text
    }
}

impl Default for TextDefinition {
    /// Defaults: "sans-serif", 12px, regular weight, inherited color, start-anchored.
    fn default() -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size: 12,
            bold: false,
            color: None,
            anchor: TextAnchor::Start,
        }
    }
}
