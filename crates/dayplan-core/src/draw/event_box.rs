//! Event boxes.
//!
//! An [`EventBox`] is the rectangle drawn for one placed event: a filled,
//! outlined box with a colored accent bar along its left edge, the event name
//! and, beneath it, the event location.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, TextDefinition},
    geometry::{Bounds, Insets, Point, Size},
};

/// Shared visual definition for every event box on a day.
#[derive(Debug, Clone)]
pub struct EventBoxDefinition {
    fill: Color,
    stroke: StrokeDefinition,
    accent: Color,
    accent_width: f32,
    padding: Insets,
    name_text: TextDefinition,
    location_text: TextDefinition,
}

impl EventBoxDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn accent(&self) -> Color {
        self.accent
    }

    pub fn accent_width(&self) -> f32 {
        self.accent_width
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn name_text(&self) -> &TextDefinition {
        &self.name_text
    }

    pub fn location_text(&self) -> &TextDefinition {
        &self.location_text
    }

    /// Sets the box fill color.
    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    /// Sets the outline color, keeping the outline width.
    pub fn set_border(&mut self, border: Color) {
        self.stroke.set_color(border);
    }

    /// Sets the accent color; the event name is drawn in the same color.
    pub fn set_accent(&mut self, accent: Color) {
        self.accent = accent;
        self.name_text.set_color(Some(accent));
    }

    /// Sets the color of the location line.
    pub fn set_text_color(&mut self, color: Color) {
        self.location_text.set_color(Some(color));
    }
}

impl Default for EventBoxDefinition {
    fn default() -> Self {
        let accent = Color::new("#4b6ea9").expect("valid literal color");
        let border = Color::new("#d5d5d5").expect("valid literal color");
        let muted = Color::new("#666666").expect("valid literal color");

        Self {
            fill: Color::new("white").expect("valid literal color"),
            stroke: StrokeDefinition::new(border, 1.0),
            accent,
            accent_width: 4.0,
            padding: Insets::new(4.0, 6.0, 4.0, 6.0),
            name_text: TextDefinition::new()
                .with_font_size(14)
                .with_bold(true)
                .with_color(accent),
            location_text: TextDefinition::new().with_font_size(12).with_color(muted),
        }
    }
}

/// The drawable for one event.
#[derive(Debug, Clone)]
pub struct EventBox<'a> {
    definition: &'a EventBoxDefinition,
    name: &'a str,
    location: &'a str,
    size: Size,
}

impl<'a> EventBox<'a> {
    /// Creates an event box of the given size.
    pub fn new(
        definition: &'a EventBoxDefinition,
        name: &'a str,
        location: &'a str,
        size: Size,
    ) -> Self {
        Self {
            definition,
            name,
            location,
            size,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn location(&self) -> &str {
        self.location
    }

    /// Area left for the labels once the accent bar and padding are taken out.
    fn label_bounds(&self, bounds: Bounds) -> Bounds {
        let padding = self.definition.padding();
        bounds.shrink(Insets::new(
            padding.top(),
            padding.right(),
            padding.bottom(),
            self.definition.accent_width() + padding.left(),
        ))
    }
}

impl Drawable for EventBox<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = Bounds::new_from_top_left(position, self.size);

        let body = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", self.definition.fill())
            .set("fill-opacity", self.definition.fill().alpha());
        let body = apply_stroke!(body, self.definition.stroke());
        output.add_to_layer(RenderLayer::Event, Box::new(body));

        let accent_width = self.definition.accent_width().min(bounds.width());
        let accent = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", accent_width)
            .set("height", bounds.height())
            .set("fill", self.definition.accent());
        output.add_to_layer(RenderLayer::Event, Box::new(accent));

        let name_position = self.label_bounds(bounds).min_point();
        let name = svg_element::Text::new(self.name)
            .set("x", name_position.x())
            .set("y", name_position.y())
            .set("dominant-baseline", "hanging");
        output.add_to_layer(
            RenderLayer::Text,
            Box::new(self.definition.name_text().style(name)),
        );

        let location_y = name_position.y() + self.definition.name_text().line_height();
        let location = svg_element::Text::new(self.location)
            .set("x", name_position.x())
            .set("y", location_y)
            .set("dominant-baseline", "hanging");
        output.add_to_layer(
            RenderLayer::Text,
            Box::new(self.definition.location_text().style(location)),
        );

        output
    }

    fn size(&self) -> Size {
        self.size
    }
}
