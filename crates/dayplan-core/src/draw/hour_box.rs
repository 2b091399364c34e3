//! Background boxes marking each visible hour.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, StrokeStyle},
    geometry::{Point, Size},
};

/// Visual definition shared by every hour box.
#[derive(Debug, Clone)]
pub struct HourBoxDefinition {
    stroke: StrokeDefinition,
    half_hour: Option<StrokeDefinition>,
}

impl HourBoxDefinition {
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self {
            stroke,
            half_hour: None,
        }
    }

    /// Draws a rule across the middle of each box (builder style).
    pub fn with_half_hour_rule(mut self, stroke: StrokeDefinition) -> Self {
        self.half_hour = Some(stroke);
        self
    }

    /// Recolors both the box outline and the half-hour rule.
    pub fn set_color(&mut self, color: Color) {
        self.stroke.set_color(color);
        if let Some(half_hour) = &mut self.half_hour {
            half_hour.set_color(color);
        }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn half_hour(&self) -> Option<&StrokeDefinition> {
        self.half_hour.as_ref()
    }
}

impl Default for HourBoxDefinition {
    fn default() -> Self {
        let grid = Color::new("#e4e4e4").expect("valid literal color");
        Self::new(StrokeDefinition::new(grid, 1.0))
            .with_half_hour_rule(StrokeDefinition::new(grid, 1.0).with_style(StrokeStyle::Dashed))
    }
}

/// One hour of the day grid.
#[derive(Debug, Clone)]
pub struct HourBox<'a> {
    definition: &'a HourBoxDefinition,
    size: Size,
}

impl<'a> HourBox<'a> {
    pub fn new(definition: &'a HourBoxDefinition, size: Size) -> Self {
        Self { definition, size }
    }
}

impl Drawable for HourBox<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let rect = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", "none");
        let rect = apply_stroke!(rect, self.definition.stroke());
        output.add_to_layer(RenderLayer::Grid, Box::new(rect));

        if let Some(stroke) = self.definition.half_hour() {
            let y = position.y() + self.size.height() / 2.0;
            let rule = svg_element::Line::new()
                .set("x1", position.x())
                .set("y1", y)
                .set("x2", position.x() + self.size.width())
                .set("y2", y);
            let rule = apply_stroke!(rule, stroke);
            output.add_to_layer(RenderLayer::Grid, Box::new(rule));
        }

        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_box_with_rule() {
        let def = HourBoxDefinition::default();
        let hour = HourBox::new(&def, Size::new(600.0, 60.0));

        let svg = hour.render_to_layers(Point::new(0.0, 60.0)).render()[0].to_string();
        assert!(svg.contains("data-layer=\"grid\""));
        assert!(svg.contains("<line"));
        assert!(svg.contains("y1=\"90\""));
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_hour_box_without_rule() {
        let def = HourBoxDefinition::new(StrokeDefinition::default());
        let hour = HourBox::new(&def, Size::new(600.0, 60.0));

        let svg = hour.render_to_layers(Point::default()).render()[0].to_string();
        assert!(svg.contains("<rect"));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn test_set_color_updates_rule() {
        let mut def = HourBoxDefinition::default();
        let blue = Color::new("blue").unwrap();
        def.set_color(blue);

        assert_eq!(def.stroke().color(), blue);
        assert_eq!(def.half_hour().map(StrokeDefinition::color), Some(blue));
    }
}
