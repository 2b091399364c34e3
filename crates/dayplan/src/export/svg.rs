//! SVG rendering of a laid-out day.
//!
//! The document is laid out as:
//!
//! ```text
//! +---------+---------------------------+
//! |         padding                     |
//! |  9:00AM +---------------------------+
//! |         |  hour box                 |
//! |    9:30 |- - - - - - - - - - - - - -|
//! |         |  events ...               |
//! | gutter  |        event area         |
//! ```
//!
//! Time marks are right-aligned in the gutter against the event area.

use std::io;

use log::{debug, trace};
use svg::{Document, node::element as svg_element};

use dayplan_core::{
    draw::{
        Drawable, EventBox, EventBoxDefinition, HourBox, HourBoxDefinition, LayeredOutput,
        RenderLayer, TimeMark, TimeMarkDefinition,
    },
    event::{Event, Placed},
    geometry::{Bounds, Insets, Point, Size},
    interval::TimeSpan,
};

use super::{Error, Exporter, canvas::Canvas};
use crate::{
    config::{CalendarConfig, StyleConfig},
    error::DayplanError,
};

/// Label shown for events without a name.
pub const SAMPLE_NAME: &str = "Sample name";
/// Label shown for events without a location.
pub const SAMPLE_LOCATION: &str = "Sample location";

/// Gap between a time mark and the event area.
const MARK_GAP: f32 = 8.0;

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    calendar: Option<&'a CalendarConfig>,
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas configuration.
    pub fn with_calendar(mut self, calendar: &'a CalendarConfig) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Sets the style configuration.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Validates the configuration and builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`DayplanError::Config`] for an undrawable calendar or an
    /// unparsable color.
    pub fn build(self) -> Result<Svg, DayplanError> {
        let calendar = self.calendar.cloned().unwrap_or_default();
        calendar.validate().map_err(DayplanError::Config)?;

        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        let mut event_box = EventBoxDefinition::default();
        if let Some(fill) = style.event_fill().map_err(DayplanError::Config)? {
            event_box.set_fill(fill);
        }
        if let Some(border) = style.event_border().map_err(DayplanError::Config)? {
            event_box.set_border(border);
        }
        if let Some(accent) = style.event_accent().map_err(DayplanError::Config)? {
            event_box.set_accent(accent);
        }

        let mut time_mark = TimeMarkDefinition::default();
        if let Some(text) = style.text_color().map_err(DayplanError::Config)? {
            event_box.set_text_color(text);
            time_mark.set_color(text);
        }

        let mut hour_box = HourBoxDefinition::default();
        if let Some(grid) = style.grid_color().map_err(DayplanError::Config)? {
            hour_box.set_color(grid);
        }

        let background = style
            .background_color()
            .map_err(DayplanError::Config)?
            .map(|color| color.to_string())
            .unwrap_or_else(|| "white".to_string());

        Ok(Svg {
            canvas: Canvas::new(&calendar),
            calendar,
            background,
            event_box,
            hour_box,
            time_mark,
        })
    }
}

/// SVG exporter for one day.
#[derive(Debug)]
pub struct Svg {
    calendar: CalendarConfig,
    canvas: Canvas,
    background: String,
    event_box: EventBoxDefinition,
    hour_box: HourBoxDefinition,
    time_mark: TimeMarkDefinition,
}

impl Svg {
    /// Top-left corner of the event area in document coordinates.
    fn origin(&self) -> Point {
        let padding = self.calendar.padding();
        Point::new(padding + self.calendar.gutter_width(), padding)
    }

    /// Bounds of the gutter and the event area together, before padding.
    fn content_bounds(&self) -> Bounds {
        let height = self.canvas.size().height();
        let gutter_width = self.calendar.gutter_width();

        let gutter = Bounds::new_from_top_left(Point::default(), Size::new(gutter_width, height));
        let events = Bounds::new_from_top_left(Point::new(gutter_width, 0.0), self.canvas.size());
        gutter.merge(&events)
    }

    /// Full document size, including gutter and padding.
    pub fn document_size(&self) -> Size {
        self.content_bounds()
            .to_size()
            .add_padding(Insets::uniform(self.calendar.padding()))
    }

    /// Renders the placed events into a complete SVG document.
    pub fn render_day(&self, placed: &[Placed<Event>]) -> Document {
        let size = self.document_size();
        let mut output = LayeredOutput::new();

        let background = svg_element::Rectangle::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", self.background.as_str());
        output.add_to_layer(RenderLayer::Background, Box::new(background));

        output.merge(self.render_hours());
        output.merge(self.render_time_marks());
        for event in placed {
            output.merge(self.render_event(event));
        }

        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .set("width", size.width())
            .set("height", size.height());

        output
            .render()
            .into_iter()
            .fold(doc, |doc, node| doc.add(node))
    }

    fn render_hours(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let origin = self.origin();
        let hour_size = Size::new(self.canvas.size().width(), self.canvas.hour_height());

        for hour in 0..self.calendar.hours() {
            let hour_box = HourBox::new(&self.hour_box, hour_size);
            let position = origin.add_point(Point::new(0.0, self.canvas.y(i32::from(hour) * 60)));
            output.merge(hour_box.render_to_layers(position));
        }

        output
    }

    fn render_time_marks(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let origin = self.origin();
        let start = self.calendar.start_hour();
        let end = self.calendar.end_hour();

        for hour in start..=end {
            for minutes in [0u8, 30] {
                if hour == end && minutes == 30 {
                    continue;
                }

                let mark = TimeMark::new(&self.time_mark, hour, minutes);
                let offset = i32::from(hour - start) * 60 + i32::from(minutes);
                let position = Point::new(
                    origin.x() - MARK_GAP - mark.size().width(),
                    origin.y() + self.canvas.y(offset),
                );
                output.merge(mark.render_to_layers(position));
            }
        }

        output
    }

    fn render_event(&self, placed: &Placed<Event>) -> LayeredOutput {
        let bounds = self.canvas.bounds(placed).translate(self.origin());
        let event = placed.item();
        trace!(
            start = event.start(),
            end = event.end(),
            column = placed.column(),
            clashes = placed.clashes();
            "Rendering event"
        );

        let event_box = EventBox::new(
            &self.event_box,
            event.name().unwrap_or(SAMPLE_NAME),
            event.location().unwrap_or(SAMPLE_LOCATION),
            bounds.to_size(),
        );
        event_box.render_to_layers(bounds.min_point())
    }
}

impl Exporter for Svg {
    fn export_day<W: io::Write>(
        &mut self,
        placed: &[Placed<Event>],
        writer: W,
    ) -> Result<(), Error> {
        let doc = self.render_day(placed);
        debug!(events = placed.len(); "Writing SVG document");
        svg::write(writer, &doc).map_err(Error::Io)
    }
}

#[cfg(test)]
mod tests {
    use dayplan_core::color::Color;

    use super::*;

    fn sample_day() -> Vec<Placed<Event>> {
        crate::layout::layout_day(&[
            Event::new(30, 150),
            Event::new(540, 600).with_name("Retro").with_location("Room 2"),
            Event::new(560, 620),
            Event::new(610, 670),
        ])
        .unwrap()
    }

    fn render(svg: &mut Svg, placed: &[Placed<Event>]) -> String {
        let mut buffer = Vec::new();
        svg.export_day(placed, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_document_size_includes_gutter_and_padding() {
        let svg = SvgBuilder::new().build().unwrap();
        let size = svg.document_size();
        assert_eq!(size, Size::new(720.0, 760.0));
    }

    #[test]
    fn test_renders_every_event() {
        let mut svg = SvgBuilder::new().build().unwrap();
        let output = render(&mut svg, &sample_day());

        assert!(output.starts_with("<svg"));
        assert!(output.contains("Retro"));
        assert!(output.contains("Room 2"));
        assert_eq!(output.matches(SAMPLE_NAME).count(), 3);
        assert_eq!(output.matches(SAMPLE_LOCATION).count(), 3);
    }

    #[test]
    fn test_event_positions() {
        let mut svg = SvgBuilder::new().build().unwrap();
        let placed = vec![Placed::new(Event::new(560, 620), 1, 1)];
        let output = render(&mut svg, &placed);

        // Event area starts at (100, 20) with the default gutter and padding
        assert!(output.contains("x=\"400\""));
        assert!(output.contains("y=\"580\""));
        assert!(output.contains("width=\"300\""));
        assert!(output.contains("height=\"60\""));
    }

    #[test]
    fn test_time_marks_cover_visible_range() {
        let mut svg = SvgBuilder::new().build().unwrap();
        let output = render(&mut svg, &[]);

        assert_eq!(output.matches("class=\"time-mark\"").count(), 13);
        assert_eq!(output.matches("class=\"time-mark minor\"").count(), 12);
    }

    #[test]
    fn test_no_half_hour_mark_past_the_end() {
        let calendar = CalendarConfig::new(600.0, 180.0, 9, 12);
        let mut svg = SvgBuilder::new().with_calendar(&calendar).build().unwrap();
        let output = render(&mut svg, &[]);

        assert!(output.contains("11:30"));
        assert!(output.contains("12:00"));
        assert!(!output.contains("12:30"));
        assert_eq!(output.matches("AM").count(), 3);
        assert_eq!(output.matches("PM").count(), 1);
    }

    #[test]
    fn test_layers_are_ordered() {
        let mut svg = SvgBuilder::new().build().unwrap();
        let output = render(&mut svg, &sample_day());

        let grid = output.find("data-layer=\"grid\"").unwrap();
        let event = output.find("data-layer=\"event\"").unwrap();
        let text = output.find("data-layer=\"text\"").unwrap();
        assert!(grid < event);
        assert!(event < text);
    }

    #[test]
    fn test_style_overrides() {
        let style: StyleConfig = toml::from_str(
            r##"
            background_color = "#fafafa"
            event_accent = "#ff0000"
            "##,
        )
        .unwrap();
        let mut svg = SvgBuilder::new().with_style(&style).build().unwrap();
        let output = render(&mut svg, &sample_day());

        let background = Color::new("#fafafa").unwrap().to_string();
        let accent = Color::new("#ff0000").unwrap().to_string();
        assert!(output.contains(&format!("fill=\"{background}\"")));
        assert!(output.contains(&format!("fill=\"{accent}\"")));
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let calendar = CalendarConfig::new(600.0, 720.0, 18, 9);
        let err = SvgBuilder::new().with_calendar(&calendar).build().unwrap_err();
        assert!(matches!(err, DayplanError::Config(_)));

        let style: StyleConfig = toml::from_str("grid_color = \"plaid\"").unwrap();
        let err = SvgBuilder::new().with_style(&style).build().unwrap_err();
        assert!(err.to_string().contains("plaid"));
    }
}
