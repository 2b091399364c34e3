//! Time-axis labels.
//!
//! The calendar gutter carries a [`TimeMark`] at every hour and half hour.
//! Marks on the hour are "major": they are drawn in the major style and carry
//! an `AM`/`PM` suffix. Half-hour marks are drawn in the quieter minor style.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, TextAnchor, TextDefinition},
    geometry::{Point, Size},
};

/// Formats a time of day on the twelve-hour clock, without the meridiem.
///
/// # Examples
///
/// ```
/// # use dayplan_core::draw::twelve_hour_time;
/// assert_eq!(twelve_hour_time(9, 0), "9:00");
/// assert_eq!(twelve_hour_time(13, 30), "1:30");
/// assert_eq!(twelve_hour_time(12, 0), "12:00");
/// assert_eq!(twelve_hour_time(0, 5), "12:05");
/// ```
pub fn twelve_hour_time(hour: u8, minutes: u8) -> String {
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minutes:02}")
}

fn meridiem(hour: u8) -> &'static str {
    if hour % 24 < 12 { "AM" } else { "PM" }
}

/// Text styles for major and minor marks.
#[derive(Debug, Clone)]
pub struct TimeMarkDefinition {
    major: TextDefinition,
    minor: TextDefinition,
    suffix: TextDefinition,
}

impl TimeMarkDefinition {
    pub fn major(&self) -> &TextDefinition {
        &self.major
    }

    pub fn minor(&self) -> &TextDefinition {
        &self.minor
    }

    pub fn suffix(&self) -> &TextDefinition {
        &self.suffix
    }

    /// Recolors every mark style.
    pub fn set_color(&mut self, color: Color) {
        self.major.set_color(Some(color));
        self.suffix.set_color(Some(color));
        self.minor.set_color(Some(color.with_alpha(0.6)));
    }
}

impl Default for TimeMarkDefinition {
    fn default() -> Self {
        let ink = Color::new("#333333").expect("valid literal color");
        let faded = Color::new("#999999").expect("valid literal color");

        Self {
            major: TextDefinition::new()
                .with_font_size(13)
                .with_bold(true)
                .with_color(ink)
                .with_anchor(TextAnchor::End),
            minor: TextDefinition::new()
                .with_font_size(11)
                .with_color(faded)
                .with_anchor(TextAnchor::End),
            suffix: TextDefinition::new()
                .with_font_size(10)
                .with_color(faded)
                .with_anchor(TextAnchor::End),
        }
    }
}

/// A label on the time axis.
///
/// The mark is positioned by the top-left corner of its label box; the text
/// is right-aligned within that box and vertically centered on its top edge,
/// so the label lines up with the grid rule at the same time.
#[derive(Debug, Clone)]
pub struct TimeMark<'a> {
    definition: &'a TimeMarkDefinition,
    hour: u8,
    minutes: u8,
}

impl<'a> TimeMark<'a> {
    pub fn new(definition: &'a TimeMarkDefinition, hour: u8, minutes: u8) -> Self {
        Self {
            definition,
            hour,
            minutes,
        }
    }

    /// Returns `true` for marks on the hour.
    pub fn is_major(&self) -> bool {
        self.minutes == 0
    }

    /// Returns the clock text of this mark, e.g. `"9:30"`.
    pub fn label(&self) -> String {
        twelve_hour_time(self.hour, self.minutes)
    }

    /// Returns the meridiem suffix for major marks.
    pub fn suffix(&self) -> Option<&'static str> {
        self.is_major().then(|| meridiem(self.hour))
    }

    fn text_definition(&self) -> &TextDefinition {
        if self.is_major() {
            self.definition.major()
        } else {
            self.definition.minor()
        }
    }
}

impl Drawable for TimeMark<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let right_edge = position.x() + self.size().width();

        let text = svg_element::Text::new(self.label())
            .set("x", right_edge)
            .set("y", position.y())
            .set("dominant-baseline", "central")
            .set("class", if self.is_major() { "time-mark" } else { "time-mark minor" });
        let mut text = self.text_definition().style(text);

        if let Some(suffix) = self.suffix() {
            let suffix_def = self.definition.suffix();
            let mut tspan = svg_element::TSpan::new(suffix)
                .set("dx", 2)
                .set("font-size", suffix_def.font_size());
            if let Some(color) = suffix_def.color() {
                tspan = tspan.set("fill", color);
            }
            text = text.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(text));
        output
    }

    fn size(&self) -> Size {
        let label = self.text_definition().measure(&self.label());
        let suffix = self
            .suffix()
            .map(|suffix| self.definition.suffix().measure(suffix).width() + 2.0)
            .unwrap_or_default();
        Size::new(label.width() + suffix, label.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_hour_time() {
        assert_eq!(twelve_hour_time(9, 0), "9:00");
        assert_eq!(twelve_hour_time(9, 30), "9:30");
        assert_eq!(twelve_hour_time(12, 30), "12:30");
        assert_eq!(twelve_hour_time(21, 0), "9:00");
        assert_eq!(twelve_hour_time(24, 0), "12:00");
    }

    #[test]
    fn test_meridiem() {
        assert_eq!(meridiem(0), "AM");
        assert_eq!(meridiem(11), "AM");
        assert_eq!(meridiem(12), "PM");
        assert_eq!(meridiem(20), "PM");
        assert_eq!(meridiem(24), "AM");
    }

    #[test]
    fn test_major_mark_has_suffix() {
        let def = TimeMarkDefinition::default();

        let major = TimeMark::new(&def, 13, 0);
        assert!(major.is_major());
        assert_eq!(major.label(), "1:00");
        assert_eq!(major.suffix(), Some("PM"));

        let minor = TimeMark::new(&def, 13, 30);
        assert!(!minor.is_major());
        assert_eq!(minor.suffix(), None);
    }

    #[test]
    fn test_render_includes_suffix_only_for_major() {
        let def = TimeMarkDefinition::default();

        let major = TimeMark::new(&def, 9, 0).render_to_layers(Point::default()).render()[0]
            .to_string();
        assert!(major.contains("9:00"));
        assert!(major.contains("AM"));

        let minor = TimeMark::new(&def, 9, 30).render_to_layers(Point::default()).render()[0]
            .to_string();
        assert!(minor.contains("9:30"));
        assert!(!minor.contains("AM"));
        assert!(minor.contains("time-mark minor"));
    }

    #[test]
    fn test_major_mark_is_wider_than_label_alone() {
        let def = TimeMarkDefinition::default();
        let mark = TimeMark::new(&def, 9, 0);

        let label_only = def.major().measure(&mark.label()).width();
        assert!(mark.size().width() > label_only);
    }
}
