//! Configuration types for Dayplan rendering.
//!
//! This module provides configuration structures that control the calendar
//! canvas and its styling. All types implement [`serde::Deserialize`] so they
//! can be loaded from a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining calendar and style settings.
//! - [`CalendarConfig`] - Canvas size and the visible range of hours.
//! - [`StyleConfig`] - Optional color overrides for the rendered calendar.
//!
//! # Example
//!
//! ```
//! # use dayplan::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.calendar().start_hour(), 9);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use dayplan_core::color::Color;

/// Top-level application configuration combining calendar and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Calendar canvas section.
    #[serde(default)]
    calendar: CalendarConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified calendar and style configurations.
    ///
    /// # Arguments
    ///
    /// * `calendar` - Canvas size and visible hours.
    /// * `style` - Visual styling options.
    pub fn new(calendar: CalendarConfig, style: StyleConfig) -> Self {
        Self { calendar, style }
    }

    /// Returns the calendar configuration.
    pub fn calendar(&self) -> &CalendarConfig {
        &self.calendar
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Canvas configuration for the day view.
///
/// `width` and `height` describe the event area only; the time gutter and the
/// outer padding are added around it. Event times are minutes measured from
/// `start_hour`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    width: f32,
    height: f32,
    start_hour: u8,
    end_hour: u8,
    gutter_width: f32,
    padding: f32,
}

impl CalendarConfig {
    /// Creates a calendar of the given event-area size covering `start_hour..end_hour`.
    pub fn new(width: f32, height: f32, start_hour: u8, end_hour: u8) -> Self {
        Self {
            width,
            height,
            start_hour,
            end_hour,
            ..Self::default()
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    pub fn gutter_width(&self) -> f32 {
        self.gutter_width
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Number of visible hours.
    pub fn hours(&self) -> u8 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Checks that the configuration describes a drawable day.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.start_hour >= self.end_hour {
            return Err(format!(
                "calendar start_hour ({}) must be before end_hour ({})",
                self.start_hour, self.end_hour
            ));
        }
        if self.end_hour > 24 {
            return Err(format!(
                "calendar end_hour ({}) must not be after 24",
                self.end_hour
            ));
        }
        if !(self.width.is_finite() && self.height.is_finite())
            || !(self.width > 0.0 && self.height > 0.0)
        {
            return Err(format!(
                "calendar size must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if !(self.gutter_width.is_finite() && self.padding.is_finite())
            || self.gutter_width < 0.0
            || self.padding < 0.0
        {
            return Err(format!(
                "calendar gutter_width ({}) and padding ({}) must be finite and not negative",
                self.gutter_width, self.padding
            ));
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 720.0,
            start_hour: 9,
            end_hour: 21,
            gutter_width: 80.0,
            padding: 20.0,
        }
    }
}

/// Visual styling configuration for the rendered calendar.
///
/// Every color is an optional CSS color string. Colors that are not set fall
/// back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,
    #[serde(default)]
    event_fill: Option<String>,
    #[serde(default)]
    event_border: Option<String>,
    #[serde(default)]
    event_accent: Option<String>,
    #[serde(default)]
    text_color: Option<String>,
    #[serde(default)]
    grid_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.background_color.as_deref(), "background color")
    }

    /// Returns the parsed event fill color.
    pub fn event_fill(&self) -> Result<Option<Color>, String> {
        parse_color(self.event_fill.as_deref(), "event fill")
    }

    /// Returns the parsed event border color.
    pub fn event_border(&self) -> Result<Option<Color>, String> {
        parse_color(self.event_border.as_deref(), "event border")
    }

    /// Returns the parsed event accent color.
    pub fn event_accent(&self) -> Result<Option<Color>, String> {
        parse_color(self.event_accent.as_deref(), "event accent")
    }

    /// Returns the parsed color for secondary text.
    pub fn text_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.text_color.as_deref(), "text color")
    }

    /// Returns the parsed color of the hour grid.
    pub fn grid_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.grid_color.as_deref(), "grid color")
    }
}

fn parse_color(value: Option<&str>, what: &str) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {what} in config: {err}"))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let calendar = CalendarConfig::default();
        assert_approx_eq!(f32, calendar.width(), 600.0);
        assert_approx_eq!(f32, calendar.height(), 720.0);
        assert_eq!(calendar.start_hour(), 9);
        assert_eq!(calendar.end_hour(), 21);
        assert_eq!(calendar.hours(), 12);
        assert!(calendar.validate().is_ok());
    }

    #[test]
    fn test_partial_calendar_section_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [calendar]
            start_hour = 8
            end_hour = 18
            "#,
        )
        .unwrap();

        assert_eq!(config.calendar().start_hour(), 8);
        assert_eq!(config.calendar().end_hour(), 18);
        assert_approx_eq!(f32, config.calendar().width(), 600.0);
        assert_approx_eq!(f32, config.calendar().gutter_width(), 80.0);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        assert!(CalendarConfig::new(600.0, 720.0, 12, 12).validate().is_err());
        assert!(CalendarConfig::new(600.0, 720.0, 20, 9).validate().is_err());
        assert!(CalendarConfig::new(600.0, 720.0, 0, 25).validate().is_err());
        assert!(CalendarConfig::new(0.0, 720.0, 9, 17).validate().is_err());
        assert!(CalendarConfig::new(600.0, 720.0, 0, 24).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_sizes() {
        assert!(CalendarConfig::new(f32::INFINITY, 720.0, 9, 17).validate().is_err());
        assert!(CalendarConfig::new(600.0, f32::NAN, 9, 17).validate().is_err());

        let config: AppConfig = toml::from_str(
            r#"
            [calendar]
            gutter_width = nan
            padding = inf
            "#,
        )
        .unwrap();
        let err = config.calendar().validate().unwrap_err();
        assert!(err.contains("must be finite"));

        let config: AppConfig = toml::from_str("[calendar]\npadding = inf\n").unwrap();
        assert!(config.calendar().validate().is_err());
    }

    #[test]
    fn test_style_colors() {
        let config: AppConfig = toml::from_str(
            r##"
            [style]
            background_color = "#fafafa"
            event_accent = "not-a-color"
            "##,
        )
        .unwrap();

        let style = config.style();
        assert!(style.background_color().unwrap().is_some());
        assert!(style.event_fill().unwrap().is_none());

        let err = style.event_accent().unwrap_err();
        assert!(err.contains("event accent"));
        assert!(err.contains("not-a-color"));
    }
}
