//! Dayplan - side-by-side layout of clashing events on a single-day calendar.
//!
//! Reading, laying out and rendering one calendar day. Events that overlap in
//! time are split into columns so they can be drawn next to each other.
//!
//! The layout itself is [`layout_day`], a pure function over anything that
//! implements [`TimeSpan`]. [`DayBuilder`] wires it to the TOML schedule
//! format and the SVG renderer.

pub mod config;
pub mod export;
pub mod layout;
pub mod schedule;

mod error;

pub use dayplan_core::{color, draw, event, geometry, interval};

pub use dayplan_core::{
    event::{Event, InvalidEvent, Placed},
    interval::TimeSpan,
};
pub use error::DayplanError;
pub use layout::layout_day;
pub use schedule::Schedule;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;

/// Builder for laying out and rendering Dayplan schedules.
///
/// # Examples
///
/// ```rust
/// use dayplan::{DayBuilder, config::AppConfig};
///
/// let source = r#"
/// [[event]]
/// start = 540
/// end = 600
/// name = "Retro"
///
/// [[event]]
/// start = 560
/// end = 620
/// "#;
///
/// let builder = DayBuilder::new(AppConfig::default());
///
/// let schedule = builder.parse(source).expect("Failed to parse");
/// let placed = builder.layout(&schedule).expect("Failed to lay out");
/// assert_eq!(placed[1].column(), 1);
///
/// let svg = builder.render_svg(&placed).expect("Failed to render");
/// assert!(svg.contains("Retro"));
/// ```
#[derive(Debug, Default)]
pub struct DayBuilder {
    config: AppConfig,
}

impl DayBuilder {
    /// Create a new day builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including calendar and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse TOML source into a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`DayplanError::Parse`] if the source is not a valid schedule.
    pub fn parse(&self, source: &str) -> Result<Schedule, DayplanError> {
        info!("Parsing schedule");

        let schedule = Schedule::from_toml(source)?;

        debug!(events = schedule.len(); "Schedule parsed successfully");
        trace!(schedule:?; "Parsed schedule");

        Ok(schedule)
    }

    /// Lay out the events of a schedule side by side.
    ///
    /// # Errors
    ///
    /// Returns [`DayplanError::InvalidEvent`] if any event does not end after
    /// it starts.
    pub fn layout(&self, schedule: &Schedule) -> Result<Vec<Placed<Event>>, DayplanError> {
        info!(events = schedule.len(); "Laying out day");

        let placed = layout_day(schedule.events())?;

        let columns = placed.iter().map(Placed::slots).max().unwrap_or_default();
        info!(widest_group = columns; "Layout calculated");

        Ok(placed)
    }

    /// Render placed events to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`DayplanError::Config`] for an invalid calendar or style
    /// configuration, or [`DayplanError::Export`] if rendering fails.
    pub fn render_svg(&self, placed: &[Placed<Event>]) -> Result<String, DayplanError> {
        info!(events = placed.len(); "Rendering day");

        let mut svg_exporter = export::svg::SvgBuilder::new()
            .with_calendar(self.config.calendar())
            .with_style(self.config.style())
            .build()?;

        let mut buffer = Vec::new();
        svg_exporter.export_day(placed, &mut buffer)?;

        let svg_string = String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(format!("SVG output is not UTF-8: {err}")))?;

        info!("SVG rendered successfully");
        Ok(svg_string)
    }
}
