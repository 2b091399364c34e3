//! Pixel mapping for the day view.

use dayplan_core::{
    event::Placed,
    geometry::{Bounds, Point, Size},
    interval::{Minutes, TimeSpan},
};

use crate::config::CalendarConfig;

/// Maps event times and columns onto the event area of the calendar.
///
/// Coordinates are relative to the top-left corner of the event area.
/// Minute `0` is the top of `start_hour`; the full height covers
/// `start_hour..end_hour`. The width of a clash group is split into
/// `clashes + 1` equal slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    size: Size,
    minutes: Minutes,
}

impl Canvas {
    /// Creates the canvas for a validated calendar configuration.
    pub fn new(calendar: &CalendarConfig) -> Self {
        Self {
            size: Size::new(calendar.width(), calendar.height()),
            minutes: Minutes::from(calendar.hours()) * 60,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of visible minutes.
    pub fn minutes(&self) -> Minutes {
        self.minutes
    }

    /// Vertical position of `minute`.
    pub fn y(&self, minute: Minutes) -> f32 {
        minute as f32 * self.size.height() / self.minutes as f32
    }

    /// Height of one visible hour.
    pub fn hour_height(&self) -> f32 {
        self.y(60)
    }

    /// Width of one column slot in a group with `clashes` clashes.
    pub fn slot_width(&self, clashes: usize) -> f32 {
        self.size.width() / (clashes + 1) as f32
    }

    /// Box covered by a placed item.
    pub fn bounds<T: TimeSpan>(&self, placed: &Placed<T>) -> Bounds {
        let slot = self.slot_width(placed.clashes());
        let top = self.y(placed.start());
        let bottom = self.y(placed.end());

        Bounds::new_from_top_left(
            Point::new(placed.column() as f32 * slot, top),
            Size::new(slot, bottom - top),
        )
    }
}
