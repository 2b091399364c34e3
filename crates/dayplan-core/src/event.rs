//! Calendar events and their placed form.
//!
//! - [`Event`] - A named, located stretch of time on the calendar day
//! - [`Placed`] - Any [`TimeSpan`] annotated with its column and clash count
//! - [`InvalidEvent`] - Raised for spans that do not end after they start

use serde::Deserialize;
use thiserror::Error;

use crate::interval::{Minutes, TimeSpan};

/// A single event on the calendar day.
///
/// Times are offsets in minutes from the top of the visible day. The display
/// fields are carried through layout untouched.
///
/// # Examples
///
/// ```
/// # use dayplan_core::event::Event;
/// # use dayplan_core::interval::TimeSpan;
/// let event = Event::new(540, 600)
///     .with_name("Design review")
///     .with_location("Room 4");
///
/// assert_eq!(event.start(), 540);
/// assert_eq!(event.name(), Some("Design review"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Event {
    start: Minutes,
    end: Minutes,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

impl Event {
    /// Creates an event spanning `start..end` with no display fields.
    pub fn new(start: Minutes, end: Minutes) -> Self {
        Self {
            start,
            end,
            name: None,
            location: None,
        }
    }

    /// Sets the display name (builder style).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the display location (builder style).
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Returns the display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the display location, if any.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Checks that the event ends strictly after it starts.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEvent`] carrying `index` when `start >= end`.
    pub fn validate(&self, index: usize) -> Result<(), InvalidEvent> {
        InvalidEvent::check(index, self)
    }
}

impl TimeSpan for Event {
    fn start(&self) -> Minutes {
        self.start
    }

    fn end(&self) -> Minutes {
        self.end
    }

    fn label(&self) -> Option<&str> {
        self.name()
    }
}

/// A span annotated with its horizontal slot.
///
/// `column` is the slot the item occupies within its clash group and
/// `clashes` is the highest column index used anywhere in that group, so a
/// renderer divides the available width into `clashes + 1` equal slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placed<T> {
    item: T,
    column: usize,
    clashes: usize,
}

impl<T> Placed<T> {
    /// Annotates `item` with its column and the clash count of its group.
    pub fn new(item: T, column: usize, clashes: usize) -> Self {
        debug_assert!(column <= clashes, "column must not exceed clash count");
        Self {
            item,
            column,
            clashes,
        }
    }

    /// Returns the placed item.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Consumes the annotation and returns the item.
    pub fn into_inner(self) -> T {
        self.item
    }

    /// Returns the zero-based column within the clash group.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the number of columns in the clash group minus one.
    pub fn clashes(&self) -> usize {
        self.clashes
    }

    /// Returns the number of columns the group is split into.
    pub fn slots(&self) -> usize {
        self.clashes + 1
    }
}

impl<T: TimeSpan> TimeSpan for Placed<T> {
    fn start(&self) -> Minutes {
        self.item.start()
    }

    fn end(&self) -> Minutes {
        self.item.end()
    }

    fn label(&self) -> Option<&str> {
        self.item.label()
    }
}

/// A span that does not end after it starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("event {} ends at {end} but starts at {start}; events must end after they start", describe(.index, .label))]
pub struct InvalidEvent {
    index: usize,
    start: Minutes,
    end: Minutes,
    label: Option<String>,
}

impl InvalidEvent {
    /// Returns an error for `span` at position `index` unless it ends after it starts.
    pub fn check(index: usize, span: &impl TimeSpan) -> Result<(), Self> {
        if span.start() < span.end() {
            return Ok(());
        }

        Err(Self {
            index,
            start: span.start(),
            end: span.end(),
            label: span.label().map(str::to_owned),
        })
    }

    /// Returns the position of the offending event in the input.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the start time of the offending event.
    pub fn start(&self) -> Minutes {
        self.start
    }

    /// Returns the end time of the offending event.
    pub fn end(&self) -> Minutes {
        self.end
    }

    /// Returns the label of the offending event, if it has one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

fn describe(index: &usize, label: &Option<String>) -> String {
    match label {
        Some(label) => format!("#{index} (`{label}`)"),
        None => format!("#{index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builders() {
        let event = Event::new(30, 150)
            .with_name("Standup")
            .with_location("Room 1");

        assert_eq!(event.start(), 30);
        assert_eq!(event.end(), 150);
        assert_eq!(event.name(), Some("Standup"));
        assert_eq!(event.location(), Some("Room 1"));
        assert_eq!(event.label(), Some("Standup"));
    }

    #[test]
    fn test_validate_accepts_positive_duration() {
        assert!(Event::new(0, 1).validate(0).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_span() {
        let err = Event::new(60, 60).validate(3).unwrap_err();

        assert_eq!(err.index(), 3);
        assert_eq!(err.start(), 60);
        assert_eq!(err.end(), 60);
        assert_eq!(err.label(), None);
    }

    #[test]
    fn test_validate_rejects_inverted_span() {
        let err = Event::new(120, 90)
            .with_name("Lunch")
            .validate(1)
            .unwrap_err();

        assert_eq!(err.label(), Some("Lunch"));
        assert_eq!(
            err.to_string(),
            "event #1 (`Lunch`) ends at 90 but starts at 120; events must end after they start"
        );
    }

    #[test]
    fn test_invalid_event_display_without_label() {
        let err = Event::new(5, 1).validate(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "event #0 ends at 1 but starts at 5; events must end after they start"
        );
    }

    #[test]
    fn test_placed_accessors() {
        let placed = Placed::new(Event::new(540, 600), 1, 2);

        assert_eq!(placed.column(), 1);
        assert_eq!(placed.clashes(), 2);
        assert_eq!(placed.slots(), 3);
        assert_eq!(placed.start(), 540);
        assert_eq!(placed.end(), 600);
        assert_eq!(placed.into_inner(), Event::new(540, 600));
    }
}
