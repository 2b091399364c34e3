//! Schedule input format.
//!
//! A schedule is a TOML document holding an array of `[[event]]` tables:
//!
//! ```toml
//! [[event]]
//! start = 30
//! end = 150
//! name = "Design review"
//! location = "Room 4"
//! ```
//!
//! `start` and `end` are minutes from the top of the visible day. `name` and
//! `location` are optional.

use serde::Deserialize;

use dayplan_core::event::Event;

use crate::error::DayplanError;

/// The events of one day, in input order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Schedule {
    #[serde(rename = "event", default)]
    events: Vec<Event>,
}

impl Schedule {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Parses a schedule from TOML source.
    ///
    /// Only the document shape is checked here; event spans are validated
    /// when the day is laid out.
    ///
    /// # Errors
    ///
    /// Returns [`DayplanError::Parse`] carrying `source` when the document is
    /// not a valid schedule.
    pub fn from_toml(source: &str) -> Result<Self, DayplanError> {
        toml::from_str(source).map_err(|err| DayplanError::new_parse_error(err, source))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<Event> for Schedule {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
