//! Ordering and overlap rules for timed items.
//!
//! Everything that occupies a stretch of the day implements [`TimeSpan`].
//! The free functions in this module define the two relations the layout
//! pipeline is built on:
//!
//! - [`compare`] - a total order by start time, then end time
//! - [`overlaps`] - whether two spans clash
//!
//! # Boundary Rule
//!
//! A start time belongs to the span it falls into when it is at or after that
//! span's start and strictly before its end ([`starts_during`]). An end time
//! belongs to the span when it is strictly after that span's start and at or
//! before its end ([`ends_during`]). As a result two spans that merely touch
//! do not overlap:
//!
//! ```
//! # use dayplan_core::event::Event;
//! # use dayplan_core::interval::overlaps;
//! let morning = Event::new(0, 10);
//! let next = Event::new(10, 20);
//! assert!(!overlaps(&morning, &next));
//!
//! let late = Event::new(5, 15);
//! assert!(overlaps(&morning, &late));
//! ```

use std::cmp::Ordering;

/// Minutes from the top of the visible calendar day.
pub type Minutes = i32;

/// Anything that occupies a stretch of time on the calendar day.
pub trait TimeSpan {
    /// Returns the start of the span (inclusive).
    fn start(&self) -> Minutes;

    /// Returns the end of the span.
    fn end(&self) -> Minutes;

    /// Returns a human-readable label used when reporting problems with this span.
    fn label(&self) -> Option<&str> {
        None
    }

    /// Returns the length of the span in minutes.
    fn duration(&self) -> Minutes {
        self.end() - self.start()
    }
}

impl<T: TimeSpan + ?Sized> TimeSpan for &T {
    fn start(&self) -> Minutes {
        (**self).start()
    }

    fn end(&self) -> Minutes {
        (**self).end()
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

/// Returns `true` if `time` falls inside `span` when read as a start time.
///
/// The span's own start counts as inside; its end does not.
pub fn starts_during(time: Minutes, span: &impl TimeSpan) -> bool {
    time >= span.start() && time < span.end()
}

/// Returns `true` if `time` falls inside `span` when read as an end time.
///
/// The span's own end counts as inside; its start does not.
pub fn ends_during(time: Minutes, span: &impl TimeSpan) -> bool {
    time > span.start() && time <= span.end()
}

/// Returns `true` if the two spans clash.
///
/// Spans clash when either one's start or end falls inside the other, using
/// the asymmetric boundaries of [`starts_during`] and [`ends_during`]. Spans
/// that share only a boundary do not clash.
pub fn overlaps(a: &impl TimeSpan, b: &impl TimeSpan) -> bool {
    starts_during(a.start(), b)
        || ends_during(a.end(), b)
        || starts_during(b.start(), a)
        || ends_during(b.end(), a)
}

/// Orders spans by start time, breaking ties by end time.
///
/// # Examples
///
/// ```
/// # use std::cmp::Ordering;
/// # use dayplan_core::event::Event;
/// # use dayplan_core::interval::compare;
/// let short = Event::new(540, 600);
/// let long = Event::new(540, 660);
/// assert_eq!(compare(&short, &long), Ordering::Less);
/// assert_eq!(compare(&long, &Event::new(30, 150)), Ordering::Greater);
/// ```
pub fn compare(a: &impl TimeSpan, b: &impl TimeSpan) -> Ordering {
    a.start()
        .cmp(&b.start())
        .then_with(|| a.end().cmp(&b.end()))
}
