//! Side-by-side layout of clashing events.
//!
//! Laying out a day places every event in a column so that events which
//! overlap in time sit next to each other instead of on top of each other.
//!
//! # Pipeline
//!
//! ```text
//! &[T]
//!     ↓ validate          every span must end after it starts
//!     ↓ sort              by start, then end
//!     ↓ group             (group::group_clashing)
//!     ↓ assign columns    (column::assign_columns), once per group
//!     ↓ annotate          column index + group clash count
//! Vec<Placed<T>>
//! ```
//!
//! The result is grouped: all events of the first clash group come first,
//! and within a group all of column 0 precedes column 1.

pub mod column;
pub mod group;

use log::{debug, trace};

use dayplan_core::{
    event::{InvalidEvent, Placed},
    interval::{TimeSpan, compare},
};

pub use column::{Columns, assign_columns};
pub use group::group_clashing;

/// Lays out one day of events.
///
/// The input is left untouched; the returned records hold clones of the
/// input items, one per item, each tagged with its column and the clash
/// count of its group.
///
/// # Errors
///
/// Returns [`InvalidEvent`] for the first item that does not end after it
/// starts. Nothing is laid out in that case.
///
/// # Examples
///
/// ```
/// use dayplan::{Event, TimeSpan, layout_day};
///
/// let day = [Event::new(540, 600), Event::new(560, 620), Event::new(610, 670)];
/// let placed = layout_day(&day).unwrap();
///
/// let columns: Vec<_> = placed.iter().map(|p| (p.item().start(), p.column())).collect();
/// assert_eq!(columns, [(540, 0), (610, 0), (560, 1)]);
/// assert!(placed.iter().all(|p| p.clashes() == 1));
/// ```
pub fn layout_day<T: TimeSpan + Clone>(events: &[T]) -> Result<Vec<Placed<T>>, InvalidEvent> {
    for (index, event) in events.iter().enumerate() {
        InvalidEvent::check(index, event)?;
    }

    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| compare(a, b));

    let groups = group_clashing(sorted);
    debug!(events = events.len(), groups = groups.len(); "Grouped clashing events");

    let mut placed = Vec::with_capacity(events.len());
    for (index, group) in groups.into_iter().enumerate() {
        let members = group.len();
        let columns = assign_columns(group);
        debug!(group = index, members = members, columns = columns.len(); "Assigned columns");

        placed.extend(annotate(columns));
    }

    trace!(placed = placed.len(); "Day laid out");
    Ok(placed)
}

/// Tags every member of one group with its column and the group's clash count.
pub fn annotate<T>(columns: Columns<T>) -> impl Iterator<Item = Placed<T>> {
    let clashes = columns.clashes();
    columns
        .into_indexed()
        .map(move |(column, item)| Placed::new(item, column, clashes))
}
