//! Clash grouping.

use dayplan_core::interval::{TimeSpan, overlaps};

/// Splits time-sorted items into clash groups.
///
/// Each item joins the first existing group, in creation order, that holds a
/// member overlapping it; otherwise it opens a new group. Groups are never
/// merged: an item overlapping members of two groups joins only the first.
/// On input sorted by [`compare`](dayplan_core::interval::compare) this yields
/// the connected components of the overlap graph.
pub fn group_clashing<T: TimeSpan>(items: Vec<T>) -> Vec<Vec<T>> {
    let mut groups: Vec<Vec<T>> = Vec::new();

    for item in items {
        let target = groups
            .iter_mut()
            .find(|group| group.iter().any(|member| overlaps(member, &item)));

        match target {
            Some(group) => group.push(item),
            None => groups.push(vec![item]),
        }
    }

    groups
}
