//! Greedy column assignment within one clash group.

use dayplan_core::interval::{TimeSpan, overlaps};

/// The columns of one clash group.
///
/// Members of a column never overlap each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns<T> {
    columns: Vec<Vec<T>>,
}

impl<T> Columns<T> {
    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Highest column index used, shared by every member of the group.
    pub fn clashes(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }

    /// Iterates the columns in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.columns.iter().map(Vec::as_slice)
    }

    /// Consumes the columns, yielding each item with its column index in
    /// column-major order.
    pub fn into_indexed(self) -> impl Iterator<Item = (usize, T)> {
        self.columns
            .into_iter()
            .enumerate()
            .flat_map(|(index, column)| column.into_iter().map(move |item| (index, item)))
    }
}

/// Assigns each item of a group to the first column it fits in.
///
/// Items are taken in arrival order. An item goes into the lowest-indexed
/// column none of whose members overlap it, or into a new column when every
/// existing one clashes. Placement is never revisited, so the column count is
/// not always minimal.
pub fn assign_columns<T: TimeSpan>(group: Vec<T>) -> Columns<T> {
    let mut columns: Vec<Vec<T>> = Vec::new();

    for item in group {
        let free = columns
            .iter_mut()
            .find(|column| !column.iter().any(|member| overlaps(member, &item)));

        match free {
            Some(column) => column.push(item),
            None => columns.push(vec![item]),
        }
    }

    Columns { columns }
}

#[cfg(test)]
mod tests {
    use dayplan_core::event::Event;

    use super::*;

    fn spans(columns: &Columns<Event>) -> Vec<Vec<(i32, i32)>> {
        columns
            .iter()
            .map(|column| column.iter().map(|e| (e.start(), e.end())).collect())
            .collect()
    }

    #[test]
    fn test_single_item() {
        let columns = assign_columns(vec![Event::new(100, 200)]);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns.clashes(), 0);
    }

    #[test]
    fn test_empty_group_has_no_clashes() {
        let columns = assign_columns(Vec::<Event>::new());
        assert!(columns.is_empty());
        assert_eq!(columns.clashes(), 0);
    }

    #[test]
    fn test_reuses_first_free_column() {
        let columns = assign_columns(vec![
            Event::new(540, 600),
            Event::new(560, 620),
            Event::new(610, 670),
        ]);
        assert_eq!(
            spans(&columns),
            vec![vec![(540, 600), (610, 670)], vec![(560, 620)]]
        );
        assert_eq!(columns.clashes(), 1);
    }

    #[test]
    fn test_all_mutually_overlapping() {
        let columns = assign_columns(vec![
            Event::new(0, 100),
            Event::new(10, 90),
            Event::new(20, 80),
        ]);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns.clashes(), 2);
    }

    #[test]
    fn test_greedy_placement_depends_on_arrival_order() {
        let arrival = vec![
            Event::new(9, 11),
            Event::new(0, 6),
            Event::new(14, 20),
            Event::new(4, 8),
            Event::new(12, 16),
            Event::new(7, 13),
        ];

        // No three of these overlap at once, but placements are never revisited
        let columns = assign_columns(arrival.clone());
        assert_eq!(
            spans(&columns),
            vec![
                vec![(9, 11), (0, 6), (14, 20)],
                vec![(4, 8), (12, 16)],
                vec![(7, 13)],
            ]
        );
        assert_eq!(columns.clashes(), 2);

        let mut sorted = arrival;
        sorted.sort_by(|a, b| dayplan_core::interval::compare(a, b));
        assert_eq!(assign_columns(sorted).clashes(), 1);
    }

    #[test]
    fn test_into_indexed_is_column_major() {
        let columns = assign_columns(vec![
            Event::new(540, 600),
            Event::new(560, 620),
            Event::new(610, 670),
        ]);
        let indexed: Vec<(usize, i32)> = columns
            .into_indexed()
            .map(|(index, e)| (index, e.start()))
            .collect();
        assert_eq!(indexed, vec![(0, 540), (0, 610), (1, 560)]);
    }
}
