use std::cmp::Ordering;

use super::model::{Column, Reading, SensorDataset};

// ---------------------------------------------------------------------------
// Sort state
// ---------------------------------------------------------------------------

/// Which column the table is ordered by, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<Column>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }
}

impl SortState {
    /// Header activation: reselecting the current column flips the
    /// direction, a new column starts ascending.
    pub fn activate(&mut self, column: Column) {
        if self.column == Some(column) {
            self.ascending = !self.ascending;
        } else {
            self.column = Some(column);
            self.ascending = true;
        }
    }

    /// Direction arrow for the active column's header.
    pub fn arrow_for(&self, column: Column) -> &'static str {
        match (self.column, self.ascending) {
            (Some(c), true) if c == column => " ▲",
            (Some(c), false) if c == column => " ▼",
            _ => "",
        }
    }
}

// ---------------------------------------------------------------------------
// Comparators
// ---------------------------------------------------------------------------

/// Ascending three-way comparison of two readings on one column.
///
/// `Time` compares the combined date + time so readings from different days
/// are totally ordered.
pub fn compare(a: &Reading, b: &Reading, column: Column) -> Ordering {
    match column {
        Column::Date => a.date.cmp(&b.date),
        Column::Time => a.timestamp().cmp(&b.timestamp()),
        Column::Temp => a.temp.total_cmp(&b.temp),
        Column::Humid => a.humid.total_cmp(&b.humid),
        Column::Location => a.location.cmp(&b.location),
    }
}

/// Stable in-place ordering of `indices` by the state's column.
/// Leaves `indices` untouched when no column is selected.
pub fn sort_indices(dataset: &SensorDataset, indices: &mut [usize], state: &SortState) {
    let Some(column) = state.column else {
        return;
    };
    indices.sort_by(|&a, &b| {
        let ord = compare(&dataset.readings[a], &dataset.readings[b], column);
        if state.ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

/// Activate `column` on `state` and reorder `indices` accordingly.
pub fn sort_by_column(
    dataset: &SensorDataset,
    indices: &mut [usize],
    column: Column,
    state: &mut SortState,
) {
    state.activate(column);
    log::debug!(
        "Sorting {} rows by {column:?} ({})",
        indices.len(),
        if state.ascending { "asc" } else { "desc" }
    );
    sort_indices(dataset, indices, state);
}
