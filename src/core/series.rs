use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::entry::Entry;
use crate::core::types::AxisSide;

/// Rounding used when looking up an entry index by x-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Rounding {
    /// Index of the entry at or below `x`.
    Down,
    /// Index of the entry at or above `x`.
    Up,
    /// Index of the entry whose x is closest to `x`.
    #[default]
    Closest,
}

/// An ordered series of entries bound to one y-axis side.
///
/// Extrema are cached and **lazy**: they are correct immediately after
/// construction, after `add_entry`/`add_entry_ordered` (O(1) running
/// update), and after `calc_min_max` (full O(N) rescan). In-place entry
/// mutation via `entry_mut` leaves the cache stale until the caller
/// recomputes.
///
/// Index-by-x lookups assume entries are kept in ascending-x order; the
/// plain `add_entry` appends without enforcing that, `add_entry_ordered`
/// inserts at the sorted position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    entries: Vec<Entry>,
    axis_side: AxisSide,
    #[serde(default)]
    label: Option<String>,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Series {
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        let mut series = Self {
            entries,
            axis_side: AxisSide::Left,
            label: None,
            x_min: 0.0,
            x_max: 0.0,
            y_min: 0.0,
            y_max: 0.0,
        };
        series.calc_min_max();
        series
    }

    #[must_use]
    pub fn with_label(entries: Vec<Entry>, label: impl Into<String>) -> Self {
        let mut series = Self::new(entries);
        series.label = Some(label.into());
        series
    }

    #[must_use]
    pub fn axis_side(&self) -> AxisSide {
        self.axis_side
    }

    pub fn set_axis_side(&mut self, side: AxisSide) {
        self.axis_side = side;
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Mutable entry access. Leaves cached extrema stale until
    /// `calc_min_max` is called.
    pub fn entry_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Full O(N) extrema rescan. Empty series yields all-zero extrema so a
    /// chart with no data stays drawable.
    pub fn calc_min_max(&mut self) {
        if self.entries.is_empty() {
            self.x_min = 0.0;
            self.x_max = 0.0;
            self.y_min = 0.0;
            self.y_max = 0.0;
            return;
        }

        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for entry in &self.entries {
            x_min = x_min.min(entry.x());
            x_max = x_max.max(entry.x());
            y_min = y_min.min(entry.y());
            y_max = y_max.max(entry.y());
        }
        self.x_min = x_min;
        self.x_max = x_max;
        self.y_min = y_min;
        self.y_max = y_max;
    }

    /// Appends an entry, updating cached extrema in O(1).
    pub fn add_entry(&mut self, entry: Entry) {
        self.extend_extrema(&entry);
        self.entries.push(entry);
        trace!(count = self.entries.len(), "append entry");
    }

    /// Inserts an entry at its ascending-x position, updating extrema in O(1).
    pub fn add_entry_ordered(&mut self, entry: Entry) {
        self.extend_extrema(&entry);
        let at = self
            .entries
            .partition_point(|existing| existing.x() < entry.x());
        self.entries.insert(at, entry);
        trace!(count = self.entries.len(), "insert ordered entry");
    }

    /// Removes the entry at `index` and rescans extrema.
    pub fn remove_entry(&mut self, index: usize) -> Option<Entry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.calc_min_max();
        Some(removed)
    }

    /// Replaces all entries and rescans extrema.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.calc_min_max();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.calc_min_max();
    }

    /// Index of the entry matching `x` under the given rounding.
    ///
    /// Requires entries in ascending-x order; returns `None` for an empty
    /// series or when rounding pushes past either end.
    #[must_use]
    pub fn entry_index_for_x(&self, x: f64, rounding: Rounding) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }

        // First index with entry.x >= x.
        let at = self.entries.partition_point(|entry| entry.x() < x);

        match rounding {
            Rounding::Up => (at < self.entries.len()).then_some(at),
            Rounding::Down => {
                if at < self.entries.len() && self.entries[at].x() == x {
                    Some(at)
                } else {
                    at.checked_sub(1)
                }
            }
            Rounding::Closest => {
                if at == 0 {
                    Some(0)
                } else if at == self.entries.len() {
                    Some(self.entries.len() - 1)
                } else {
                    let below = self.entries[at - 1].x();
                    let above = self.entries[at].x();
                    if (x - below) <= (above - x) {
                        Some(at - 1)
                    } else {
                        Some(at)
                    }
                }
            }
        }
    }

    fn extend_extrema(&mut self, entry: &Entry) {
        if self.entries.is_empty() {
            self.x_min = entry.x();
            self.x_max = entry.x();
            self.y_min = entry.y();
            self.y_max = entry.y();
        } else {
            self.x_min = self.x_min.min(entry.x());
            self.x_max = self.x_max.max(entry.x());
            self.y_min = self.y_min.min(entry.y());
            self.y_max = self.y_max.max(entry.y());
        }
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
