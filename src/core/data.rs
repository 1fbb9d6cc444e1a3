use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::series::Series;
use crate::core::types::AxisSide;

/// Chart-wide aggregate over all series.
///
/// Tracks the shared x-range and an independent y-range per axis side.
/// A side with no series mirrors the other side's range so that an axis
/// without data still has a sane, non-degenerate range to display.
///
/// Like `Series`, the aggregate is lazy: mutate series freely, then call
/// `notify_data_changed` once before the next read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    series: Vec<Series>,
    x_min: f64,
    x_max: f64,
    left_y_min: f64,
    left_y_max: f64,
    right_y_min: f64,
    right_y_max: f64,
}

impl ChartData {
    #[must_use]
    pub fn new(series: Vec<Series>) -> Self {
        let mut data = Self {
            series,
            ..Self::default()
        };
        data.notify_data_changed();
        data
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn series_at(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    /// Mutable series access. Leaves aggregate ranges stale until
    /// `notify_data_changed` is called.
    pub fn series_at_mut(&mut self, index: usize) -> Option<&mut Series> {
        self.series.get_mut(index)
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
        self.notify_data_changed();
    }

    pub fn remove_series(&mut self, index: usize) -> Option<Series> {
        if index >= self.series.len() {
            return None;
        }
        let removed = self.series.remove(index);
        self.notify_data_changed();
        Some(removed)
    }

    /// Grouped/combined layout view over the series.
    ///
    /// # Panics
    ///
    /// Grouping fewer than two series is a programmer error and fails loudly.
    #[must_use]
    pub fn grouped(&self) -> &[Series] {
        assert!(
            self.series.len() >= 2,
            "grouped layout requires at least two series, got {}",
            self.series.len()
        );
        &self.series
    }

    /// Recomputes every series' extrema and the per-side aggregates in one
    /// O(total entries) pass.
    pub fn notify_data_changed(&mut self) {
        for series in &mut self.series {
            series.calc_min_max();
        }
        self.calc_min_max();
        debug!(
            series_count = self.series.len(),
            x_min = self.x_min,
            x_max = self.x_max,
            "aggregate ranges recomputed"
        );
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
    pub fn y_min(&self, side: AxisSide) -> f64 {
        match side {
            AxisSide::Left => self.left_y_min,
            AxisSide::Right => self.right_y_min,
        }
    }

    #[must_use]
    pub fn y_max(&self, side: AxisSide) -> f64 {
        match side {
            AxisSide::Left => self.left_y_max,
            AxisSide::Right => self.right_y_max,
        }
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    fn calc_min_max(&mut self) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut left: Option<(f64, f64)> = None;
        let mut right: Option<(f64, f64)> = None;

        // Empty series carry zeroed extrema; skip them so they cannot drag
        // the aggregate toward the origin.
        for series in self.series.iter().filter(|series| !series.is_empty()) {
            x_min = x_min.min(series.x_min());
            x_max = x_max.max(series.x_max());

            let slot = match series.axis_side() {
                AxisSide::Left => &mut left,
                AxisSide::Right => &mut right,
            };
            *slot = Some(match *slot {
                None => (series.y_min(), series.y_max()),
                Some((min, max)) => (min.min(series.y_min()), max.max(series.y_max())),
            });
        }

        if !x_min.is_finite() {
            // No data at all: zeroed ranges, never an error.
            self.x_min = 0.0;
            self.x_max = 0.0;
            self.left_y_min = 0.0;
            self.left_y_max = 0.0;
            self.right_y_min = 0.0;
            self.right_y_max = 0.0;
            return;
        }

        self.x_min = x_min;
        self.x_max = x_max;

        // A side with no series mirrors the other side's range.
        let (left_range, right_range) = match (left, right) {
            (Some(l), Some(r)) => (l, r),
            (Some(l), None) => (l, l),
            (None, Some(r)) => (r, r),
            (None, None) => ((0.0, 0.0), (0.0, 0.0)),
        };
        self.left_y_min = left_range.0;
        self.left_y_max = left_range.1;
        self.right_y_min = right_range.0;
        self.right_y_max = right_range.1;
    }
}
