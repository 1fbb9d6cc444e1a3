use serde::{Deserialize, Serialize};

/// Axis flavor, deciding how `space_before`/`space_after` are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisKind {
    /// Continuous value axis; spacing is a fraction of the raw data range.
    #[default]
    Value,
    /// Category/index axis; no spacing is applied.
    Category,
}

/// Display range of one axis: padded data bounds, optionally pinned.
///
/// `calculate` must be re-run whenever the underlying data's min/max change
/// or a custom bound is set or cleared. A pinned bound wins over the padded
/// data bound, but `range` is always recomputed from whichever bounds are
/// effective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    kind: AxisKind,
    /// Fraction of the raw data range padded below `data_min` (value axes).
    space_before: f64,
    /// Fraction of the raw data range padded above `data_max` (value axes).
    space_after: f64,
    custom_min: Option<f64>,
    custom_max: Option<f64>,
    min: f64,
    max: f64,
    range: f64,
    degenerate: bool,
}

impl AxisRange {
    #[must_use]
    pub fn new(kind: AxisKind) -> Self {
        let (space_before, space_after) = match kind {
            AxisKind::Value => (0.10, 0.10),
            AxisKind::Category => (0.0, 0.0),
        };
        Self {
            kind,
            space_before,
            space_after,
            custom_min: None,
            custom_max: None,
            min: 0.0,
            max: 0.0,
            range: 0.0,
            degenerate: false,
        }
    }

    #[must_use]
    pub fn with_space(kind: AxisKind, space_before: f64, space_after: f64) -> Self {
        let mut axis = Self::new(kind);
        axis.space_before = space_before;
        axis.space_after = space_after;
        axis
    }

    #[must_use]
    pub fn kind(self) -> AxisKind {
        self.kind
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn range(self) -> f64 {
        self.range
    }

    /// Whether the last `calculate` hit a zero-width interval and applied
    /// the ±1 expansion. The numeric behavior is unchanged; this flag only
    /// makes the expansion observable.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.degenerate
    }

    #[must_use]
    pub fn has_custom_min(self) -> bool {
        self.custom_min.is_some()
    }

    #[must_use]
    pub fn has_custom_max(self) -> bool {
        self.custom_max.is_some()
    }

    /// Pins or clears the lower bound. The caller re-runs `calculate`.
    pub fn set_custom_min(&mut self, min: Option<f64>) {
        self.custom_min = min;
    }

    /// Pins or clears the upper bound. The caller re-runs `calculate`.
    pub fn set_custom_max(&mut self, max: Option<f64>) {
        self.custom_max = max;
    }

    /// Derives the display range from data bounds.
    ///
    /// Order matters: spacing is applied to the raw data bounds first, then
    /// a zero-width interval is expanded symmetrically by ±1 so a degenerate
    /// range can never reach the transform engine, where it would turn into
    /// an infinite or NaN scale factor.
    pub fn calculate(&mut self, data_min: f64, data_max: f64) {
        let base_range = (data_max - data_min).abs();
        let (space_before, space_after) = match self.kind {
            AxisKind::Value => (
                base_range * self.space_before,
                base_range * self.space_after,
            ),
            AxisKind::Category => (0.0, 0.0),
        };

        let mut min = self.custom_min.unwrap_or(data_min - space_before);
        let mut max = self.custom_max.unwrap_or(data_max + space_after);

        self.degenerate = (max - min).abs() == 0.0;
        if self.degenerate {
            max += 1.0;
            min -= 1.0;
        }

        self.min = min;
        self.max = max;
        self.range = (max - min).abs();
    }
}
