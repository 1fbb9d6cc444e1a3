use serde::{Deserialize, Serialize};

use crate::core::matrix::Matrix23;
use crate::core::types::ContentRect;
use crate::error::{ChartError, ChartResult};

/// Pan/zoom bounds applied to every committed touch matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTuning {
    pub min_scale_x: f64,
    pub max_scale_x: f64,
    pub min_scale_y: f64,
    pub max_scale_y: f64,
    /// Extra over-pan margin in pixels, for drag feel.
    pub drag_offset_x: f64,
    pub drag_offset_y: f64,
}

impl Default for ViewportTuning {
    fn default() -> Self {
        Self {
            min_scale_x: 1.0,
            max_scale_x: f64::MAX,
            min_scale_y: 1.0,
            max_scale_y: f64::MAX,
            drag_offset_x: 0.0,
            drag_offset_y: 0.0,
        }
    }
}

impl ViewportTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.min_scale_x.is_finite()
            || !self.min_scale_y.is_finite()
            || self.min_scale_x <= 0.0
            || self.min_scale_y <= 0.0
        {
            return Err(ChartError::InvalidConfig(
                "min scales must be finite and > 0".to_owned(),
            ));
        }
        if self.max_scale_x < self.min_scale_x || self.max_scale_y < self.min_scale_y {
            return Err(ChartError::InvalidConfig(
                "max scales must be >= min scales".to_owned(),
            ));
        }
        if !self.drag_offset_x.is_finite()
            || !self.drag_offset_y.is_finite()
            || self.drag_offset_x < 0.0
            || self.drag_offset_y < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "drag offsets must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Live pan/zoom state of the chart.
///
/// Owned by the chart instance; mutated only through the gesture pipeline
/// or the explicit programmatic calls below, read by the transform engine
/// on every redraw. Candidate matrices are never committed without passing
/// `limit_trans_and_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    content: ContentRect,
    touch_matrix: Matrix23,
    tuning: ViewportTuning,
}

impl ViewportState {
    pub fn new(content: ContentRect, tuning: ViewportTuning) -> ChartResult<Self> {
        if !content.is_valid() {
            return Err(ChartError::InvalidContentRect {
                width: content.width,
                height: content.height,
            });
        }
        Ok(Self {
            content,
            touch_matrix: Matrix23::identity(),
            tuning: tuning.validate()?,
        })
    }

    #[must_use]
    pub fn content_rect(self) -> ContentRect {
        self.content
    }

    /// Updates the content rect and re-clamps the live matrix against the
    /// new extents.
    pub fn set_content_rect(&mut self, content: ContentRect) -> ChartResult<()> {
        if !content.is_valid() {
            return Err(ChartError::InvalidContentRect {
                width: content.width,
                height: content.height,
            });
        }
        self.content = content;
        self.touch_matrix = self.limit_trans_and_scale(self.touch_matrix);
        Ok(())
    }

    #[must_use]
    pub fn touch_matrix(self) -> Matrix23 {
        self.touch_matrix
    }

    #[must_use]
    pub fn scale_x(self) -> f64 {
        self.touch_matrix.scale_x
    }

    #[must_use]
    pub fn scale_y(self) -> f64 {
        self.touch_matrix.scale_y
    }

    #[must_use]
    pub fn trans_x(self) -> f64 {
        self.touch_matrix.trans_x
    }

    #[must_use]
    pub fn trans_y(self) -> f64 {
        self.touch_matrix.trans_y
    }

    #[must_use]
    pub fn tuning(self) -> ViewportTuning {
        self.tuning
    }

    pub fn set_tuning(&mut self, tuning: ViewportTuning) -> ChartResult<()> {
        self.tuning = tuning.validate()?;
        self.touch_matrix = self.limit_trans_and_scale(self.touch_matrix);
        Ok(())
    }

    /// Candidate matrix for a scale about a pivot, applied on top of the
    /// live matrix. Not committed until clamped.
    #[must_use]
    pub fn zoom(self, scale_x: f64, scale_y: f64, pivot_x: f64, pivot_y: f64) -> Matrix23 {
        self.touch_matrix
            .post_scale_about(scale_x, scale_y, pivot_x, pivot_y)
    }

    /// Candidate matrix for a translation on top of the live matrix.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Matrix23 {
        self.touch_matrix.post_translate(dx, dy)
    }

    /// Clamps a candidate matrix into the configured scale and translation
    /// bounds. Idempotent: clamping a clamped matrix is a no-op.
    ///
    /// Translation bounds keep the content from being panned past its zoomed
    /// extent, widened by the drag offsets; signs follow the top-left pixel
    /// origin (content pans left/up as positive scale grows).
    #[must_use]
    pub fn limit_trans_and_scale(self, candidate: Matrix23) -> Matrix23 {
        let t = self.tuning;
        let scale_x = candidate
            .scale_x
            .max(t.min_scale_x)
            .min(t.max_scale_x);
        let scale_y = candidate
            .scale_y
            .max(t.min_scale_y)
            .min(t.max_scale_y);

        let width = self.content.width;
        let height = self.content.height;

        let max_trans_x = -width * (scale_x - 1.0);
        let trans_x = candidate
            .trans_x
            .max(max_trans_x - t.drag_offset_x)
            .min(t.drag_offset_x);

        let max_trans_y = height * (scale_y - 1.0);
        let trans_y = candidate
            .trans_y
            .min(max_trans_y + t.drag_offset_y)
            .max(-t.drag_offset_y);

        Matrix23 {
            scale_x,
            skew_x: candidate.skew_x,
            trans_x,
            skew_y: candidate.skew_y,
            scale_y,
            trans_y,
        }
    }

    /// Clamps and commits a candidate matrix, returning the committed value.
    pub fn commit(&mut self, candidate: Matrix23) -> Matrix23 {
        self.touch_matrix = self.limit_trans_and_scale(candidate);
        self.touch_matrix
    }

    /// Hard reset: scale 1 on both axes, zero translation.
    ///
    /// Scale minima above 1 are dropped back to 1 first; the identity
    /// matrix must survive the clamp.
    pub fn fit_screen(&mut self) {
        self.tuning.min_scale_x = self.tuning.min_scale_x.min(1.0);
        self.tuning.min_scale_y = self.tuning.min_scale_y.min(1.0);
        self.touch_matrix = self.limit_trans_and_scale(Matrix23::identity());
    }

    #[must_use]
    pub fn is_fully_zoomed_out(self) -> bool {
        self.touch_matrix.scale_x <= self.tuning.min_scale_x
            && self.touch_matrix.scale_y <= self.tuning.min_scale_y
    }
}
