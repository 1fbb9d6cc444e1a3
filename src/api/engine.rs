use tracing::{debug, trace};

use crate::core::axis::{AxisKind, AxisRange};
use crate::core::data::ChartData;
use crate::core::simplify::{Simplified, simplify};
use crate::core::transform::Transformer;
use crate::core::types::{AxisSide, ContentRect, PixelPoint, ValuePoint};
use crate::core::viewport::ViewportState;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{GestureEffect, GestureMachine, GesturePhase, PointerEvent};

use super::engine_config::ChartEngineConfig;
use super::highlight::{Highlight, nearest_entry};

/// Outcome of one pointer event, for the hosting view to act on.
///
/// The redraw trigger and the parent scroll container live outside this
/// core; the outcome tells the host what to do with them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOutcome {
    pub needs_redraw: bool,
    pub highlight: Option<Highlight>,
    /// `Some(false)` asks the host to suppress parent gesture interception,
    /// `Some(true)` to restore it.
    pub allow_parent_intercept: Option<bool>,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` keeps the data aggregate, axis ranges, viewport state, and
/// per-side transformers mutually consistent: every data mutation or
/// resize re-runs the recompute pipeline, every gesture commit re-clamps
/// the viewport.
pub struct ChartEngine {
    data: ChartData,
    x_axis: AxisRange,
    left_axis: AxisRange,
    right_axis: AxisRange,
    viewport: ViewportState,
    left_transformer: Transformer,
    right_transformer: Transformer,
    gestures: GestureMachine,
    inverted: bool,
}

impl ChartEngine {
    pub fn new(config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let content = ContentRect::from_size(config.width, config.height);
        let viewport = ViewportState::new(content, config.viewport)?;

        let mut engine = Self {
            data: ChartData::default(),
            x_axis: AxisRange::new(AxisKind::Category),
            left_axis: AxisRange::with_space(
                AxisKind::Value,
                config.y_space_before_ratio,
                config.y_space_after_ratio,
            ),
            right_axis: AxisRange::with_space(
                AxisKind::Value,
                config.y_space_before_ratio,
                config.y_space_after_ratio,
            ),
            viewport,
            left_transformer: Transformer::default(),
            right_transformer: Transformer::default(),
            gestures: GestureMachine::new(config.gestures),
            inverted: config.inverted,
        };
        engine.refresh_pipeline();
        Ok(engine)
    }

    /// Replaces the whole data aggregate and re-runs the recompute pipeline.
    pub fn set_data(&mut self, data: ChartData) {
        debug!(
            series_count = data.series_count(),
            entry_count = data.entry_count(),
            "set chart data"
        );
        self.data = data;
        self.notify_data_changed();
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    /// Mutable data access for batched edits. The caller must finish with
    /// `notify_data_changed` before the next read or redraw.
    pub fn data_mut(&mut self) -> &mut ChartData {
        &mut self.data
    }

    /// Recomputes aggregate extrema, axis ranges, and transformers after
    /// data mutation.
    pub fn notify_data_changed(&mut self) {
        self.data.notify_data_changed();
        self.refresh_pipeline();
    }

    /// Content-rect update from the hosting layer (layout/resize).
    pub fn resize(&mut self, width: f64, height: f64) -> ChartResult<()> {
        self.viewport
            .set_content_rect(ContentRect::from_size(width, height))?;
        self.refresh_pipeline();
        debug!(width, height, "content rect resized");
        Ok(())
    }

    #[must_use]
    pub fn x_axis(&self) -> AxisRange {
        self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self, side: AxisSide) -> AxisRange {
        match side {
            AxisSide::Left => self.left_axis,
            AxisSide::Right => self.right_axis,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    /// Pins or clears a custom y bound, then recalculates the axis.
    pub fn set_custom_y_min(&mut self, side: AxisSide, min: Option<f64>) {
        self.y_axis_mut(side).set_custom_min(min);
        self.refresh_pipeline();
    }

    pub fn set_custom_y_max(&mut self, side: AxisSide, max: Option<f64>) {
        self.y_axis_mut(side).set_custom_max(max);
        self.refresh_pipeline();
    }

    /// Converts value-space points to pixel space for one axis side.
    #[must_use]
    pub fn to_pixels(&self, side: AxisSide, points: &[ValuePoint]) -> Vec<PixelPoint> {
        self.transformer(side)
            .points_to_pixels(points, self.viewport.touch_matrix())
    }

    /// Converts pixel-space points back to value space for one axis side.
    pub fn to_values(&self, side: AxisSide, pixels: &[PixelPoint]) -> ChartResult<Vec<ValuePoint>> {
        self.transformer(side)
            .pixels_to_values(pixels, self.viewport.touch_matrix())
    }

    #[must_use]
    pub fn pixel_for_value(&self, side: AxisSide, point: ValuePoint) -> PixelPoint {
        self.transformer(side)
            .point_to_pixel(point, self.viewport.touch_matrix())
    }

    pub fn value_for_pixel(&self, side: AxisSide, pixel: PixelPoint) -> ChartResult<ValuePoint> {
        self.transformer(side)
            .pixel_to_point(pixel, self.viewport.touch_matrix())
    }

    /// Feeds one pointer event through the gesture machine, committing any
    /// resulting viewport mutation (clamped) and resolving taps into
    /// highlights.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> ChartResult<PointerOutcome> {
        if !event.x.is_finite() || !event.y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }

        let effects = self.gestures.handle(event, self.viewport.touch_matrix());
        let mut outcome = PointerOutcome::default();

        for effect in effects {
            match effect {
                GestureEffect::SetMatrix(candidate) => {
                    let committed = self.viewport.commit(candidate);
                    trace!(
                        scale_x = committed.scale_x,
                        scale_y = committed.scale_y,
                        trans_x = committed.trans_x,
                        trans_y = committed.trans_y,
                        "gesture matrix committed"
                    );
                    outcome.needs_redraw = true;
                }
                GestureEffect::DisallowParentIntercept => {
                    outcome.allow_parent_intercept = Some(false);
                }
                GestureEffect::AllowParentIntercept => {
                    outcome.allow_parent_intercept = Some(true);
                }
                GestureEffect::Tap { x, y } => {
                    outcome.highlight = self.hit_test(PixelPoint::new(x, y));
                    outcome.needs_redraw = outcome.highlight.is_some();
                }
            }
        }

        Ok(outcome)
    }

    /// Nearest-entry hit test at a pixel position.
    #[must_use]
    pub fn hit_test(&self, pixel: PixelPoint) -> Option<Highlight> {
        let left = self.left_transformer;
        let right = self.right_transformer;
        nearest_entry(&self.data, pixel, self.viewport.touch_matrix(), |side| {
            match side {
                AxisSide::Left => left,
                AxisSide::Right => right,
            }
        })
    }

    /// Programmatic zoom about a pixel pivot; clamped like any gesture.
    pub fn zoom(&mut self, scale_x: f64, scale_y: f64, pivot_x: f64, pivot_y: f64) {
        let candidate = self.viewport.zoom(scale_x, scale_y, pivot_x, pivot_y);
        self.viewport.commit(candidate);
    }

    /// Programmatic pan in pixels; clamped like any gesture.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let candidate = self.viewport.translate(dx, dy);
        self.viewport.commit(candidate);
    }

    /// Discards all pan/zoom. A hard reset, not an animated one.
    pub fn fit_screen(&mut self) {
        self.viewport.fit_screen();
        debug!("viewport reset to fit screen");
    }

    /// Optional Douglas–Peucker pre-pass over one series, in
    /// (entry index, y value) space.
    pub fn simplified_points(
        &self,
        series_index: usize,
        epsilon: f64,
    ) -> ChartResult<Simplified> {
        let series = self.data.series_at(series_index).ok_or_else(|| {
            ChartError::InvalidData(format!("no series at index {series_index}"))
        })?;
        let points: Vec<ValuePoint> = series
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| ValuePoint::new(index as f64, entry.y()))
            .collect();
        Ok(simplify(&points, epsilon))
    }

    fn transformer(&self, side: AxisSide) -> &Transformer {
        match side {
            AxisSide::Left => &self.left_transformer,
            AxisSide::Right => &self.right_transformer,
        }
    }

    fn y_axis_mut(&mut self, side: AxisSide) -> &mut AxisRange {
        match side {
            AxisSide::Left => &mut self.left_axis,
            AxisSide::Right => &mut self.right_axis,
        }
    }

    /// Axis ranges from aggregate extrema, then transformer stages from the
    /// axis ranges. Order mirrors the data flow: data → ranges → transform.
    fn refresh_pipeline(&mut self) {
        self.x_axis.calculate(self.data.x_min(), self.data.x_max());
        self.left_axis.calculate(
            self.data.y_min(AxisSide::Left),
            self.data.y_max(AxisSide::Left),
        );
        self.right_axis.calculate(
            self.data.y_min(AxisSide::Right),
            self.data.y_max(AxisSide::Right),
        );

        let content = self.viewport.content_rect();
        self.left_transformer.prepare_value_to_pixel(
            content,
            self.x_axis.min(),
            self.x_axis.range(),
            self.left_axis.range(),
            self.left_axis.min(),
        );
        self.right_transformer.prepare_value_to_pixel(
            content,
            self.x_axis.min(),
            self.x_axis.range(),
            self.right_axis.range(),
            self.right_axis.min(),
        );
        self.left_transformer.prepare_offset(content, self.inverted);
        self.right_transformer.prepare_offset(content, self.inverted);
    }
}
