//! Gesture state machine turning raw pointer streams into viewport
//! mutations.
//!
//! The transition core is pure: `(state, event) -> (state, effects)`. No
//! platform event loop is needed to unit-test it. A thin stateful driver
//! (`GestureMachine`) wraps it for the engine. Effects never mutate the
//! viewport directly; candidate matrices are handed back to the caller to
//! be clamped and committed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::matrix::Matrix23;
use crate::core::types::PixelPoint;

/// Lower bound on the committed pinch scale.
pub const MIN_PINCH_SCALE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerAction {
    /// First pointer down.
    Down,
    Move,
    /// Last pointer up.
    Up,
    /// Secondary pointer down.
    PointerDown,
    /// Secondary pointer up.
    PointerUp,
    /// Platform long-press threshold elapsed; delivered as an opaque signal.
    LongPress,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub pointer_id: u64,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(action: PointerAction, pointer_id: u64, x: f64, y: f64) -> Self {
        Self {
            action,
            pointer_id,
            x,
            y,
        }
    }

    #[must_use]
    pub fn position(self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }
}

/// Which axes a drag is allowed to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragBehavior {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Default for DragBehavior {
    fn default() -> Self {
        Self {
            horizontal: true,
            vertical: false,
        }
    }
}

/// Tuning for gesture recognition thresholds and pinch bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Movement from the touch start before a drag begins.
    pub drag_threshold_px: f64,
    /// Minimum inter-pointer spacing for a pinch to register.
    pub min_pinch_spacing_px: f64,
    /// Chart-specific upper bound on the committed pinch scale.
    pub max_pinch_scale: f64,
    pub drag: DragBehavior,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 25.0,
            min_pinch_spacing_px: 10.0,
            max_pinch_scale: 100.0,
            drag: DragBehavior::default(),
        }
    }
}

/// Gesture phase. Initial phase is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GesturePhase {
    #[default]
    None,
    Drag,
    PinchZoom,
    /// One of two pinch pointers lifted; the gesture winds down without a
    /// distinct snap action.
    PostZoom,
    LongPress,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEffect {
    /// Candidate touch matrix; the caller clamps and commits it.
    SetMatrix(Matrix23),
    /// Suppress the parent scroll container's gesture interception.
    DisallowParentIntercept,
    /// Restore the parent scroll container's gesture interception.
    AllowParentIntercept,
    /// Tap detected: run nearest-entry hit-testing at this pixel.
    Tap { x: f64, y: f64 },
}

pub type GestureEffects = SmallVec<[GestureEffect; 2]>;

/// Full machine state threaded through `transition`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureState {
    phase: GesturePhase,
    /// Touch start recorded at first pointer down.
    start: PixelPoint,
    /// Viewport matrix snapshot the active gesture is relative to.
    snapshot: Matrix23,
    pinch_start_spacing: f64,
    pinch_midpoint: PixelPoint,
    /// Last known position per active pointer.
    pointers: SmallVec<[(u64, PixelPoint); 2]>,
    /// Whether a drag or pinch happened since the first down (tap veto).
    moved: bool,
}

impl GestureState {
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    fn upsert_pointer(&mut self, id: u64, position: PixelPoint) {
        if let Some(slot) = self.pointers.iter_mut().find(|(existing, _)| *existing == id) {
            slot.1 = position;
        } else {
            self.pointers.push((id, position));
        }
    }

    fn remove_pointer(&mut self, id: u64) {
        self.pointers.retain(|(existing, _)| *existing != id);
    }

    fn pointer_pair(&self) -> Option<(PixelPoint, PixelPoint)> {
        if self.pointers.len() < 2 {
            return None;
        }
        Some((self.pointers[0].1, self.pointers[1].1))
    }
}

/// Pure transition function.
///
/// `live_matrix` is the currently committed viewport matrix; it is captured
/// into the state snapshot when a gesture begins so per-frame deltas apply
/// to a stable base instead of compounding.
pub fn transition(
    mut state: GestureState,
    event: PointerEvent,
    config: &GestureConfig,
    live_matrix: Matrix23,
) -> (GestureState, GestureEffects) {
    let mut effects = GestureEffects::new();
    let position = event.position();

    match event.action {
        PointerAction::Down => {
            state = GestureState::default();
            state.upsert_pointer(event.pointer_id, position);
            state.start = position;
            state.snapshot = live_matrix;
        }
        PointerAction::PointerDown => {
            state.upsert_pointer(event.pointer_id, position);
            if state.phase != GesturePhase::PinchZoom {
                if let Some((a, b)) = state.pointer_pair() {
                    let spacing = a.distance_to(b);
                    if spacing > config.min_pinch_spacing_px {
                        state.phase = GesturePhase::PinchZoom;
                        state.snapshot = live_matrix;
                        state.pinch_start_spacing = spacing;
                        state.pinch_midpoint =
                            PixelPoint::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
                        state.moved = true;
                        effects.push(GestureEffect::DisallowParentIntercept);
                    }
                }
            }
        }
        PointerAction::Move => {
            state.upsert_pointer(event.pointer_id, position);
            match state.phase {
                GesturePhase::None => {
                    if position.distance_to(state.start) > config.drag_threshold_px {
                        state.phase = GesturePhase::Drag;
                        state.snapshot = live_matrix;
                        state.moved = true;
                        effects.push(GestureEffect::DisallowParentIntercept);
                        effects.push(GestureEffect::SetMatrix(drag_candidate(
                            &state, position, config,
                        )));
                    }
                }
                GesturePhase::Drag => {
                    effects.push(GestureEffect::SetMatrix(drag_candidate(
                        &state, position, config,
                    )));
                }
                GesturePhase::PinchZoom => {
                    if let Some(candidate) = pinch_candidate(&state, config) {
                        effects.push(GestureEffect::SetMatrix(candidate));
                    }
                }
                GesturePhase::PostZoom | GesturePhase::LongPress => {}
            }
        }
        PointerAction::LongPress => {
            if state.phase == GesturePhase::None {
                state.phase = GesturePhase::LongPress;
                effects.push(GestureEffect::DisallowParentIntercept);
            }
        }
        PointerAction::PointerUp => {
            state.remove_pointer(event.pointer_id);
            if state.phase == GesturePhase::PinchZoom {
                state.phase = GesturePhase::PostZoom;
            }
        }
        PointerAction::Up => {
            if state.phase == GesturePhase::None && !state.moved {
                effects.push(GestureEffect::Tap {
                    x: event.x,
                    y: event.y,
                });
            }
            state = GestureState::default();
            effects.push(GestureEffect::AllowParentIntercept);
        }
    }

    (state, effects)
}

/// Drag translation relative to the snapshot, restricted to the configured
/// axes.
fn drag_candidate(state: &GestureState, position: PixelPoint, config: &GestureConfig) -> Matrix23 {
    let dx = if config.drag.horizontal {
        position.x - state.start.x
    } else {
        0.0
    };
    let dy = if config.drag.vertical {
        position.y - state.start.y
    } else {
        0.0
    };
    state.snapshot.post_translate(dx, dy)
}

/// Pinch scale about the snapshot midpoint, applied to the snapshot matrix.
///
/// Returns `None` when the resulting scale would leave
/// `[MIN_PINCH_SCALE, max_pinch_scale]`; the frame is skipped rather than
/// clamped, to avoid visible snapping.
fn pinch_candidate(state: &GestureState, config: &GestureConfig) -> Option<Matrix23> {
    let (a, b) = state.pointer_pair()?;
    let spacing = a.distance_to(b);
    if spacing <= config.min_pinch_spacing_px {
        return None;
    }

    let factor = spacing / state.pinch_start_spacing;
    let result_scale_x = state.snapshot.scale_x * factor;
    let result_scale_y = state.snapshot.scale_y * factor;
    let in_bounds = |scale: f64| (MIN_PINCH_SCALE..=config.max_pinch_scale).contains(&scale);
    if !in_bounds(result_scale_x) || !in_bounds(result_scale_y) {
        return None;
    }

    Some(state.snapshot.post_scale_about(
        factor,
        factor,
        state.pinch_midpoint.x,
        state.pinch_midpoint.y,
    ))
}

/// Stateful driver over the pure transition core.
#[derive(Debug, Clone, Default)]
pub struct GestureMachine {
    state: GestureState,
    config: GestureConfig,
}

impl GestureMachine {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            state: GestureState::default(),
            config,
        }
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.state.phase()
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn handle(&mut self, event: PointerEvent, live_matrix: Matrix23) -> GestureEffects {
        let (next, effects) = transition(std::mem::take(&mut self.state), event, &self.config, live_matrix);
        self.state = next;
        effects
    }
}
