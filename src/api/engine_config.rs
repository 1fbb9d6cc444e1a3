use serde::{Deserialize, Serialize};

use crate::core::viewport::ViewportTuning;
use crate::error::{ChartError, ChartResult};
use crate::interaction::GestureConfig;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    /// Content rect width in pixels, delivered by the hosting layout.
    pub width: f64,
    /// Content rect height in pixels.
    pub height: f64,
    /// Fraction of the y data range padded below the minimum.
    #[serde(default = "default_y_space_ratio")]
    pub y_space_before_ratio: f64,
    /// Fraction of the y data range padded above the maximum.
    #[serde(default = "default_y_space_ratio")]
    pub y_space_after_ratio: f64,
    /// Swapped-axis orientation (horizontally oriented charts).
    #[serde(default)]
    pub inverted: bool,
    #[serde(default)]
    pub viewport: ViewportTuning,
    #[serde(default)]
    pub gestures: GestureConfig,
}

impl ChartEngineConfig {
    /// Creates a minimal config for the given content size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            y_space_before_ratio: default_y_space_ratio(),
            y_space_after_ratio: default_y_space_ratio(),
            inverted: false,
            viewport: ViewportTuning::default(),
            gestures: GestureConfig::default(),
        }
    }

    /// Sets y-axis spacing ratios.
    #[must_use]
    pub fn with_y_space_ratios(mut self, before: f64, after: f64) -> Self {
        self.y_space_before_ratio = before;
        self.y_space_after_ratio = after;
        self
    }

    /// Sets swapped-axis orientation.
    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Sets pan/zoom bounds and drag offsets.
    #[must_use]
    pub fn with_viewport_tuning(mut self, tuning: ViewportTuning) -> Self {
        self.viewport = tuning;
        self
    }

    /// Sets gesture recognition tuning.
    #[must_use]
    pub fn with_gesture_config(mut self, gestures: GestureConfig) -> Self {
        self.gestures = gestures;
        self
    }

    pub(super) fn validate(self) -> ChartResult<Self> {
        if !self.y_space_before_ratio.is_finite()
            || !self.y_space_after_ratio.is_finite()
            || self.y_space_before_ratio < 0.0
            || self.y_space_after_ratio < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "y spacing ratios must be finite and >= 0".to_owned(),
            ));
        }
        if !self.gestures.drag_threshold_px.is_finite() || self.gestures.drag_threshold_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "drag threshold must be finite and >= 0".to_owned(),
            ));
        }
        if !self.gestures.min_pinch_spacing_px.is_finite()
            || self.gestures.min_pinch_spacing_px < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "min pinch spacing must be finite and >= 0".to_owned(),
            ));
        }
        if !self.gestures.max_pinch_scale.is_finite() || self.gestures.max_pinch_scale <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "max pinch scale must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_y_space_ratio() -> f64 {
    0.10
}
