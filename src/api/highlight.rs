use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::data::ChartData;
use crate::core::matrix::Matrix23;
use crate::core::transform::Transformer;
use crate::core::types::{AxisSide, PixelPoint};

/// Selection produced by tap hit-testing, handed to the drawing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub series_index: usize,
    pub entry_index: usize,
}

/// Nearest entry to `pixel` across all series, by pixel distance.
///
/// Each series is projected through the transformer of its own axis side.
/// Empty series never match; an empty aggregate yields `None`.
pub(super) fn nearest_entry(
    data: &ChartData,
    pixel: PixelPoint,
    touch: Matrix23,
    transformer_for: impl Fn(AxisSide) -> Transformer,
) -> Option<Highlight> {
    let mut best: Option<(OrderedFloat<f64>, Highlight)> = None;

    for (series_index, series) in data.series().iter().enumerate() {
        let matrix = transformer_for(series.axis_side()).value_to_pixel_matrix(touch);
        for (entry_index, entry) in series.entries().iter().enumerate() {
            let projected = matrix.apply(PixelPoint::new(entry.x(), entry.y()));
            let distance = OrderedFloat(projected.distance_to(pixel));
            let candidate = (
                distance,
                Highlight {
                    series_index,
                    entry_index,
                },
            );
            match &best {
                Some((best_distance, _)) if *best_distance <= distance => {}
                _ => best = Some(candidate),
            }
        }
    }

    best.map(|(_, highlight)| highlight)
}
