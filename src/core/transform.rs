use crate::core::matrix::Matrix23;
use crate::core::types::{ContentRect, PixelPoint, ValuePoint};
use crate::error::ChartResult;

/// Value-space to pixel-space transform engine for one y-axis side.
///
/// The composed mapping is three affine stages in a fixed, non-commutative
/// order: the value→pixel base transform, then the live touch matrix, then
/// the constant layout offset. The touch matrix is defined in the base
/// transform's coordinate space; reordering the stages breaks
/// gesture-relative zooming. The composed matrix is rebuilt from current
/// state on every conversion call so it can never go stale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transformer {
    matrix_value_to_px: Matrix23,
    matrix_offset: Matrix23,
}

impl Transformer {
    /// Rebuilds the base stage from the axis ranges.
    ///
    /// The y scale is negated: pixel y grows downward, data y grows upward.
    /// A zero delta forces the corresponding scale to 0 instead of leaving
    /// an infinite factor to propagate into drawing.
    pub fn prepare_value_to_pixel(
        &mut self,
        content: ContentRect,
        x_min: f64,
        delta_x: f64,
        delta_y: f64,
        y_min: f64,
    ) {
        let mut scale_x = content.width / delta_x;
        let mut scale_y = content.height / delta_y;
        if !scale_x.is_finite() {
            scale_x = 0.0;
        }
        if !scale_y.is_finite() {
            scale_y = 0.0;
        }

        self.matrix_value_to_px =
            Matrix23::translation(-x_min, -y_min).post_scale(scale_x, -scale_y);
    }

    /// Rebuilds the layout-offset stage.
    ///
    /// Normal orientation anchors the origin at the content rect's
    /// bottom-left. The inverted orientation (swapped-axis charts) anchors
    /// at the top-right with both axes flipped.
    pub fn prepare_offset(&mut self, content: ContentRect, inverted: bool) {
        self.matrix_offset = if inverted {
            Matrix23::scaling(-1.0, -1.0).then(Matrix23::translation(content.right(), content.top))
        } else {
            Matrix23::translation(content.left, content.bottom())
        };
    }

    /// Full forward composition: base, then touch, then offset.
    #[must_use]
    pub fn value_to_pixel_matrix(&self, touch: Matrix23) -> Matrix23 {
        self.matrix_value_to_px.then(touch).then(self.matrix_offset)
    }

    /// Inverse mapping, computed by inverting the freshly composed matrix
    /// as a whole rather than recomposing per-stage inverses.
    pub fn pixel_to_value_matrix(&self, touch: Matrix23) -> ChartResult<Matrix23> {
        self.value_to_pixel_matrix(touch).invert()
    }

    #[must_use]
    pub fn point_to_pixel(&self, point: ValuePoint, touch: Matrix23) -> PixelPoint {
        self.value_to_pixel_matrix(touch)
            .apply(PixelPoint::new(point.x, point.y))
    }

    pub fn pixel_to_point(&self, pixel: PixelPoint, touch: Matrix23) -> ChartResult<ValuePoint> {
        let mapped = self.pixel_to_value_matrix(touch)?.apply(pixel);
        Ok(ValuePoint::new(mapped.x, mapped.y))
    }

    #[must_use]
    pub fn points_to_pixels(&self, points: &[ValuePoint], touch: Matrix23) -> Vec<PixelPoint> {
        let matrix = self.value_to_pixel_matrix(touch);
        points
            .iter()
            .map(|point| matrix.apply(PixelPoint::new(point.x, point.y)))
            .collect()
    }

    pub fn pixels_to_values(
        &self,
        pixels: &[PixelPoint],
        touch: Matrix23,
    ) -> ChartResult<Vec<ValuePoint>> {
        let matrix = self.pixel_to_value_matrix(touch)?;
        Ok(pixels
            .iter()
            .map(|pixel| {
                let mapped = matrix.apply(*pixel);
                ValuePoint::new(mapped.x, mapped.y)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared(content: ContentRect) -> Transformer {
        let mut transformer = Transformer::default();
        transformer.prepare_value_to_pixel(content, 0.0, 10.0, 100.0, 0.0);
        transformer.prepare_offset(content, false);
        transformer
    }

    #[test]
    fn value_origin_maps_to_content_bottom_left() {
        let content = ContentRect::new(20.0, 10.0, 500.0, 300.0);
        let transformer = prepared(content);

        let px = transformer.point_to_pixel(ValuePoint::new(0.0, 0.0), Matrix23::identity());
        assert!((px.x - 20.0).abs() <= 1e-9);
        assert!((px.y - 310.0).abs() <= 1e-9);
    }

    #[test]
    fn y_axis_is_inverted() {
        let content = ContentRect::from_size(500.0, 300.0);
        let transformer = prepared(content);

        let top = transformer.point_to_pixel(ValuePoint::new(0.0, 100.0), Matrix23::identity());
        let bottom = transformer.point_to_pixel(ValuePoint::new(0.0, 0.0), Matrix23::identity());
        assert!(top.y < bottom.y);
        assert!((top.y - 0.0).abs() <= 1e-9);
        assert!((bottom.y - 300.0).abs() <= 1e-9);
    }

    #[test]
    fn zero_delta_scale_is_forced_to_zero_and_not_invertible() {
        let content = ContentRect::from_size(500.0, 300.0);
        let mut transformer = Transformer::default();
        transformer.prepare_value_to_pixel(content, 0.0, 0.0, 100.0, 0.0);
        transformer.prepare_offset(content, false);

        let px = transformer.point_to_pixel(ValuePoint::new(5.0, 0.0), Matrix23::identity());
        assert!(px.x.is_finite());
        assert!(
            transformer
                .pixel_to_value_matrix(Matrix23::identity())
                .is_err()
        );
    }

    #[test]
    fn inverted_offset_anchors_top_right() {
        let content = ContentRect::new(0.0, 0.0, 500.0, 300.0);
        let mut transformer = Transformer::default();
        transformer.prepare_value_to_pixel(content, 0.0, 10.0, 100.0, 0.0);
        transformer.prepare_offset(content, true);

        let origin = transformer.point_to_pixel(ValuePoint::new(0.0, 0.0), Matrix23::identity());
        assert!((origin.x - 500.0).abs() <= 1e-9);
        assert!((origin.y - 0.0).abs() <= 1e-9);
    }
}
