use serde::{Deserialize, Serialize};

use crate::core::types::PixelPoint;
use crate::error::{ChartError, ChartResult};

/// 2x3 affine transform over row vectors:
///
/// ```text
/// | scale_x  skew_x   trans_x |
/// | skew_y   scale_y  trans_y |
/// ```
///
/// `apply` maps `(x, y)` to
/// `(scale_x * x + skew_x * y + trans_x, skew_y * x + scale_y * y + trans_y)`.
///
/// This is the explicit value type standing in for a platform matrix: cheap
/// to copy, composed with `then`, inverted as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix23 {
    pub scale_x: f64,
    pub skew_x: f64,
    pub trans_x: f64,
    pub skew_y: f64,
    pub scale_y: f64,
    pub trans_y: f64,
}

impl Default for Matrix23 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix23 {
    #[must_use]
    pub fn identity() -> Self {
        Self {
            scale_x: 1.0,
            skew_x: 0.0,
            trans_x: 0.0,
            skew_y: 0.0,
            scale_y: 1.0,
            trans_y: 0.0,
        }
    }

    #[must_use]
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            trans_x: tx,
            trans_y: ty,
            ..Self::identity()
        }
    }

    #[must_use]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            scale_x: sx,
            scale_y: sy,
            ..Self::identity()
        }
    }

    /// Composes `self` followed by `next`: the result applies `self` first.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            scale_x: next.scale_x * self.scale_x + next.skew_x * self.skew_y,
            skew_x: next.scale_x * self.skew_x + next.skew_x * self.scale_y,
            trans_x: next.scale_x * self.trans_x + next.skew_x * self.trans_y + next.trans_x,
            skew_y: next.skew_y * self.scale_x + next.scale_y * self.skew_y,
            scale_y: next.skew_y * self.skew_x + next.scale_y * self.scale_y,
            trans_y: next.skew_y * self.trans_x + next.scale_y * self.trans_y + next.trans_y,
        }
    }

    /// Post-applies a translation.
    #[must_use]
    pub fn post_translate(self, dx: f64, dy: f64) -> Self {
        self.then(Self::translation(dx, dy))
    }

    /// Post-applies a scale about the origin.
    #[must_use]
    pub fn post_scale(self, sx: f64, sy: f64) -> Self {
        self.then(Self::scaling(sx, sy))
    }

    /// Post-applies a scale about an arbitrary pivot point.
    #[must_use]
    pub fn post_scale_about(self, sx: f64, sy: f64, pivot_x: f64, pivot_y: f64) -> Self {
        self.post_translate(-pivot_x, -pivot_y)
            .post_scale(sx, sy)
            .post_translate(pivot_x, pivot_y)
    }

    #[must_use]
    pub fn apply(self, point: PixelPoint) -> PixelPoint {
        PixelPoint::new(
            self.scale_x * point.x + self.skew_x * point.y + self.trans_x,
            self.skew_y * point.x + self.scale_y * point.y + self.trans_y,
        )
    }

    /// Applies the transform to a slice of points in place.
    pub fn apply_in_place(self, points: &mut [PixelPoint]) {
        for point in points {
            *point = self.apply(*point);
        }
    }

    #[must_use]
    pub fn determinant(self) -> f64 {
        self.scale_x * self.scale_y - self.skew_x * self.skew_y
    }

    /// Inverts the full composed transform.
    ///
    /// A zero or non-finite determinant (e.g. a zero-delta axis forced scale)
    /// is reported as an error rather than producing NaN coordinates.
    pub fn invert(self) -> ChartResult<Self> {
        let det = self.determinant();
        if !det.is_finite() || det == 0.0 {
            return Err(ChartError::NonInvertibleTransform);
        }

        let inv_det = 1.0 / det;
        let scale_x = self.scale_y * inv_det;
        let skew_x = -self.skew_x * inv_det;
        let skew_y = -self.skew_y * inv_det;
        let scale_y = self.scale_x * inv_det;

        Ok(Self {
            scale_x,
            skew_x,
            trans_x: -(scale_x * self.trans_x + skew_x * self.trans_y),
            skew_y,
            scale_y,
            trans_y: -(skew_y * self.trans_x + scale_y * self.trans_y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_applies_left_operand_first() {
        let scale_then_translate = Matrix23::scaling(2.0, 2.0).then(Matrix23::translation(10.0, 0.0));
        let mapped = scale_then_translate.apply(PixelPoint::new(3.0, 0.0));
        assert!((mapped.x - 16.0).abs() <= 1e-12);
    }

    #[test]
    fn invert_round_trips() {
        let matrix = Matrix23::scaling(2.0, -3.0)
            .post_translate(5.0, 7.0)
            .post_scale_about(1.5, 1.5, 100.0, 50.0);
        let inverse = matrix.invert().expect("invertible");

        let point = PixelPoint::new(12.0, -4.0);
        let round_trip = inverse.apply(matrix.apply(point));
        assert!((round_trip.x - point.x).abs() <= 1e-9);
        assert!((round_trip.y - point.y).abs() <= 1e-9);
    }

    #[test]
    fn zero_scale_is_not_invertible() {
        let matrix = Matrix23::scaling(0.0, 1.0);
        assert!(matrix.invert().is_err());
    }
}
