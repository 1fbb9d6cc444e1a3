use crate::core::types::ValuePoint;

/// Result of a simplification pass.
///
/// `Unchanged` means no reduction was attempted (epsilon <= 0 or fewer than
/// three points); callers must treat it distinctly from a reduction that
/// happened to retain every point.
#[derive(Debug, Clone, PartialEq)]
pub enum Simplified {
    Unchanged,
    Reduced(Vec<ValuePoint>),
}

impl Simplified {
    /// The effective point set: the original on `Unchanged`, the reduced
    /// set otherwise.
    #[must_use]
    pub fn resolve<'a>(&'a self, original: &'a [ValuePoint]) -> &'a [ValuePoint] {
        match self {
            Self::Unchanged => original,
            Self::Reduced(points) => points,
        }
    }
}

/// Douglas–Peucker polyline reduction.
///
/// Retains the first and last point, then recursively keeps every point
/// whose perpendicular distance to the current chord exceeds `epsilon`.
/// Output preserves original order and is always a subset of the input.
#[must_use]
pub fn simplify(points: &[ValuePoint], epsilon: f64) -> Simplified {
    if epsilon <= 0.0 || points.len() < 3 {
        return Simplified::Unchanged;
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    simplify_segment(points, 0, points.len() - 1, epsilon, &mut keep);

    Simplified::Reduced(
        points
            .iter()
            .zip(&keep)
            .filter_map(|(point, &kept)| kept.then_some(*point))
            .collect(),
    )
}

fn simplify_segment(points: &[ValuePoint], start: usize, end: usize, epsilon: f64, keep: &mut [bool]) {
    if end <= start + 1 {
        return;
    }

    let mut max_distance = 0.0;
    let mut max_index = start;
    for index in (start + 1)..end {
        let distance = perpendicular_distance(points[index], points[start], points[end]);
        if distance > max_distance {
            max_distance = distance;
            max_index = index;
        }
    }

    if max_distance > epsilon {
        keep[max_index] = true;
        simplify_segment(points, start, max_index, epsilon, keep);
        simplify_segment(points, max_index, end, epsilon, keep);
    }
}

/// Perpendicular distance from `point` to the chord `a`–`b`, as the 2D
/// cross-product magnitude over the chord length. A zero-length chord falls
/// back to the plain point distance.
fn perpendicular_distance(point: ValuePoint, a: ValuePoint, b: ValuePoint) -> f64 {
    let chord_len = (b.x - a.x).hypot(b.y - a.y);
    if chord_len == 0.0 {
        return (point.x - a.x).hypot(point.y - a.y);
    }

    let cross = (point.x - a.x) * (b.y - a.y) - (point.y - a.y) * (b.x - a.x);
    cross.abs() / chord_len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(values: &[(f64, f64)]) -> Vec<ValuePoint> {
        values.iter().map(|&(x, y)| ValuePoint::new(x, y)).collect()
    }

    #[test]
    fn epsilon_zero_is_a_no_op() {
        let points = line(&[(0.0, 1.0), (1.0, 5.0), (2.0, 1.0)]);
        assert_eq!(simplify(&points, 0.0), Simplified::Unchanged);
    }

    #[test]
    fn short_input_is_a_no_op() {
        let points = line(&[(0.0, 1.0), (1.0, 5.0)]);
        assert_eq!(simplify(&points, 10.0), Simplified::Unchanged);
    }

    #[test]
    fn spike_below_epsilon_is_dropped() {
        let points = line(&[(0.0, 1.0), (1.0, 5.0), (2.0, 1.0)]);
        let reduced = simplify(&points, 10.0);
        assert_eq!(
            reduced,
            Simplified::Reduced(line(&[(0.0, 1.0), (2.0, 1.0)]))
        );
    }

    #[test]
    fn spike_above_epsilon_is_retained() {
        let points = line(&[(0.0, 1.0), (1.0, 5.0), (2.0, 1.0)]);
        let reduced = simplify(&points, 1.0);
        assert_eq!(reduced, Simplified::Reduced(points));
    }
}
