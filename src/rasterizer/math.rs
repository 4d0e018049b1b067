//! Distance helpers for rasterization

use crate::math::{MathError, Vector};

/// Minimum Euclidean distance from point `p` to the segment `[a, b]`.
///
/// Projects `p` onto the line through `a` and `b`, clamps the projection to
/// the segment, and measures from there. A degenerate segment (`a == b`)
/// measures straight to `a`.
pub fn point_to_segment_distance(p: &Vector, a: &Vector, b: &Vector) -> Result<f64, MathError> {
    let ab = b.subtract(a)?;
    let length = ab.norm();

    if length == 0.0 {
        return Ok(a.subtract(p)?.norm());
    }

    // Projection coefficient of p along a->b
    let t = a.subtract(p)?.dot(&a.subtract(b)?)? / (length * length);
    let t = t.clamp(0.0, 1.0);

    let closest = a.add(&ab.scale(t)?)?;
    Ok(p.subtract(&closest)?.norm())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn p(a: f64, b: f64) -> Vector {
        Vector::new(vec![a, b]).unwrap()
    }

    #[test]
    fn test_degenerate_segment() {
        let a = p(1.0, 1.0);
        let d = point_to_segment_distance(&p(4.0, 5.0), &a, &a).unwrap();
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn test_point_on_segment() {
        let a = p(0.0, 0.0);
        let b = p(4.0, 2.0);
        for t in [0.0, 0.25, 0.5, 1.0] {
            let q = p(4.0 * t, 2.0 * t);
            assert!(point_to_segment_distance(&q, &a, &b).unwrap() < EPS);
        }
    }

    #[test]
    fn test_point_beyond_endpoint() {
        let a = p(0.0, 0.0);
        let b = p(0.0, 3.0);
        // Beyond a along the line
        let before = p(0.0, -2.0);
        assert!((point_to_segment_distance(&before, &a, &b).unwrap() - 2.0).abs() < EPS);
        // Beyond b, off the line
        let after = p(3.0, 7.0);
        assert!((point_to_segment_distance(&after, &a, &b).unwrap() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_perpendicular_distance() {
        let a = p(0.0, 0.0);
        let b = p(0.0, 10.0);
        let d = point_to_segment_distance(&p(2.5, 4.0), &a, &b).unwrap();
        assert!((d - 2.5).abs() < EPS);
    }

    #[test]
    fn test_dimension_mismatch() {
        let q = Vector::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(point_to_segment_distance(&q, &p(0.0, 0.0), &p(1.0, 1.0)).is_err());
    }
}
