//! Polygons as ordered 2D vertex lists

use std::f64::consts::PI;
use serde::Serialize;
use crate::math::{Matrix, Vector};
use crate::rasterizer::Buffer;
use super::{Shape, ShapeError};

/// Ordered vertex list, optionally closed back to the first vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    vertices: Vec<Vector>,
    is_closed: bool,
}

impl Polygon {
    /// Every vertex must be exactly 2D and there must be at least one.
    pub fn new(vertices: Vec<Vector>, is_closed: bool) -> Result<Self, ShapeError> {
        if vertices.is_empty() {
            return Err(ShapeError::InvalidShape("no vertices".to_string()));
        }
        if let Some((i, v)) = vertices.iter().enumerate().find(|(_, v)| v.dim() != 2) {
            return Err(ShapeError::InvalidShape(format!(
                "vertex {} has dimension {}, expected 2",
                i,
                v.dim()
            )));
        }
        Ok(Self { vertices, is_closed })
    }

    /// Closed polygon
    pub fn closed(vertices: Vec<Vector>) -> Result<Self, ShapeError> {
        Self::new(vertices, true)
    }

    /// Open polyline (no closing edge)
    pub fn open(vertices: Vec<Vector>) -> Result<Self, ShapeError> {
        Self::new(vertices, false)
    }

    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Edges in draw order, including the wrap-around edge when closed
    pub fn segments(&self) -> impl Iterator<Item = (&Vector, &Vector)> + '_ {
        let closing = if self.is_closed {
            self.vertices.last().zip(self.vertices.first())
        } else {
            None
        };
        self.vertices
            .windows(2)
            .map(|pair| (&pair[0], &pair[1]))
            .chain(closing)
    }
}

impl Shape for Polygon {
    fn affine_transform(&mut self, m: &Matrix, t: &Vector) -> Result<(), ShapeError> {
        if m.shape() != (2, 2) {
            let (r, c) = m.shape();
            return Err(ShapeError::TypeMismatch(format!(
                "transform matrix must be 2x2, got {}x{}",
                r, c
            )));
        }
        if t.dim() != 2 {
            return Err(ShapeError::TypeMismatch(format!(
                "translation must be a 2D vector, got {}-vector",
                t.dim()
            )));
        }

        // Compute everything first so a failure leaves the polygon untouched
        let moved = self
            .vertices
            .iter()
            .map(|v| m.multiply_vector(v)?.add(t))
            .collect::<Result<Vec<_>, _>>()?;
        self.vertices = moved;
        Ok(())
    }

    fn draw(&self, buffer: &mut Buffer) -> Result<(), ShapeError> {
        for (a, b) in self.segments() {
            buffer.draw_line(a, b)?;
        }
        Ok(())
    }
}

/// Closed polygon with `sides` vertices evenly spaced on a circle of
/// `radius` around the origin, starting on the positive first axis.
pub fn regular_polygon(sides: usize, radius: f64) -> Result<Polygon, ShapeError> {
    if sides < 3 {
        return Err(ShapeError::InvalidSides(sides));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ShapeError::InvalidRadius(radius));
    }

    let vertices = (0..sides)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / sides as f64;
            Vector::new(vec![radius * angle.cos(), radius * angle.sin()])
        })
        .collect::<Result<Vec<_>, _>>()?;

    Polygon::closed(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    fn p(a: f64, b: f64) -> Vector {
        Vector::new(vec![a, b]).unwrap()
    }

    #[test]
    fn test_new_requires_2d_vertices() {
        assert!(matches!(Polygon::closed(vec![]), Err(ShapeError::InvalidShape(_))));
        let bad = vec![p(0.0, 0.0), Vector::new(vec![1.0, 2.0, 3.0]).unwrap()];
        assert!(matches!(Polygon::closed(bad), Err(ShapeError::InvalidShape(_))));
    }

    #[test]
    fn test_regular_square() {
        let square = regular_polygon(4, 1.0).unwrap();
        let verts = square.vertices();
        assert_eq!(verts.len(), 4);
        assert!(square.is_closed());

        for v in verts {
            assert!((v.norm() - 1.0).abs() < EPSILON);
        }
        for i in 0..4 {
            let a = &verts[i];
            let b = &verts[(i + 1) % 4];
            let angle = (a.dot(b).unwrap() / (a.norm() * b.norm())).acos();
            assert!((angle - PI / 2.0).abs() < EPSILON);
        }
        assert!((verts[0].x() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_regular_polygon_validates() {
        assert_eq!(regular_polygon(2, 1.0), Err(ShapeError::InvalidSides(2)));
        assert_eq!(regular_polygon(5, 0.0), Err(ShapeError::InvalidRadius(0.0)));
        assert_eq!(regular_polygon(5, -1.0), Err(ShapeError::InvalidRadius(-1.0)));
        assert!(matches!(regular_polygon(5, f64::NAN), Err(ShapeError::InvalidRadius(_))));
    }

    #[test]
    fn test_segments_closed_and_open() {
        let verts = vec![p(0.0, 0.0), p(0.0, 2.0), p(2.0, 2.0)];
        let closed = Polygon::closed(verts.clone()).unwrap();
        let open = Polygon::open(verts).unwrap();

        assert_eq!(closed.segments().count(), 3);
        assert_eq!(open.segments().count(), 2);

        let last = closed.segments().last().unwrap();
        assert_eq!(last, (&p(2.0, 2.0), &p(0.0, 0.0)));
    }

    #[test]
    fn test_affine_transform() {
        let mut poly = Polygon::open(vec![p(1.0, 0.0), p(0.0, 1.0)]).unwrap();
        let m = Matrix::scaling(2.0, 3.0).unwrap();
        let t = Vector::translation(1.0, -1.0).unwrap();
        poly.affine_transform(&m, &t).unwrap();
        assert_eq!(poly.vertices(), &[p(3.0, -1.0), p(1.0, 2.0)]);
    }

    #[test]
    fn test_identity_transform_is_noop() {
        let mut poly = regular_polygon(6, 2.0).unwrap();
        let before = poly.clone();
        poly.affine_transform(&Matrix::identity(2).unwrap(), &Vector::zero(2).unwrap())
            .unwrap();
        assert_eq!(poly, before);
    }

    #[test]
    fn test_affine_transform_type_mismatch() {
        let mut poly = regular_polygon(3, 1.0).unwrap();
        let before = poly.clone();

        let m3 = Matrix::identity(3).unwrap();
        let t2 = Vector::zero(2).unwrap();
        assert!(matches!(poly.affine_transform(&m3, &t2), Err(ShapeError::TypeMismatch(_))));

        let m2 = Matrix::identity(2).unwrap();
        let t3 = Vector::zero(3).unwrap();
        assert!(matches!(poly.affine_transform(&m2, &t3), Err(ShapeError::TypeMismatch(_))));

        assert_eq!(poly, before);
    }

    #[test]
    fn test_draw_open_skips_closing_edge() {
        let verts = vec![p(0.0, 0.0), p(0.0, 4.0), p(4.0, 4.0)];

        let mut open_fb = Buffer::new(5, 5).unwrap();
        Polygon::open(verts.clone()).unwrap().draw(&mut open_fb).unwrap();
        // Bottom row plus right column, corner shared
        assert_eq!(open_fb.count_set(), 9);
        assert!(!open_fb.is_set(2, 2));

        let mut closed_fb = Buffer::new(5, 5).unwrap();
        Polygon::closed(verts).unwrap().draw(&mut closed_fb).unwrap();
        // The diagonal closing edge adds the inner diagonal pixels
        assert!(closed_fb.is_set(2, 2));
        assert!(closed_fb.count_set() > open_fb.count_set());
    }
}
