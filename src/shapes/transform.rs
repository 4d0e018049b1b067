//! Affine transform builder
//!
//! Rotation, axis scaling and translation are accumulated as parameters and
//! composed once into a matrix/vector pair:
//!
//! `vertex' = (Rotation * Scaling) * vertex + translation`
//!
//! Scaling is always applied before rotation, whatever order the builder
//! methods are called in.

use serde::{Serialize, Deserialize};
use crate::math::{MathError, Matrix, Vector};
use super::{Shape, ShapeError};

/// Rotation (degrees), per-axis scale and translation of a 2D shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub rotation_degrees: f64,
    pub scale: (f64, f64),
    pub translation: (f64, f64),
}

impl Transform2D {
    /// No rotation, unit scale, no offset
    pub const IDENTITY: Transform2D = Transform2D {
        rotation_degrees: 0.0,
        scale: (1.0, 1.0),
        translation: (0.0, 0.0),
    };

    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Add to the rotation angle
    pub fn rotate_degrees(mut self, degrees: f64) -> Self {
        self.rotation_degrees += degrees;
        self
    }

    /// Multiply the per-axis scale factors
    pub fn scale(mut self, sx: f64, sy: f64) -> Self {
        self.scale = (self.scale.0 * sx, self.scale.1 * sy);
        self
    }

    /// Add to the translation
    pub fn translate(mut self, dx: f64, dy: f64) -> Self {
        self.translation = (self.translation.0 + dx, self.translation.1 + dy);
        self
    }

    /// Linear part `Rotation(theta) * Scaling(sx, sy)`
    pub fn matrix(&self) -> Result<Matrix, MathError> {
        let rotation = Matrix::rotation(self.rotation_degrees.to_radians())?;
        let scaling = Matrix::scaling(self.scale.0, self.scale.1)?;
        rotation.multiply(&scaling)
    }

    /// `(M, t)` ready for `Shape::affine_transform`
    pub fn compose(&self) -> Result<(Matrix, Vector), MathError> {
        let t = Vector::translation(self.translation.0, self.translation.1)?;
        Ok((self.matrix()?, t))
    }

    /// Compose and apply to a shape in one step
    pub fn apply_to<S: Shape>(&self, shape: &mut S) -> Result<(), ShapeError> {
        let (m, t) = self.compose()?;
        shape.affine_transform(&m, &t)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::regular_polygon;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identity_composes_to_identity() {
        let (m, t) = Transform2D::IDENTITY.compose().unwrap();
        assert_eq!(m, Matrix::identity(2).unwrap());
        assert_eq!(t, Vector::zero(2).unwrap());
    }

    #[test]
    fn test_scale_applies_before_rotation() {
        // Scale the first axis by 2, then rotate a quarter turn
        let tf = Transform2D::new().rotate_degrees(90.0).scale(2.0, 1.0);
        let m = tf.matrix().unwrap();
        let v = m.multiply_vector(&Vector::new(vec![1.0, 0.0]).unwrap()).unwrap();
        assert!(v.x().abs() < EPS);
        assert!((v.y().unwrap() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_builder_order_does_not_matter() {
        let a = Transform2D::new().scale(2.0, 3.0).rotate_degrees(30.0).translate(1.0, 2.0);
        let b = Transform2D::new().translate(1.0, 2.0).rotate_degrees(30.0).scale(2.0, 3.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_to_polygon() {
        let mut square = regular_polygon(4, 1.0).unwrap();
        Transform2D::new().translate(5.0, -2.0).apply_to(&mut square).unwrap();
        let first = &square.vertices()[0];
        assert!((first.x() - 6.0).abs() < EPS);
        assert!((first.y().unwrap() + 2.0).abs() < EPS);
    }

    #[test]
    fn test_non_finite_parameters_fail() {
        let tf = Transform2D::new().translate(f64::INFINITY, 0.0);
        assert!(tf.compose().is_err());
    }
}
