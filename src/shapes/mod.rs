//! 2D shapes that can be transformed and drawn into a buffer
//!
//! Polygon is the only geometry kind; regular polygons are built by a
//! constructor function rather than a separate type.

#![allow(dead_code)]

pub mod polygon;
pub mod transform;

pub use polygon::{regular_polygon, Polygon};
pub use transform::Transform2D;

use std::fmt;
use crate::math::{MathError, Matrix, Vector};
use crate::rasterizer::Buffer;

/// Capabilities every drawable shape provides
pub trait Shape {
    /// Replace every vertex `v` with `m * v + t`
    fn affine_transform(&mut self, m: &Matrix, t: &Vector) -> Result<(), ShapeError>;

    /// Rasterize the shape's edges into `buffer`
    fn draw(&self, buffer: &mut Buffer) -> Result<(), ShapeError>;
}

/// Shape construction / transform errors
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Regular polygon with fewer than 3 sides
    InvalidSides(usize),
    /// Regular polygon radius not strictly positive
    InvalidRadius(f64),
    /// Vertex list empty or a vertex is not 2D
    InvalidShape(String),
    /// Transform operand of the wrong kind (not 2x2 / not a 2D vector)
    TypeMismatch(String),
    /// Underlying vector/matrix failure
    Math(MathError),
}

impl From<MathError> for ShapeError {
    fn from(e: MathError) -> Self {
        ShapeError::Math(e)
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidSides(n) => {
                write!(f, "A polygon must have at least 3 sides, got {}", n)
            }
            ShapeError::InvalidRadius(r) => write!(f, "Radius must be positive, got {}", r),
            ShapeError::InvalidShape(msg) => write!(f, "Invalid polygon: {}", msg),
            ShapeError::TypeMismatch(msg) => write!(f, "Type mismatch: {}", msg),
            ShapeError::Math(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeError::Math(e) => Some(e),
            _ => None,
        }
    }
}
