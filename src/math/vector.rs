//! Fixed-length vectors of reals
//!
//! Dimension is set at construction and never changes. Binary operations
//! require both operands to have exactly the same dimension.

use std::fmt;
use serde::{Serialize, Deserialize};
use super::error::MathError;

/// N-dimensional vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Build a vector from an element list.
    /// Fails on an empty list or any non-finite element.
    pub fn new(elements: Vec<f64>) -> Result<Self, MathError> {
        if elements.is_empty() {
            return Err(MathError::InvalidDimension(0));
        }
        if let Some(index) = elements.iter().position(|e| !e.is_finite()) {
            return Err(MathError::NonNumericElement { index });
        }
        Ok(Self { data: elements })
    }

    pub fn zero(dim: usize) -> Result<Self, MathError> {
        Self::filled(dim, 0.0)
    }

    pub fn ones(dim: usize) -> Result<Self, MathError> {
        Self::filled(dim, 1.0)
    }

    /// Unit vector with a 1 at `index`
    pub fn one_hot(dim: usize, index: usize) -> Result<Self, MathError> {
        let mut v = Self::zero(dim)?;
        if index >= dim {
            return Err(MathError::IndexOutOfRange { index, len: dim });
        }
        v.data[index] = 1.0;
        Ok(v)
    }

    /// 2D offset `(dx, dy)`
    pub fn translation(dx: f64, dy: f64) -> Result<Self, MathError> {
        Self::new(vec![dx, dy])
    }

    fn filled(dim: usize, value: f64) -> Result<Self, MathError> {
        if dim == 0 {
            return Err(MathError::InvalidDimension(dim));
        }
        Ok(Self { data: vec![value; dim] })
    }

    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, index: usize) -> Result<f64, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange { index, len: self.dim() })
    }

    /// First component; always present since dimension is at least 1
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Second component, if the vector has one
    pub fn y(&self) -> Option<f64> {
        self.data.get(1).copied()
    }

    fn check_same_dim(&self, other: &Vector, op: &'static str) -> Result<(), MathError> {
        if self.dim() != other.dim() {
            return Err(MathError::mismatch(
                op,
                format!("{}-vector", self.dim()),
                format!("{}-vector", other.dim()),
            ));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Vector, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<Vector, MathError> {
        self.check_same_dim(other, op)?;
        Vector::new(self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect())
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Result<Vector, MathError> {
        Vector::new(self.data.iter().map(|&a| f(a)).collect())
    }

    pub fn add(&self, other: &Vector) -> Result<Vector, MathError> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector, MathError> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    /// Add `s` to every element
    pub fn add_scalar(&self, s: f64) -> Result<Vector, MathError> {
        self.map(|a| a + s)
    }

    /// Subtract `s` from every element
    pub fn subtract_scalar(&self, s: f64) -> Result<Vector, MathError> {
        self.map(|a| a - s)
    }

    /// Multiply every element by `k`
    pub fn scale(&self, k: f64) -> Result<Vector, MathError> {
        self.map(|a| a * k)
    }

    pub fn dot(&self, other: &Vector) -> Result<f64, MathError> {
        self.check_same_dim(other, "dot product")?;
        Ok(self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum())
    }

    /// Hadamard product: a vector of pairwise products
    pub fn elementwise_product(&self, other: &Vector) -> Result<Vector, MathError> {
        self.zip_with(other, "element-wise product", |a, b| a * b)
    }

    /// Euclidean length
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|a| a * a).sum::<f64>().sqrt()
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = MathError;

    fn try_from(elements: Vec<f64>) -> Result<Self, Self::Error> {
        Vector::new(elements)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.data
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{:?}", self.data)
    }
}
