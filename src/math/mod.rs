//! Linear algebra value types
//!
//! Small, allocation-backed vectors and matrices of `f64`. Every value keeps
//! its elements finite; operations never mutate their operands.
//!
//! # Module Organization
//!
//! - `vector` - Vector and its named constructors
//! - `matrix` - Matrix, geometric constructors (rotation, scaling)
//! - `error` - MathError shared by both

#![allow(dead_code)]

pub mod error;
pub mod matrix;
pub mod vector;

pub use error::MathError;
pub use matrix::Matrix;
pub use vector::Vector;

/// Tolerance used when comparing floating-point results
pub const EPSILON: f64 = 1e-9;
