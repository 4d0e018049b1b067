//! Errors raised by vector and matrix operations

use std::fmt;

/// Vector/matrix error types
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// A requested dimension was zero
    InvalidDimension(usize),
    /// Operand shapes do not fit the operation
    DimensionMismatch {
        op: &'static str,
        left: String,
        right: String,
    },
    /// An element is NaN or infinite
    NonNumericElement { index: usize },
    /// Rows are missing or of unequal length
    InvalidShape(String),
    /// Expansion axis outside {0, 1, -1}
    InvalidAxis(i32),
    /// Positional access past the end
    IndexOutOfRange { index: usize, len: usize },
}

impl MathError {
    pub(crate) fn mismatch(op: &'static str, left: impl fmt::Display, right: impl fmt::Display) -> Self {
        MathError::DimensionMismatch {
            op,
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidDimension(dim) => {
                write!(f, "Invalid dimension {}: must be larger than 0", dim)
            }
            MathError::DimensionMismatch { op, left, right } => {
                write!(f, "Dimension mismatch for {}: {} with {}", op, left, right)
            }
            MathError::NonNumericElement { index } => {
                write!(f, "Element {} is not a finite number", index)
            }
            MathError::InvalidShape(msg) => write!(f, "Invalid shape: {}", msg),
            MathError::InvalidAxis(axis) => write!(f, "Invalid axis {} to expand", axis),
            MathError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}", index, len)
            }
        }
    }
}

impl std::error::Error for MathError {}
