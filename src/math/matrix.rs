//! R x C matrices of reals
//!
//! Stored row-major. Besides the algebra, this provides the geometric
//! constructors used to build 2D shape transforms.

use std::fmt;
use super::error::MathError;
use super::vector::Vector;

/// Row-major matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Build from nested rows. All rows must be non-empty, the same length,
    /// and hold finite values only.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MathError> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            Some(_) => return Err(MathError::InvalidShape("rows must not be empty".to_string())),
            None => return Err(MathError::InvalidShape("matrix needs at least one row".to_string())),
        };
        if let Some(i) = rows.iter().position(|r| r.len() != cols) {
            return Err(MathError::InvalidShape(format!(
                "row {} has {} elements, expected {}",
                i,
                rows[i].len(),
                cols
            )));
        }
        let num_rows = rows.len();
        Self::from_flat(rows.into_iter().flatten().collect(), num_rows, cols)
    }

    /// Build from row vectors of equal dimension
    pub fn from_rows(rows: &[Vector]) -> Result<Self, MathError> {
        Self::new(rows.iter().map(|r| r.as_slice().to_vec()).collect())
    }

    fn from_flat(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self, MathError> {
        if let Some(index) = data.iter().position(|e| !e.is_finite()) {
            return Err(MathError::NonNumericElement { index });
        }
        Ok(Self { data, rows, cols })
    }

    fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, MathError> {
        if rows == 0 || cols == 0 {
            return Err(MathError::InvalidDimension(rows.min(cols)));
        }
        Ok(Self { data: vec![value; rows * cols], rows, cols })
    }

    pub fn identity(n: usize) -> Result<Self, MathError> {
        let mut m = Self::filled(n, n, 0.0)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    pub fn zero(rows: usize, cols: usize) -> Result<Self, MathError> {
        Self::filled(rows, cols, 0.0)
    }

    pub fn ones(rows: usize, cols: usize) -> Result<Self, MathError> {
        Self::filled(rows, cols, 1.0)
    }

    /// Counter-clockwise 2D rotation by `theta` radians
    pub fn rotation(theta: f64) -> Result<Self, MathError> {
        let (s, c) = theta.sin_cos();
        Self::new(vec![vec![c, -s], vec![s, c]])
    }

    /// Axis scaling `diag(a, b)`
    pub fn scaling(a: f64, b: f64) -> Result<Self, MathError> {
        Self::new(vec![vec![a, 0.0], vec![0.0, b]])
    }

    /// Replicate `v` `count` times.
    /// Axis 0 stacks copies as rows (`count x dim`); axis 1 or -1 stacks
    /// them as columns (`dim x count`).
    pub fn expand_vector(v: &Vector, axis: i32, count: usize) -> Result<Self, MathError> {
        if count == 0 {
            return Err(MathError::InvalidDimension(count));
        }
        match axis {
            0 => Self::from_flat(v.as_slice().repeat(count), count, v.dim()),
            1 | -1 => {
                let data = v.as_slice().iter().flat_map(|&e| std::iter::repeat(e).take(count)).collect();
                Self::from_flat(data, v.dim(), count)
            }
            _ => Err(MathError::InvalidAxis(axis)),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64, MathError> {
        if row >= self.rows {
            return Err(MathError::IndexOutOfRange { index: row, len: self.rows });
        }
        if col >= self.cols {
            return Err(MathError::IndexOutOfRange { index: col, len: self.cols });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// The i-th row as a vector
    pub fn row(&self, index: usize) -> Result<Vector, MathError> {
        if index >= self.rows {
            return Err(MathError::IndexOutOfRange { index, len: self.rows });
        }
        let start = index * self.cols;
        Vector::new(self.data[start..start + self.cols].to_vec())
    }

    /// The j-th column as a vector
    pub fn col(&self, index: usize) -> Result<Vector, MathError> {
        if index >= self.cols {
            return Err(MathError::IndexOutOfRange { index, len: self.cols });
        }
        Vector::new((0..self.rows).map(|i| self.data[i * self.cols + index]).collect())
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Matrix { data, rows: self.cols, cols: self.rows }
    }

    fn shape_label(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }

    fn zip_with(&self, other: &Matrix, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<Matrix, MathError> {
        if self.shape() != other.shape() {
            return Err(MathError::mismatch(op, self.shape_label(), other.shape_label()));
        }
        let data = self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect();
        Self::from_flat(data, self.rows, self.cols)
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Result<Matrix, MathError> {
        Self::from_flat(self.data.iter().map(|&a| f(a)).collect(), self.rows, self.cols)
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, MathError> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MathError> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    pub fn add_scalar(&self, s: f64) -> Result<Matrix, MathError> {
        self.map(|a| a + s)
    }

    pub fn subtract_scalar(&self, s: f64) -> Result<Matrix, MathError> {
        self.map(|a| a - s)
    }

    /// Multiply every element by `k`
    pub fn scale(&self, k: f64) -> Result<Matrix, MathError> {
        self.map(|a| a * k)
    }

    pub fn elementwise_product(&self, other: &Matrix) -> Result<Matrix, MathError> {
        self.zip_with(other, "element-wise product", |a, b| a * b)
    }

    /// Matrix-vector product `self * v`
    pub fn multiply_vector(&self, v: &Vector) -> Result<Vector, MathError> {
        if self.cols != v.dim() {
            return Err(MathError::mismatch(
                "matrix multiply vector",
                self.shape_label(),
                format!("{}-vector", v.dim()),
            ));
        }
        let x = v.as_slice();
        Vector::new(
            (0..self.rows)
                .map(|i| {
                    let row = &self.data[i * self.cols..(i + 1) * self.cols];
                    row.iter().zip(x).map(|(a, b)| a * b).sum()
                })
                .collect(),
        )
    }

    /// Matrix product `self * other`
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MathError> {
        if self.cols != other.rows {
            return Err(MathError::mismatch(
                "matrix multiply matrix",
                self.shape_label(),
                other.shape_label(),
            ));
        }
        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                for k in 0..self.cols {
                    data[i * other.cols + j] += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
            }
        }
        Self::from_flat(data, self.rows, other.cols)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<&[f64]> = self.data.chunks(self.cols).collect();
        write!(f, "Matrix{:?}", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON;
    use std::f64::consts::PI;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn approx_eq(a: &Matrix, b: &Matrix) -> bool {
        a.shape() == b.shape() && a.data.iter().zip(&b.data).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn test_new_validates_rows() {
        assert!(matches!(Matrix::new(vec![]), Err(MathError::InvalidShape(_))));
        assert!(matches!(Matrix::new(vec![vec![]]), Err(MathError::InvalidShape(_))));
        assert!(matches!(
            Matrix::new(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(MathError::InvalidShape(_))
        ));
        assert_eq!(
            Matrix::new(vec![vec![1.0, 2.0], vec![f64::NAN, 0.0]]),
            Err(MathError::NonNumericElement { index: 2 })
        );
    }

    #[test]
    fn test_from_rows() {
        let rows = [
            Vector::new(vec![1.0, 2.0]).unwrap(),
            Vector::new(vec![3.0, 4.0]).unwrap(),
        ];
        let a = Matrix::from_rows(&rows).unwrap();
        assert_eq!(a, m(&[&[1.0, 2.0], &[3.0, 4.0]]));
        assert_eq!(a.row(1).unwrap(), rows[1]);

        let ragged = [Vector::new(vec![1.0]).unwrap(), Vector::new(vec![1.0, 2.0]).unwrap()];
        assert!(matches!(Matrix::from_rows(&ragged), Err(MathError::InvalidShape(_))));
        assert!(matches!(Matrix::from_rows(&[]), Err(MathError::InvalidShape(_))));
    }

    #[test]
    fn test_identity_multiply_vector() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let v = Vector::new(vec![0.5, -1.0, 2.0]).unwrap();
        let id = Matrix::identity(a.cols()).unwrap();
        assert_eq!(id.multiply_vector(&v).unwrap(), v);
    }

    #[test]
    fn test_multiply_vector() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        let v = Vector::new(vec![1.0, -1.0]).unwrap();
        let r = a.multiply_vector(&v).unwrap();
        assert_eq!(r.as_slice(), &[-1.0, -1.0, -1.0]);

        let bad = Vector::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(a.multiply_vector(&bad), Err(MathError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_multiply_matrix() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = m(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
        let c = a.multiply(&b).unwrap();
        assert_eq!(c, m(&[&[58.0, 64.0], &[139.0, 154.0]]));

        assert!(matches!(a.multiply(&a), Err(MathError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_order_matters() {
        let r = Matrix::rotation(PI / 2.0).unwrap();
        let s = Matrix::scaling(2.0, 1.0).unwrap();
        assert!(!approx_eq(&r.multiply(&s).unwrap(), &s.multiply(&r).unwrap()));
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        let r = Matrix::rotation(0.0).unwrap();
        assert!(approx_eq(&r, &Matrix::identity(2).unwrap()));
    }

    #[test]
    fn test_rotation_inverse() {
        for theta in [0.3, 1.0, PI, -2.5] {
            let r = Matrix::rotation(theta).unwrap();
            let back = Matrix::rotation(-theta).unwrap();
            assert!(approx_eq(&r.multiply(&back).unwrap(), &Matrix::identity(2).unwrap()));
        }
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let r = Matrix::rotation(PI / 2.0).unwrap();
        let v = r.multiply_vector(&Vector::new(vec![1.0, 0.0]).unwrap()).unwrap();
        assert!(v.x().abs() < EPSILON);
        assert!((v.y().unwrap() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_elementwise_ops() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[2.0, 0.0], &[1.0, -1.0]]);
        assert_eq!(a.add(&b).unwrap(), m(&[&[3.0, 2.0], &[4.0, 3.0]]));
        assert_eq!(a.subtract(&b).unwrap(), m(&[&[-1.0, 2.0], &[2.0, 5.0]]));
        assert_eq!(a.elementwise_product(&b).unwrap(), m(&[&[2.0, 0.0], &[3.0, -4.0]]));
        assert_eq!(a.add_scalar(1.0).unwrap(), m(&[&[2.0, 3.0], &[4.0, 5.0]]));
        assert_eq!(a.subtract_scalar(1.0).unwrap(), m(&[&[0.0, 1.0], &[2.0, 3.0]]));
        assert_eq!(a.scale(2.0).unwrap(), m(&[&[2.0, 4.0], &[6.0, 8.0]]));

        let c = m(&[&[1.0, 2.0, 3.0]]);
        assert!(matches!(a.add(&c), Err(MathError::DimensionMismatch { .. })));
        assert!(matches!(a.elementwise_product(&c), Err(MathError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_transpose_row_col() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));

        assert_eq!(a.row(1).unwrap().as_slice(), &[4.0, 5.0, 6.0]);
        assert_eq!(a.col(2).unwrap().as_slice(), &[3.0, 6.0]);
        assert_eq!(a.row(2), Err(MathError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(a.col(3), Err(MathError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(a.get(0, 1), Ok(2.0));
    }

    #[test]
    fn test_named_constructors() {
        assert_eq!(Matrix::zero(2, 3).unwrap().shape(), (2, 3));
        assert_eq!(Matrix::ones(1, 2).unwrap(), m(&[&[1.0, 1.0]]));
        assert_eq!(Matrix::scaling(2.0, 3.0).unwrap(), m(&[&[2.0, 0.0], &[0.0, 3.0]]));
        assert_eq!(Matrix::identity(0), Err(MathError::InvalidDimension(0)));
        assert_eq!(Matrix::zero(0, 2), Err(MathError::InvalidDimension(0)));
    }

    #[test]
    fn test_expand_vector() {
        let v = Vector::new(vec![1.0, 2.0, 3.0]).unwrap();

        let rows = Matrix::expand_vector(&v, 0, 2).unwrap();
        assert_eq!(rows, m(&[&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]]));

        let cols = Matrix::expand_vector(&v, 1, 2).unwrap();
        assert_eq!(cols, m(&[&[1.0, 1.0], &[2.0, 2.0], &[3.0, 3.0]]));
        assert_eq!(Matrix::expand_vector(&v, -1, 2).unwrap(), cols);

        assert_eq!(Matrix::expand_vector(&v, 2, 2), Err(MathError::InvalidAxis(2)));
        assert_eq!(Matrix::expand_vector(&v, 0, 0), Err(MathError::InvalidDimension(0)));
    }
}
