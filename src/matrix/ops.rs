//! Element-wise and matrix arithmetic, plus per-axis reductions.
//!
//! Binary element-wise operations need identical shapes; the matrix product
//! needs `left.ncols() == right.nrows()`. Reductions delegate to [`Vector`]
//! one row or column at a time.

use super::Matrix;
use crate::core::direction::Axis;
use crate::error::{LinalgError, Result};
use crate::vector::Vector;
use crate::vector::ops::round_half_up;

impl Matrix {
    fn zip_with(&self, other: &Matrix, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<Matrix> {
        if self.shape() != other.shape() {
            return Err(self.mismatch(op, other));
        }
        Ok(self.with_data(
            self.as_slice()
                .iter()
                .zip(other.as_slice())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        ))
    }

    /// Apply `f` to every entry.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        self.with_data(self.as_slice().iter().map(|&x| f(x)).collect())
    }

    pub fn plus(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "plus", |a, b| a + b)
    }

    pub fn plus_scalar(&self, c: f64) -> Matrix {
        self.map(|x| x + c)
    }

    pub fn minus(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "minus", |a, b| a - b)
    }

    pub fn minus_scalar(&self, c: f64) -> Matrix {
        self.map(|x| x - c)
    }

    /// Hadamard (element-wise) product.
    pub fn multiply_each(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "multiply_each", |a, b| a * b)
    }

    pub fn multiply_scalar(&self, c: f64) -> Matrix {
        self.map(|x| x * c)
    }

    /// Matrix product `self · other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.ncols() != other.nrows() {
            return Err(self.mismatch("multiply", other));
        }
        let (n, inner, m) = (self.nrows(), self.ncols(), other.ncols());
        let a = self.as_slice();
        let b = other.as_slice();
        let row_product = |i: usize| -> Vec<f64> {
            (0..m)
                .map(|j| (0..inner).map(|k| a[i * inner + k] * b[k * m + j]).sum())
                .collect()
        };
        #[cfg(feature = "rayon")]
        let rows: Vec<Vec<f64>> = {
            use rayon::prelude::*;
            (0..n).into_par_iter().map(row_product).collect()
        };
        #[cfg(not(feature = "rayon"))]
        let rows: Vec<Vec<f64>> = (0..n).map(row_product).collect();
        Matrix::from_shape_vec((n, m), rows.concat())
    }

    /// `self · self`; only defined for square matrices.
    pub fn square(&self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        self.multiply(self)
    }

    /// Element-wise square.
    pub fn square_each(&self) -> Matrix {
        self.map(|x| x * x)
    }

    /// Round every entry to the nearest integer, halves toward positive infinity.
    pub fn round(&self) -> Matrix {
        self.map(round_half_up)
    }

    pub fn abs(&self) -> Matrix {
        self.map(f64::abs)
    }

    pub fn sqrt(&self) -> Matrix {
        self.map(f64::sqrt)
    }

    fn lanes(&self, axis: Axis) -> Vec<Vector> {
        match axis {
            Axis::Row => (0..self.nrows()).map(|r| Vector::from(self.row_slice(r))).collect(),
            Axis::Column => {
                let t = self.transpose();
                (0..t.nrows()).map(|r| Vector::from(t.row_slice(r))).collect()
            }
        }
    }

    fn reduce_along(&self, axis: Axis, f: impl Fn(&Vector) -> Result<f64>) -> Result<Vector> {
        self.lanes(axis).iter().map(f).collect()
    }

    /// Maximum of each row (`Axis::Row`) or each column (`Axis::Column`).
    pub fn max_along(&self, axis: Axis) -> Result<Vector> {
        self.reduce_along(axis, Vector::max)
    }

    pub fn min_along(&self, axis: Axis) -> Result<Vector> {
        self.reduce_along(axis, Vector::min)
    }

    pub fn mean_along(&self, axis: Axis) -> Result<Vector> {
        self.reduce_along(axis, Vector::mean)
    }

    pub fn sum_along(&self, axis: Axis) -> Vector {
        self.lanes(axis).iter().map(Vector::sum).collect()
    }

    /// Per-lane maxima together with the first index of each maximum inside its lane.
    pub fn argmax_along(&self, axis: Axis) -> Result<(Vector, Vec<usize>)> {
        let found = self.lanes(axis).iter().map(Vector::argmax).collect::<Result<Vec<_>>>()?;
        Ok(found.into_iter().map(|(i, v)| (v, i)).unzip())
    }

    pub fn argmin_along(&self, axis: Axis) -> Result<(Vector, Vec<usize>)> {
        let found = self.lanes(axis).iter().map(Vector::argmin).collect::<Result<Vec<_>>>()?;
        Ok(found.into_iter().map(|(i, v)| (v, i)).unzip())
    }

    pub fn max(&self) -> Result<f64> {
        self.max_along(Axis::Row)?.max()
    }

    pub fn min(&self) -> Result<f64> {
        self.min_along(Axis::Row)?.min()
    }

    /// Largest entry and its `(row, col)`; the row is the first whose maximum wins.
    pub fn argmax(&self) -> Result<(f64, (usize, usize))> {
        let (values, cols) = self.argmax_along(Axis::Row)?;
        let (row, value) = values.argmax()?;
        Ok((value, (row, cols[row])))
    }

    pub fn argmin(&self) -> Result<(f64, (usize, usize))> {
        let (values, cols) = self.argmin_along(Axis::Row)?;
        let (row, value) = values.argmin()?;
        Ok((value, (row, cols[row])))
    }

    /// Mean of the row means.
    pub fn mean(&self) -> Result<f64> {
        self.mean_along(Axis::Row)?.mean()
    }

    pub fn sum(&self) -> f64 {
        self.sum_along(Axis::Row).sum()
    }

    /// Normalize each column `c` with `max[c]` mapped to 1 and `min[c]` to 0.
    pub fn normalize_columns_with(&self, max: &[f64], min: &[f64]) -> Result<Matrix> {
        for bound in [max, min] {
            if bound.len() != self.ncols() {
                return Err(LinalgError::LengthMismatch {
                    expected: self.ncols(),
                    found: bound.len(),
                });
            }
        }
        self.map_columns(|c, column| Ok(column.normalize_with(max[c], min[c])))
    }

    /// Normalize each column by its own extremes.
    pub fn normalize_columns(&self) -> Result<Matrix> {
        self.map_columns(|_, column| column.normalize())
    }

    fn map_columns(&self, f: impl Fn(usize, &Vector) -> Result<Vector>) -> Result<Matrix> {
        let mut result = self.clone();
        for (c, column) in self.lanes(Axis::Column).iter().enumerate() {
            result.set_column(c, &f(c, column)?)?;
        }
        Ok(result)
    }

    /// True when every entry differs from `other` by at most `epsilon`.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}
