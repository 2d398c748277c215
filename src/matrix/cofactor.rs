//! Determinant and inverse by recursive cofactor (Laplace) expansion.
//!
//! The determinant expands along column 0:
//!
//! ```text
//! det(A) = Σ_i (-1)^i · a[i][0] · det(minor(i, 0))
//! ```
//!
//! with closed forms for 1×1 and 2×2. The inverse is the adjugate (transposed
//! cofactor matrix) scaled by `1 / det(A)`. Both are O(n!) in the dimension;
//! they are meant for the small systems that regression and image comparison
//! produce, not for large dense solves.
//!
//! # Degenerate input
//! - [`Matrix::determinant`] returns `NaN` for non-square input.
//! - [`Matrix::inverse`] of a singular matrix divides by zero and yields
//!   `±inf`/`NaN` entries, following IEEE-754. Use
//!   [`Matrix::checked_inverse`] to get [`LinalgError::Singular`] instead.

use super::Matrix;
use crate::error::{LinalgError, Result};

/// Dimension above which a warning is logged before expanding.
const LARGE_EXPANSION: usize = 10;

impl Matrix {
    fn require_square(&self) -> Result<usize> {
        if self.is_square() {
            Ok(self.nrows())
        } else {
            Err(LinalgError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            })
        }
    }

    /// Determinant by cofactor expansion; `NaN` when the matrix is not square.
    pub fn determinant(&self) -> f64 {
        match self.require_square() {
            Ok(n) => {
                if n > LARGE_EXPANSION {
                    log::warn!("cofactor expansion of a {n}x{n} matrix needs O(n!) work");
                }
                expand(self)
            }
            Err(_) => f64::NAN,
        }
    }

    /// Determinant, reporting non-square input as an error.
    pub fn checked_determinant(&self) -> Result<f64> {
        self.require_square()?;
        Ok(self.determinant())
    }

    /// Cofactor matrix `C[i][j] = (-1)^(i+j) · det(minor(i, j))`.
    pub fn cofactors(&self) -> Result<Matrix> {
        let n = self.require_square()?;
        if n == 1 {
            // The minor of a 1x1 matrix is empty and its determinant is 1.
            return Matrix::filled(1, 1, 1.0);
        }
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                data.push(sign * expand(&self.minor(i, j)?));
            }
        }
        Matrix::from_shape_vec((n, n), data)
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix> {
        Ok(self.cofactors()?.transpose())
    }

    /// `adj(A) / det(A)`.
    ///
    /// A singular matrix is not rejected: the division by a zero determinant
    /// propagates as non-finite entries.
    pub fn inverse(&self) -> Result<Matrix> {
        let adjugate = self.adjugate()?;
        let det = self.determinant();
        if det == 0.0 {
            log::warn!("inverting a singular {}x{} matrix; result is not finite", self.nrows(), self.ncols());
        }
        Ok(adjugate.multiply_scalar(1.0 / det))
    }

    /// Inverse that fails with [`LinalgError::Singular`] when the determinant
    /// is zero or not finite, before any division takes place.
    pub fn checked_inverse(&self) -> Result<Matrix> {
        let det = self.checked_determinant()?;
        if det == 0.0 || !det.is_finite() {
            return Err(LinalgError::Singular(det));
        }
        Ok(self.adjugate()?.multiply_scalar(1.0 / det))
    }
}

// Callers guarantee a square matrix.
fn expand(a: &Matrix) -> f64 {
    match a.nrows() {
        1 => a[(0, 0)],
        2 => a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
        n => {
            let mut det = 0.0;
            for i in 0..n {
                let Ok(minor) = a.minor(i, 0) else {
                    return f64::NAN;
                };
                let term = a[(i, 0)] * expand(&minor);
                if i % 2 == 0 {
                    det += term;
                } else {
                    det -= term;
                }
            }
            det
        }
    }
}
