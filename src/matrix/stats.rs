//! Column statistics and least-squares regression.
//!
//! Columns are treated as variables and rows as observations. All column
//! arguments are indices into the matrix and are range checked.
//!
//! Multiple regression solves the normal equations `b = (XᵗX)⁻¹ XᵗY` with the
//! cofactor inverse, so it inherits that routine's cost and its permissive
//! handling of singular systems: collinear predictors produce non-finite
//! coefficients rather than an error.

use super::Matrix;
use crate::core::direction::{Axis, Concat};
use crate::error::Result;
use crate::vector::Vector;

impl Matrix {
    /// Population covariance of columns `y` and `x`.
    pub fn covariance(&self, y: usize, x: usize) -> Result<f64> {
        let y_data = self.column(y)?;
        let x_data = self.column(x)?;
        let y_centred = y_data.minus_scalar(y_data.mean()?);
        let x_centred = x_data.minus_scalar(x_data.mean()?);
        y_centred.multiply(&x_centred)?.mean()
    }

    /// Pearson correlation of columns `y` and `x`.
    pub fn correlation(&self, y: usize, x: usize) -> Result<f64> {
        let spread = self.column(y)?.standard_deviation()? * self.column(x)?.standard_deviation()?;
        Ok(self.covariance(y, x)? / spread)
    }

    /// Correlation between every pair of columns.
    pub fn correlation_matrix(&self) -> Result<Matrix> {
        let n = self.ncols();
        let row = |r: usize| -> Result<Vec<f64>> { (0..n).map(|c| self.correlation(r, c)).collect() };
        #[cfg(feature = "rayon")]
        let rows: Vec<Vec<f64>> = {
            use rayon::prelude::*;
            (0..n).into_par_iter().map(row).collect::<Result<_>>()?
        };
        #[cfg(not(feature = "rayon"))]
        let rows: Vec<Vec<f64>> = (0..n).map(row).collect::<Result<_>>()?;
        Matrix::from_rows(rows)
    }

    /// Coefficient of determination for a single predictor: `correlation²`.
    pub fn determination(&self, y: usize, x: usize) -> Result<f64> {
        Ok(self.correlation(y, x)?.powi(2))
    }

    /// Fit `y = a + b·x` and return `[b, a]` (slope first).
    pub fn single_regression(&self, y: usize, x: usize) -> Result<Vector> {
        let x_data = self.column(x)?;
        let y_data = self.column(y)?;
        let x_centred = x_data.minus_scalar(x_data.mean()?);
        let y_centred = y_data.minus_scalar(y_data.mean()?);
        let b = x_centred.multiply(&y_centred)?.sum() / x_centred.square().sum();
        let a = y_data.mean()? - b * x_data.mean()?;
        Ok(Vector::new(vec![b, a]))
    }

    /// Least-squares coefficients of `y` on the predictor columns `xs`.
    ///
    /// The result has `xs.len() + 1` entries: the intercept, then one slope per
    /// predictor in the order given.
    pub fn multiple_regression(&self, y: usize, xs: &[usize]) -> Result<Vector> {
        let design = self.design_matrix(xs)?;
        let response = Matrix::from_vector(&self.column(y)?, Axis::Column)?;
        log::trace!("normal equations: {} observations, {} coefficients", design.nrows(), design.ncols());
        let xt = design.transpose();
        let coefficients = xt.multiply(&design)?.inverse()?.multiply(&xt)?.multiply(&response)?;
        coefficients.column(0)
    }

    /// `[1 | x_0 | x_1 | ...]`.
    fn design_matrix(&self, xs: &[usize]) -> Result<Matrix> {
        let ones = Matrix::filled(self.nrows(), 1, 1.0)?;
        if xs.is_empty() {
            return Ok(ones);
        }
        ones.concat(&self.columns(xs)?, Concat::Right)
    }

    /// Fitted values of the multiple regression of `y` on `xs`, one per row.
    pub fn regression(&self, y: usize, xs: &[usize]) -> Result<Vector> {
        let b = self.multiple_regression(y, xs)?;
        let predictors = if xs.is_empty() { None } else { Some(self.columns(xs)?) };
        (0..self.nrows())
            .map(|r| -> Result<f64> {
                let mut fitted = b[0];
                if let Some(p) = &predictors {
                    for (t, value) in p.row(r)?.iter().enumerate() {
                        fitted += b[t + 1] * value;
                    }
                }
                Ok(fitted)
            })
            .collect()
    }

    /// `1 - SSres / SStot` of the multiple regression of `y` on `xs`.
    pub fn multiple_determination(&self, y: usize, xs: &[usize]) -> Result<f64> {
        let fitted = self.regression(y, xs)?;
        let y_data = self.column(y)?;
        let ss_res = fitted.minus(&y_data)?.square().sum();
        let ss_tot = y_data.minus_scalar(y_data.mean()?).square().sum();
        Ok(1.0 - ss_res / ss_tot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn table() -> Matrix {
        // columns: y, x1, x2
        Matrix::from_rows(vec![
            vec![2.0, 1.0, 0.5],
            vec![4.0, 2.0, 1.0],
            vec![6.0, 3.0, 2.5],
        ])
        .unwrap()
    }

    #[test]
    fn single_regression_on_exact_line() {
        let b = table().single_regression(0, 1).unwrap();
        assert_abs_diff_eq!(b[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn perfect_correlation() {
        let t = table();
        assert_abs_diff_eq!(t.correlation(0, 1).unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.determination(0, 1).unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.covariance(0, 1).unwrap(), 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn column_indices_are_checked() {
        let t = table();
        assert!(t.covariance(0, 3).is_err());
        assert!(t.multiple_regression(5, &[1]).is_err());
        assert!(t.regression(0, &[1, 9]).is_err());
    }

    #[test]
    fn intercept_only_model_fits_the_mean() {
        let t = table();
        let b = t.multiple_regression(0, &[]).unwrap();
        assert_eq!(b.len(), 1);
        assert_abs_diff_eq!(b[0], 4.0, epsilon = 1e-12);
        let fitted = t.regression(0, &[]).unwrap();
        assert!(fitted.iter().all(|v| (v - 4.0).abs() < 1e-12));
    }
}
