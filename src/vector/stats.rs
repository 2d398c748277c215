//! Order statistics, moments and normalization for [`Vector`].

use super::Vector;
use crate::error::{LinalgError, Result};

impl Vector {
    fn non_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(LinalgError::EmptyVector)
        } else {
            Ok(())
        }
    }

    /// Sum of all elements; `0.0` when empty.
    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    pub fn mean(&self) -> Result<f64> {
        self.non_empty()?;
        Ok(self.sum() / self.len() as f64)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.square().sum().sqrt()
    }

    pub fn root_mean_square(&self) -> Result<f64> {
        Ok(self.square().mean()?.sqrt())
    }

    pub fn max(&self) -> Result<f64> {
        Ok(self.argmax()?.1)
    }

    pub fn min(&self) -> Result<f64> {
        Ok(self.argmin()?.1)
    }

    /// `(index, value)` of the maximum. Ties resolve to the lowest index.
    pub fn argmax(&self) -> Result<(usize, f64)> {
        self.extremum(|best, x| best < x)
    }

    /// `(index, value)` of the minimum. Ties resolve to the lowest index.
    pub fn argmin(&self) -> Result<(usize, f64)> {
        self.extremum(|best, x| best > x)
    }

    // Strict comparison keeps the first occurrence; NaN never replaces the seed.
    fn extremum(&self, replaces: impl Fn(f64, f64) -> bool) -> Result<(usize, f64)> {
        self.non_empty()?;
        let mut best = (0, self[0]);
        for (i, &x) in self.iter().enumerate().skip(1) {
            if replaces(best.1, x) {
                best = (i, x);
            }
        }
        Ok(best)
    }

    /// Element at position `ceil(n/2) - 1` of the ascending order.
    ///
    /// For even `n` this is the lower of the two middle values, not their mean.
    pub fn median(&self) -> Result<f64> {
        self.non_empty()?;
        let mut sorted = self.clone();
        sorted.sort();
        Ok(sorted[self.len().div_ceil(2) - 1])
    }

    /// `max - min`.
    pub fn range(&self) -> Result<f64> {
        Ok(self.max()? - self.min()?)
    }

    /// `(max + min) / 2`.
    pub fn mid_range(&self) -> Result<f64> {
        Ok((self.max()? + self.min()?) / 2.0)
    }

    /// Population variance (divides by `n`).
    pub fn variance(&self) -> Result<f64> {
        let mean = self.mean()?;
        self.minus_scalar(mean).square().mean()
    }

    pub fn standard_deviation(&self) -> Result<f64> {
        Ok(self.variance()?.sqrt())
    }

    /// Sample variance (divides by `n - 1`). A single element gives `NaN`.
    pub fn unbiased_variance(&self) -> Result<f64> {
        let mean = self.mean()?;
        Ok(self.minus_scalar(mean).square().sum() / (self.len() as f64 - 1.0))
    }

    /// `(x - mean) / sqrt(unbiased_variance)`.
    pub fn standardize(&self) -> Result<Vector> {
        let mean = self.mean()?;
        let scale = self.unbiased_variance()?.sqrt();
        Ok(self.minus_scalar(mean).division_scalar(scale))
    }

    /// Standard score rescaled to mean 50 and spread 10.
    pub fn deviation_value(&self) -> Result<Vector> {
        Ok(self.standardize()?.multiply_scalar(10.0).plus_scalar(50.0))
    }

    /// Map `min -> 0` and `max -> 1` linearly.
    pub fn normalize_with(&self, max: f64, min: f64) -> Vector {
        let span = max - min;
        self.map(|x| (x - min) / span)
    }

    /// Inverse of [`normalize_with`](Self::normalize_with): map `0 -> min` and `1 -> max`.
    pub fn denormalize_with(&self, max: f64, min: f64) -> Vector {
        let span = max - min;
        self.map(|x| x * span + min)
    }

    /// Replace values above `max` with `max` and values below `min` with `min`.
    ///
    /// `NaN` passes through unchanged.
    pub fn clamp(&self, max: f64, min: f64) -> Vector {
        self.map(|x| {
            if x > max {
                max
            } else if x < min {
                min
            } else {
                x
            }
        })
    }

    /// [`normalize_with`](Self::normalize_with) using this vector's own extremes.
    pub fn normalize(&self) -> Result<Vector> {
        Ok(self.normalize_with(self.max()?, self.min()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn descriptive_statistics() {
        let v = Vector::new(vec![-1.0, 0.0, 1.0, 2.0, 4.0]);
        assert_abs_diff_eq!(v.mean().unwrap(), 1.2, epsilon = 1e-12);
        assert_eq!(v.max().unwrap(), 4.0);
        assert_eq!(v.min().unwrap(), -1.0);
        assert_eq!(v.sum(), 6.0);
        assert_eq!(v.range().unwrap(), 5.0);
        assert_eq!(v.mid_range().unwrap(), 1.5);
        assert_abs_diff_eq!(v.variance().unwrap(), 2.96, epsilon = 1e-12);
        assert_abs_diff_eq!(v.unbiased_variance().unwrap(), 3.7, epsilon = 1e-12);
        assert_abs_diff_eq!(v.root_mean_square().unwrap(), (22.0f64 / 5.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn median_takes_lower_middle_for_even_length() {
        assert_eq!(Vector::new(vec![4.0, 1.0, 3.0, 2.0]).median().unwrap(), 2.0);
        assert_eq!(Vector::new(vec![5.0, 1.0, 3.0]).median().unwrap(), 3.0);
        assert_eq!(Vector::new(vec![7.0]).median().unwrap(), 7.0);
    }

    #[test]
    fn median_leaves_receiver_untouched() {
        let v = Vector::new(vec![3.0, 1.0, 2.0]);
        v.median().unwrap();
        assert_eq!(v.to_vec(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn extremum_ties_resolve_to_first_index() {
        let v = Vector::new(vec![1.0, 5.0, 5.0, -2.0, -2.0]);
        assert_eq!(v.argmax().unwrap(), (1, 5.0));
        assert_eq!(v.argmin().unwrap(), (3, -2.0));
    }

    #[test]
    fn empty_vector_reductions_fail() {
        let v = Vector::zeros(0);
        assert!(matches!(v.mean(), Err(LinalgError::EmptyVector)));
        assert!(matches!(v.max(), Err(LinalgError::EmptyVector)));
        assert!(matches!(v.min(), Err(LinalgError::EmptyVector)));
        assert!(matches!(v.median(), Err(LinalgError::EmptyVector)));
        assert!(matches!(v.normalize(), Err(LinalgError::EmptyVector)));
        assert_eq!(v.sum(), 0.0);
        assert_eq!(v.norm(), 0.0);
    }

    #[test]
    fn standardize_and_deviation_value() {
        let v = Vector::new(vec![2.0, 4.0, 6.0]);
        let z = v.standardize().unwrap();
        assert_abs_diff_eq!(z[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z[2], 1.0, epsilon = 1e-12);
        let d = v.deviation_value().unwrap();
        assert_abs_diff_eq!(d[0], 40.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d[2], 60.0, epsilon = 1e-12);
    }

    #[test]
    fn normalize_maps_extremes_to_unit_interval() {
        let v = Vector::new(vec![3.0, -1.0, 7.0, 1.0]);
        let n = v.normalize().unwrap();
        assert_eq!(n[2], 1.0);
        assert_eq!(n[1], 0.0);
        assert_abs_diff_eq!(n[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn norm_is_euclidean() {
        assert_abs_diff_eq!(Vector::new(vec![3.0, 4.0]).norm(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn denormalize_undoes_normalize() {
        let v = Vector::new(vec![-3.0, 0.0, 7.5, 12.0]);
        let (max, min) = (v.max().unwrap(), v.min().unwrap());
        let back = v.normalize_with(max, min).denormalize_with(max, min);
        for (a, b) in back.iter().zip(v.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn clamp_limits_both_ends() {
        let v = Vector::new(vec![-5.0, 0.5, 9.0, f64::NAN]);
        let c = v.clamp(1.0, 0.0);
        assert_eq!(&c.as_slice()[..3], &[0.0, 0.5, 1.0]);
        assert!(c[3].is_nan());
    }
}
