//! Element-wise arithmetic on [`Vector`].
//!
//! Vector–vector operations require equal lengths and report
//! [`LinalgError::LengthMismatch`] otherwise. Scalar variants never fail.
//! Division follows IEEE-754: dividing by zero yields `±inf` or `NaN`.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Vector;
use crate::error::{LinalgError, Result};

impl Vector {
    fn zip_with(&self, other: &Vector, f: impl Fn(f64, f64) -> f64) -> Result<Vector> {
        if self.len() != other.len() {
            return Err(LinalgError::LengthMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(self.iter().zip(other.iter()).map(|(&a, &b)| f(a, b)).collect())
    }

    /// Apply `f` to every element.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Vector {
        self.iter().map(|&x| f(x)).collect()
    }

    pub fn plus(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn plus_scalar(&self, c: f64) -> Vector {
        self.map(|x| x + c)
    }

    pub fn minus(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn minus_scalar(&self, c: f64) -> Vector {
        self.map(|x| x - c)
    }

    /// Element-wise product.
    pub fn multiply(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a * b)
    }

    pub fn multiply_scalar(&self, c: f64) -> Vector {
        self.map(|x| x * c)
    }

    /// Element-wise quotient.
    pub fn division(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a / b)
    }

    pub fn division_scalar(&self, c: f64) -> Vector {
        self.map(|x| x / c)
    }

    /// Sum of the element-wise product.
    pub fn inner_product(&self, other: &Vector) -> Result<f64> {
        Ok(self.multiply(other)?.sum())
    }

    /// Round to the nearest integer, halves toward positive infinity.
    pub fn round(&self) -> Vector {
        self.map(round_half_up)
    }

    pub fn abs(&self) -> Vector {
        self.map(f64::abs)
    }

    pub fn sqrt(&self) -> Vector {
        self.map(f64::sqrt)
    }

    /// Element-wise square.
    pub fn square(&self) -> Vector {
        self.map(|x| x * x)
    }
}

/// `floor(x + 0.5)` without the rounding error of the addition: `-2.5 -> -2`, `2.5 -> 3`.
pub(crate) fn round_half_up(x: f64) -> f64 {
    let down = x.floor();
    if x - down >= 0.5 { down + 1.0 } else { down }
}

impl Add<f64> for &Vector {
    type Output = Vector;

    fn add(self, rhs: f64) -> Vector {
        self.plus_scalar(rhs)
    }
}

impl Sub<f64> for &Vector {
    type Output = Vector;

    fn sub(self, rhs: f64) -> Vector {
        self.minus_scalar(rhs)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.multiply_scalar(rhs)
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        self.division_scalar(rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map(|x| -x)
    }
}
