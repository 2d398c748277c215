//! One-dimensional `f64` container.
//!
//! A [`Vector`] owns its storage; every transformation returns a fresh vector and
//! only the explicit setters (`set`, `set_slice`, `sort*`) mutate the receiver.
//! Copies are deep, so a row or column pulled out of a [`Matrix`](crate::Matrix)
//! never aliases the matrix.

use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use rand::Rng;

use crate::core::traits::RowSink;
use crate::error::{LinalgError, Result, check_index};
use crate::random::RandomExt;

pub mod ops;
pub mod sort;
pub mod stats;

// Largest element count whose byte size fits in `isize`.
const MAX_LEN: usize = isize::MAX as usize / std::mem::size_of::<f64>();

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self::from_elem(len, 0.0)
    }

    /// Vector of `len` copies of `value`.
    pub fn from_elem(len: usize, value: f64) -> Self {
        Self {
            data: vec![value; len],
        }
    }

    /// Arithmetic progression `start, start + step, ...` running toward `end`.
    ///
    /// The length is `floor((end - start) / step) + 1`, so `end` is included
    /// whenever it lies on the grid. `step` must point from `start` toward
    /// `end` (any sign is fine when they are equal).
    pub fn arange(start: f64, step: f64, end: f64) -> Result<Self> {
        let invalid = |why: &str| {
            LinalgError::InvalidArgument(format!("arange({start}, {step}, {end}): {why}"))
        };
        if step == 0.0 || !step.is_finite() || !start.is_finite() || !end.is_finite() {
            return Err(invalid("bounds must be finite and step finite and non-zero"));
        }
        let span = end - start;
        if span != 0.0 && step.signum() != span.signum() {
            return Err(invalid("step points away from end"));
        }
        let steps = (span / step).floor();
        if !steps.is_finite() || steps >= MAX_LEN as f64 {
            return Err(invalid("too many elements"));
        }
        let len = (steps as usize)
            .checked_add(1)
            .ok_or_else(|| invalid("too many elements"))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| invalid("cannot allocate the progression"))?;
        data.extend((0..len).map(|i| start + step * i as f64));
        Ok(Vector::new(data))
    }

    /// `len` uniform draws in `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        (0..len).map(|_| rng.r#gen::<f64>()).collect()
    }

    /// `len` approximately standard-normal draws.
    pub fn random_normal<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        (0..len).map(|_| rng.next_normal()).collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        check_index(index, self.len())?;
        Ok(self.data[index])
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        check_index(index, self.len())?;
        self.data[index] = value;
        Ok(())
    }

    /// Copy of `len` elements starting at `offset`.
    pub fn slice(&self, offset: usize, len: usize) -> Result<Vector> {
        let end = self.range_end(offset, len)?;
        Ok(Vector::new(self.data[offset..end].to_vec()))
    }

    /// Elements at `indices`, in that order. Duplicates are allowed.
    pub fn select(&self, indices: &[usize]) -> Result<Vector> {
        indices.iter().map(|&i| self.get(i)).collect()
    }

    /// Overwrite the elements starting at `offset` with `values`.
    pub fn set_slice(&mut self, offset: usize, values: &Vector) -> Result<()> {
        let end = self.range_end(offset, values.len())?;
        self.data[offset..end].copy_from_slice(values.as_slice());
        Ok(())
    }

    /// `self` followed by `tail`.
    pub fn concat(&self, tail: &Vector) -> Vector {
        let mut data = Vec::with_capacity(self.len() + tail.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&tail.data);
        Vector::new(data)
    }

    /// Copy with `len` elements removed starting at `offset`.
    pub fn delete(&self, offset: usize, len: usize) -> Result<Vector> {
        let end = self.range_end(offset, len)?;
        let mut data = Vec::with_capacity(self.len() - len);
        data.extend_from_slice(&self.data[..offset]);
        data.extend_from_slice(&self.data[end..]);
        Ok(Vector::new(data))
    }

    /// Elements in reverse order.
    pub fn reversed(&self) -> Vector {
        self.data.iter().rev().copied().collect()
    }

    /// Randomly permuted copy.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
        let mut data = self.data.clone();
        rng.shuffle_f64(&mut data);
        Vector::new(data)
    }

    /// Feed the vector to `sink` as a single column, one value per row.
    pub fn write_rows<S: RowSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        for value in &self.data {
            sink.push_row(std::slice::from_ref(value))?;
        }
        sink.finish()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    fn range_end(&self, offset: usize, len: usize) -> Result<usize> {
        let end = offset.saturating_add(len);
        if end > self.len() {
            return Err(LinalgError::IndexOutOfBounds {
                index: end.saturating_sub(1),
                len: self.len(),
            });
        }
        Ok(end)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::new(value)
    }
}

impl From<&[f64]> for Vector {
    fn from(value: &[f64]) -> Self {
        Vector::new(value.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect())
    }
}

impl Extend<f64> for Vector {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
