//! Index-tracking quicksort.
//!
//! Sorting rearranges the receiver in place and returns the permutation `p`
//! with `original[p[i]] == sorted[i]`. The partition is Hoare's scheme with the
//! middle element of each subrange as pivot; the value and its original index
//! are always swapped together.

use super::Vector;
use crate::core::direction::SortOrder;

impl Vector {
    /// Sort ascending in place and return the permutation.
    pub fn sort(&mut self) -> Vec<usize> {
        self.sort_by_order(SortOrder::Ascending)
    }

    /// Sort in place in the given direction and return the permutation.
    pub fn sort_by_order(&mut self, order: SortOrder) -> Vec<usize> {
        let mut index: Vec<usize> = (0..self.len()).collect();
        if self.len() > 1 {
            let high = self.len() - 1;
            let values = self.as_mut_slice();
            match order {
                SortOrder::Ascending => quicksort(values, &mut index, 0, high, &|a: f64, b: f64| a < b),
                SortOrder::Descending => quicksort(values, &mut index, 0, high, &|a: f64, b: f64| a > b),
            }
        }
        index
    }

    /// Sorted copy together with the permutation; the receiver is untouched.
    pub fn sorted(&self, order: SortOrder) -> (Vector, Vec<usize>) {
        let mut copy = self.clone();
        let index = copy.sort_by_order(order);
        (copy, index)
    }
}

/// `before(a, b)` is true when `a` belongs strictly in front of `b`.
fn quicksort<F>(buf: &mut [f64], idx: &mut [usize], low: usize, high: usize, before: &F)
where
    F: Fn(f64, f64) -> bool,
{
    let pivot = buf[(low + high) / 2];
    let (mut i, mut j) = (low, high);
    loop {
        while before(buf[i], pivot) {
            i += 1;
        }
        while before(pivot, buf[j]) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        buf.swap(i, j);
        idx.swap(i, j);
        i += 1;
        j -= 1;
    }
    if i - low > 1 {
        quicksort(buf, idx, low, i - 1, before);
    }
    if high - j > 1 {
        quicksort(buf, idx, j + 1, high, before);
    }
}
