//! Dense row-major matrix and its structural operations.
//!
//! This module provides the [`Matrix`] type: a rectangular, row-major store of `f64`
//! with at least one row and one column. Rows and columns are handed out as
//! [`Vector`] copies and accepted back through explicit setters, so nothing
//! returned by an accessor aliases the matrix.

use std::fmt;
use std::ops::Index;

use rand::Rng;

use crate::core::direction::{Axis, Concat, Flip, Rotation};
use crate::core::traits::{MatShape, RowSink};
use crate::error::{LinalgError, Result, check_index};
use crate::random::RandomExt;
use crate::vector::Vector;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Construct from row-major storage.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(LinalgError::LengthMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from `f(row, col)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Result<Self> {
        let mut data = Vec::with_capacity(element_count(rows, cols)?);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self::from_shape_vec((rows, cols), data)
    }

    /// Build from explicit rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != ncols {
                return Err(LinalgError::RaggedRows {
                    row,
                    expected: ncols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Self::from_shape_vec((nrows, ncols), data)
    }

    /// A `1 x n` row (`Axis::Row`) or `n x 1` column (`Axis::Column`).
    pub fn from_vector(values: &Vector, axis: Axis) -> Result<Self> {
        let shape = match axis {
            Axis::Row => (1, values.len()),
            Axis::Column => (values.len(), 1),
        };
        Self::from_shape_vec(shape, values.to_vec())
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 0.0)
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        Self::from_shape_vec((rows, cols), vec![value; element_count(rows, cols)?])
    }

    /// Ones on the main diagonal, zeros elsewhere. Need not be square.
    pub fn identity(rows: usize, cols: usize) -> Result<Self> {
        Self::from_fn(rows, cols, |r, c| if r == c { 1.0 } else { 0.0 })
    }

    /// Uniform `[0, 1)` entries, drawn column by column from top to bottom.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        Self::column_major_draws(rows, cols, || rng.r#gen::<f64>())
    }

    /// Approximately standard-normal entries, drawn in the same order as [`random`](Self::random).
    pub fn random_normal<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        Self::column_major_draws(rows, cols, || rng.next_normal())
    }

    fn column_major_draws(rows: usize, cols: usize, mut draw: impl FnMut() -> f64) -> Result<Self> {
        let mut m = Self::zeros(rows, cols)?;
        for c in 0..cols {
            for r in 0..rows {
                m.data[r * cols + c] = draw();
            }
        }
        Ok(m)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major view of the storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Owned copy of every row.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Same shape as `self` over new storage of identical length.
    pub(super) fn with_data(&self, data: Vec<f64>) -> Matrix {
        debug_assert_eq!(data.len(), self.data.len());
        Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        check_index(row, self.rows)?;
        check_index(col, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_cell(row, col)?;
        Ok(self.data[self.offset(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_cell(row, col)?;
        let at = self.offset(row, col);
        self.data[at] = value;
        Ok(())
    }

    /// Copy of row `row`.
    pub fn row(&self, row: usize) -> Result<Vector> {
        check_index(row, self.rows)?;
        Ok(Vector::from(self.row_slice(row)))
    }

    /// Copy of column `col`.
    pub fn column(&self, col: usize) -> Result<Vector> {
        check_index(col, self.cols)?;
        Ok((0..self.rows).map(|r| self.data[self.offset(r, col)]).collect())
    }

    /// Rows at `indices`, in that order.
    pub fn rows(&self, indices: &[usize]) -> Result<Matrix> {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &row in indices {
            check_index(row, self.rows)?;
            data.extend_from_slice(self.row_slice(row));
        }
        Matrix::from_shape_vec((indices.len(), self.cols), data)
    }

    /// Columns at `indices`, in that order.
    pub fn columns(&self, indices: &[usize]) -> Result<Matrix> {
        for &col in indices {
            check_index(col, self.cols)?;
        }
        Matrix::from_fn(self.rows, indices.len(), |r, c| self.data[self.offset(r, indices[c])])
    }

    /// Overwrite row `row`; `values` must have `ncols` elements.
    pub fn set_row(&mut self, row: usize, values: &Vector) -> Result<()> {
        check_index(row, self.rows)?;
        self.expect_len(values, self.cols)?;
        let start = self.offset(row, 0);
        self.data[start..start + self.cols].copy_from_slice(values.as_slice());
        Ok(())
    }

    /// Overwrite column `col`; `values` must have `nrows` elements.
    pub fn set_column(&mut self, col: usize, values: &Vector) -> Result<()> {
        check_index(col, self.cols)?;
        self.expect_len(values, self.rows)?;
        for (r, &v) in values.iter().enumerate() {
            let at = self.offset(r, col);
            self.data[at] = v;
        }
        Ok(())
    }

    fn expect_len(&self, values: &Vector, expected: usize) -> Result<()> {
        if values.len() != expected {
            return Err(LinalgError::LengthMismatch {
                expected,
                found: values.len(),
            });
        }
        Ok(())
    }

    /// Rectangular block of `row_len x col_len` starting at `(row, col)`.
    pub fn submatrix(&self, row: usize, row_len: usize, col: usize, col_len: usize) -> Result<Matrix> {
        self.check_block(row, row_len, col, col_len)?;
        Matrix::from_fn(row_len, col_len, |r, c| self.data[self.offset(row + r, col + c)])
    }

    /// Arbitrary selection of rows and columns.
    ///
    /// Each index is resolved independently, so repeated or reordered indices
    /// replicate or permute the source.
    pub fn select(&self, rows: &[usize], cols: &[usize]) -> Result<Matrix> {
        self.columns(cols)?.rows(rows)
    }

    /// Write `block` into the region whose top-left corner is `(row, col)`.
    pub fn set_submatrix(&mut self, row: usize, col: usize, block: &Matrix) -> Result<()> {
        self.check_block(row, block.rows, col, block.cols)?;
        for r in 0..block.rows {
            let start = self.offset(row + r, col);
            self.data[start..start + block.cols].copy_from_slice(block.row_slice(r));
        }
        Ok(())
    }

    fn check_block(&self, row: usize, row_len: usize, col: usize, col_len: usize) -> Result<()> {
        if row_len == 0 || col_len == 0 {
            return Err(LinalgError::EmptyShape);
        }
        check_index(row.saturating_add(row_len - 1), self.rows)?;
        check_index(col.saturating_add(col_len - 1), self.cols)
    }

    /// Remove row `row`.
    pub fn drop_row(&self, row: usize) -> Result<Matrix> {
        check_index(row, self.rows)?;
        let keep: Vec<usize> = (0..self.rows).filter(|&r| r != row).collect();
        self.rows(&keep)
    }

    /// Remove column `col`.
    pub fn drop_column(&self, col: usize) -> Result<Matrix> {
        self.transpose().drop_row(col).map(|m| m.transpose())
    }

    /// Remove row or column `index` depending on `axis`.
    pub fn drop(&self, index: usize, axis: Axis) -> Result<Matrix> {
        match axis {
            Axis::Row => self.drop_row(index),
            Axis::Column => self.drop_column(index),
        }
    }

    /// Remove row `row` and column `col` at once, giving the `(R-1) x (C-1)` minor.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        self.check_cell(row, col)?;
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for r in (0..self.rows).filter(|&r| r != row) {
            for c in (0..self.cols).filter(|&c| c != col) {
                data.push(self.data[self.offset(r, c)]);
            }
        }
        Matrix::from_shape_vec((self.rows - 1, self.cols - 1), data)
    }

    /// Join `other` below or to the right of `self`.
    pub fn concat(&self, other: &Matrix, side: Concat) -> Result<Matrix> {
        match side {
            Concat::Bottom => {
                if self.cols != other.cols {
                    return Err(self.mismatch("concat(bottom)", other));
                }
                let mut data = self.data.clone();
                data.extend_from_slice(&other.data);
                Matrix::from_shape_vec((self.rows + other.rows, self.cols), data)
            }
            Concat::Right => {
                if self.rows != other.rows {
                    return Err(self.mismatch("concat(right)", other));
                }
                let mut data = Vec::with_capacity(self.data.len() + other.data.len());
                for r in 0..self.rows {
                    data.extend_from_slice(self.row_slice(r));
                    data.extend_from_slice(other.row_slice(r));
                }
                Matrix::from_shape_vec((self.rows, self.cols + other.cols), data)
            }
        }
    }

    pub(crate) fn mismatch(&self, op: &'static str, other: &Matrix) -> LinalgError {
        LinalgError::ShapeMismatch {
            op,
            left: self.shape(),
            right: other.shape(),
        }
    }

    pub fn transpose(&self) -> Matrix {
        Matrix {
            data: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| (r, c)))
                .map(|(r, c)| self.data[self.offset(r, c)])
                .collect(),
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Clockwise rotation by a quarter-turn multiple.
    pub fn rotate(&self, rotation: Rotation) -> Matrix {
        match rotation {
            Rotation::Deg90 => Matrix {
                data: (0..self.cols)
                    .flat_map(|c| (0..self.rows).map(move |r| (r, c)))
                    .map(|(r, c)| self.data[self.offset(self.rows - 1 - r, c)])
                    .collect(),
                rows: self.cols,
                cols: self.rows,
            },
            Rotation::Deg180 => self.flip(Flip::Vertical).flip(Flip::Horizontal),
            Rotation::Deg270 => self.rotate(Rotation::Deg90).rotate(Rotation::Deg180),
        }
    }

    /// Mirror the matrix, reversing every column (`Vertical`) or every row (`Horizontal`).
    pub fn flip(&self, flip: Flip) -> Matrix {
        let mut result = self.clone();
        match flip {
            Flip::Vertical => {
                for r in 0..self.rows {
                    let src = self.offset(self.rows - 1 - r, 0);
                    let dst = self.offset(r, 0);
                    result.data[dst..dst + self.cols].copy_from_slice(&self.data[src..src + self.cols]);
                }
            }
            Flip::Horizontal => {
                for r in 0..self.rows {
                    let reversed = Vector::from(self.row_slice(r)).reversed();
                    let dst = self.offset(r, 0);
                    result.data[dst..dst + self.cols].copy_from_slice(reversed.as_slice());
                }
            }
        }
        result
    }

    /// Feed every row, top to bottom, to `sink`.
    pub fn write_rows<S: RowSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        for r in 0..self.rows {
            sink.push_row(self.row_slice(r))?;
        }
        sink.finish()
    }
}

// `rows * cols` for a non-empty shape whose storage fits in memory.
fn element_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(LinalgError::EmptyShape);
    }
    rows.checked_mul(cols)
        .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<f64>())
        .ok_or_else(|| LinalgError::InvalidArgument(format!("{rows}x{cols} matrix is too large")))
}

impl MatShape for Matrix {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        &self.data[self.offset(index.0, index.1)]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            writeln!(f, "{}", Vector::from(self.row_slice(r)))?;
        }
        Ok(())
    }
}
