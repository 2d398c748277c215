//! Core traits for cofactor.

use crate::error::Result;

/// Row/column counts of a rectangular container.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// Consumer of row-major floating-point data, e.g. a file codec.
pub trait RowSink {
    /// Accept one row.
    fn push_row(&mut self, row: &[f64]) -> Result<()>;
    /// Flush buffered rows. The default does nothing.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In-memory sink collecting rows as owned vectors.
impl RowSink for Vec<Vec<f64>> {
    fn push_row(&mut self, row: &[f64]) -> Result<()> {
        self.push(row.to_vec());
        Ok(())
    }
}
