//! Delimited-text import and export.
//!
//! Reading is lenient: records may have different lengths and cells may hold
//! anything. The matrix is as wide as the widest record (after `skip_columns`);
//! missing and unparseable cells become `NaN`. Writing emits one record per
//! matrix row using Rust's shortest round-trip float formatting.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::config::options::CsvOptions;
use crate::core::traits::RowSink;
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

/// Read a matrix from the file at `path`.
pub fn read_matrix<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<Matrix> {
    let file = File::open(path.as_ref())?;
    read_matrix_from(file, options)
}

/// Read a matrix from any byte source.
pub fn read_matrix_from<R: Read>(source: R, options: &CsvOptions) -> Result<Matrix> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut unparsed = 0usize;
    for record in reader.records().skip(options.skip_rows) {
        let record = record?;
        let row: Vec<f64> = record
            .iter()
            .skip(options.skip_columns)
            .map(|cell| {
                cell.parse::<f64>().unwrap_or_else(|_| {
                    unparsed += 1;
                    f64::NAN
                })
            })
            .collect();
        rows.push(row);
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if rows.is_empty() || width == 0 {
        return Err(LinalgError::EmptyShape);
    }
    let mut padded = 0usize;
    for row in &mut rows {
        padded += width - row.len();
        row.resize(width, f64::NAN);
    }
    if unparsed + padded > 0 {
        log::debug!(
            "csv read {}x{}: {unparsed} unparseable and {padded} missing cells set to NaN",
            rows.len(),
            width
        );
    }
    Matrix::from_rows(rows)
}

/// Write `matrix` to a new file at `path`, replacing any existing file.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &Matrix, options: &CsvOptions) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_matrix_to(BufWriter::new(file), matrix, options)
}

/// Write `matrix` to any byte sink.
pub fn write_matrix_to<W: Write>(sink: W, matrix: &Matrix, options: &CsvOptions) -> Result<()> {
    let mut writer = CsvRowWriter::new(sink, options)?;
    matrix.write_rows(&mut writer)
}

/// [`RowSink`] that formats each row as one delimited record.
pub struct CsvRowWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvRowWriter<W> {
    /// Wrap `sink`, writing the header from `options` immediately.
    pub fn new(sink: W, options: &CsvOptions) -> Result<Self> {
        let mut writer = WriterBuilder::new()
            .delimiter(options.delimiter)
            .flexible(true)
            .from_writer(sink);
        if let Some(header) = &options.header {
            writer.write_record(header)?;
        }
        Ok(Self { writer })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| LinalgError::Io(e.into_error()))
    }
}

impl<W: Write> RowSink for CsvRowWriter<W> {
    fn push_row(&mut self, row: &[f64]) -> Result<()> {
        self.writer.write_record(row.iter().map(|v| v.to_string()))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
