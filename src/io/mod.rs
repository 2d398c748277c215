//! File codecs for matrices.

pub mod csv;

pub use self::csv::{CsvRowWriter, read_matrix, read_matrix_from, write_matrix, write_matrix_to};
