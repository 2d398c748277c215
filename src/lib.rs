//! cofactor: small dense vectors and matrices with cofactor-expansion algebra
//!
//! This crate provides owned `f64` vectors and row-major matrices with
//! element-wise arithmetic, descriptive statistics, index-tracking sorts,
//! structural edits, Laplace-expansion determinants and adjugate inverses,
//! and least-squares regression. Seedable pseudo-random generators and a
//! delimited-text codec round it out.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod matrix;
pub mod random;
pub mod vector;

// Re-exports for convenience
pub use crate::config::CsvOptions;
pub use crate::core::*;
pub use crate::error::{LinalgError, Result};
pub use crate::matrix::Matrix;
pub use crate::random::{Generator, GeneratorKind, RandomExt};
pub use crate::vector::Vector;
