//! Matrix module: the dense [`Matrix`] type and everything built on it.
//!
//! - [`dense`]: storage, construction and structural operations
//! - [`ops`]: arithmetic and per-axis reductions
//! - [`cofactor`]: determinant and inverse by cofactor expansion
//! - [`stats`]: covariance, correlation and regression over columns

pub mod cofactor;
pub mod dense;
pub mod ops;
pub mod stats;

pub use dense::Matrix;
