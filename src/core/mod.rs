//! Core traits and direction selectors shared by [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix).

pub mod direction;
pub mod traits;

pub use direction::{Axis, Concat, Flip, Rotation, SortOrder};
pub use traits::{MatShape, RowSink};
