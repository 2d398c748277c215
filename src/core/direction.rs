//! Direction selectors for reductions, sorts and structural edits.

use crate::error::LinalgError;

/// Which way a reduction or a drop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// One result per row.
    Row,
    /// One result per column.
    Column,
}

/// Sort direction for [`Vector::sort_by_order`](crate::Vector::sort_by_order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Side on which [`Matrix::concat`](crate::Matrix::concat) attaches its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concat {
    /// Stack below; column counts must agree.
    Bottom,
    /// Append on the right; row counts must agree.
    Right,
}

/// Mirror axis for [`Matrix::flip`](crate::Matrix::flip).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    /// Upside down: every column is reversed.
    Vertical,
    /// Left to right: every row is reversed.
    Horizontal,
}

/// Clockwise quarter turns for [`Matrix::rotate`](crate::Matrix::rotate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Deg90,
    Deg180,
    Deg270,
}

impl TryFrom<u32> for Rotation {
    type Error = LinalgError;

    fn try_from(angle: u32) -> Result<Self, Self::Error> {
        match angle {
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(LinalgError::InvalidArgument(format!(
                "rotation angle must be 90, 180 or 270, got {other}"
            ))),
        }
    }
}
