//! Shape and bounds validation for sparse matrix operations
//!
//! Pure mathematical checks with no I/O dependencies. The arithmetic
//! kernels call these before touching any entries, so a shape error
//! never leaves a partial result behind.

use crate::error::{MatrixError, Result};

/// Validate that a coordinate lies within a declared extent
pub const fn check_bounds(row: usize, col: usize, nrows: usize, ncols: usize) -> Result<()> {
    if row >= nrows || col >= ncols {
        return Err(MatrixError::IndexOutOfBounds {
            row,
            col,
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Validate that two shapes are identical
///
/// Elementwise operations (addition, subtraction) require operands of
/// the same shape.
pub const fn check_same_shape(expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected.0 != actual.0 || expected.1 != actual.1 {
        return Err(MatrixError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Validate that inner dimensions agree for multiplication
///
/// `left` is the left operand's shape, `right` the right's. The error
/// reports both full shapes, not just the inner pair.
pub const fn check_inner_dim(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left.1 != right.0 {
        return Err(MatrixError::DimensionMismatch {
            expected: left,
            actual: right,
        });
    }
    Ok(())
}
