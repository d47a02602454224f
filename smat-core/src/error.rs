//! Error types for sparse matrix operations

/// Errors that can occur when building or combining sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation
    ///
    /// `expected` is the left operand's shape, `actual` the right's.
    /// Raised before any computation begins; no partial result is ever
    /// produced.
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Coordinate lies outside the declared matrix extent
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::DimensionMismatch { expected, actual } => write!(
                f,
                "matrix dimensions do not match: {}x{} vs {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            MatrixError::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "index ({row}, {col}) out of bounds for {nrows}x{ncols} matrix"
            ),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_dimension_mismatch() {
        let err = MatrixError::DimensionMismatch {
            expected: (2, 3),
            actual: (3, 2),
        };
        assert_eq!(
            err.to_string(),
            "matrix dimensions do not match: 2x3 vs 3x2"
        );
    }

    #[test]
    fn test_display_out_of_bounds() {
        let err = MatrixError::IndexOutOfBounds {
            row: 5,
            col: 0,
            nrows: 2,
            ncols: 2,
        };
        assert_eq!(err.to_string(), "index (5, 0) out of bounds for 2x2 matrix");
    }
}
