//! Sparse subtraction: the additive merge with the right operand negated

use crate::element::MatrixElement;
use crate::error::Result;
use crate::matrix::SparseMatrix;
use crate::validation::check_same_shape;

/// Subtract two sparse matrices of identical shape
///
/// Coordinates present in `a` contribute `a - b`; coordinates present
/// only in `b` contribute `-b`. Same O(nnz(a) + nnz(b)) merge and same
/// zero-dropping guarantee as [`add`].
///
/// [`add`]: crate::ops::add::add
pub fn subtract<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    check_same_shape(a.dimensions(), b.dimensions())?;

    let mut out = SparseMatrix::new(a.nrows(), a.ncols());
    for (&(row, col), &value) in &a.entries {
        out.set(row, col, value - b.get(row, col))?;
    }
    for (&(row, col), &value) in &b.entries {
        if !a.entries.contains_key(&(row, col)) {
            out.set(row, col, -value)?;
        }
    }
    Ok(out)
}
