//! Sparse addition: a merge over the union of non-zero coordinate sets

use crate::element::MatrixElement;
use crate::error::Result;
use crate::matrix::SparseMatrix;
use crate::validation::check_same_shape;

/// Add two sparse matrices of identical shape
///
/// Every coordinate present in `a` contributes `a + b` at that
/// coordinate; coordinates present only in `b` carry over unchanged.
/// Runs in O(nnz(a) + nnz(b)) map accesses and never iterates the dense
/// index space. Sums that cancel to zero are dropped on write, so the
/// result stores no explicit zeros.
pub fn add<T: MatrixElement>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    check_same_shape(a.dimensions(), b.dimensions())?;

    let mut out = SparseMatrix::new(a.nrows(), a.ncols());
    for (&(row, col), &value) in &a.entries {
        out.set(row, col, value + b.get(row, col))?;
    }
    for (&(row, col), &value) in &b.entries {
        if !a.entries.contains_key(&(row, col)) {
            out.set(row, col, value)?;
        }
    }
    Ok(out)
}
