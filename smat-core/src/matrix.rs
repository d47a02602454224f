//! Map-backed sparse matrix storage
//!
//! Stores only the non-zero entries in a hash map keyed by a composite
//! `(row, col)` coordinate. Absent coordinates are implicitly zero, so
//! memory scales with the non-zero count rather than the dense extent.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::element::MatrixElement;
use crate::error::Result;
use crate::validation::check_bounds;

/// Sparse matrix storing only non-zero entries
///
/// Dimensions are fixed at construction and never change. All mutation
/// goes through [`SparseMatrix::set`], which maintains two invariants:
/// no stored value equals the additive identity (writing zero removes
/// the entry), and every stored coordinate lies within the declared
/// extent.
///
/// Equality compares dimensions and the non-zero entry set; entry
/// iteration order never matters.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T: MatrixElement> {
    nrows: usize,
    ncols: usize,
    pub(crate) entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty matrix with the given extent
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: HashMap::new(),
        }
    }

    /// Create the n-by-n identity matrix
    pub fn identity(n: usize) -> Self {
        let mut entries = HashMap::with_capacity(n);
        for i in 0..n {
            entries.insert((i, i), T::ONE);
        }
        Self {
            nrows: n,
            ncols: n,
            entries,
        }
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Triples are applied in order through [`SparseMatrix::set`], so a
    /// coordinate appearing twice keeps the later value and a zero
    /// value erases any earlier entry for that coordinate. Fails with
    /// [`MatrixError::IndexOutOfBounds`] on the first triple outside
    /// the declared extent.
    ///
    /// [`MatrixError::IndexOutOfBounds`]: crate::MatrixError::IndexOutOfBounds
    pub fn from_triples<I>(nrows: usize, ncols: usize, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(nrows, ncols);
        for (row, col, value) in triples {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows in the declared extent
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns in the declared extent
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of non-zero entries stored
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix stores no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the value at a coordinate, zero if absent
    ///
    /// Never fails: coordinates outside the declared extent also read
    /// as zero, matching the implicit-zero contract of the sparse
    /// representation.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or(T::ZERO)
    }

    /// Set the value at a coordinate
    ///
    /// A non-zero value stores or overwrites the entry; a zero value
    /// removes any existing entry, keeping zero represented by absence.
    /// Idempotent. Fails if the coordinate lies outside the declared
    /// extent.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_bounds(row, col, self.nrows, self.ncols)?;
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Iterate over all non-zero entries as `(row, col, value)`
    ///
    /// The order is unspecified; consumers must treat the output as a
    /// set. Use [`SparseMatrix::row_entries`] when a sorted view of one
    /// row is needed.
    pub fn triples(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Non-zero entries of one row as `(col, value)`, in column order
    pub fn row_entries(&self, row: usize) -> Vec<(usize, T)> {
        let mut entries: Vec<(usize, T)> = self
            .entries
            .iter()
            .filter(|&(&(r, _), _)| r == row)
            .map(|(&(_, col), &value)| (col, value))
            .collect();
        entries.sort_unstable_by_key(|&(col, _)| col);
        entries
    }

    /// Non-zero entries of one column as `(row, value)`, in row order
    pub fn col_entries(&self, col: usize) -> Vec<(usize, T)> {
        let mut entries: Vec<(usize, T)> = self
            .entries
            .iter()
            .filter(|&(&(_, c), _)| c == col)
            .map(|(&(row, _), &value)| (row, value))
            .collect();
        entries.sort_unstable_by_key(|&(row, _)| row);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use alloc::vec;

    #[test]
    fn test_get_absent_is_zero() {
        let matrix: SparseMatrix<f64> = SparseMatrix::new(3, 3);
        assert_eq!(matrix.get(0, 0), 0.0);
        assert_eq!(matrix.get(2, 2), 0.0);
        // Out-of-range reads are zero too, by contract.
        assert_eq!(matrix.get(100, 100), 0.0);
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut matrix = SparseMatrix::new(3, 3);
        matrix.set(1, 2, 4.5).unwrap();
        assert_eq!(matrix.get(1, 2), 4.5);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut matrix = SparseMatrix::new(2, 2);
        matrix.set(0, 1, 7.0).unwrap();
        matrix.set(0, 1, 0.0).unwrap();
        assert_eq!(matrix.get(0, 1), 0.0);
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.triples().next().is_none());
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut matrix = SparseMatrix::new(2, 2);
        matrix.set(1, 1, 3.0).unwrap();
        matrix.set(1, 1, 3.0).unwrap();
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get(1, 1), 3.0);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut matrix = SparseMatrix::new(2, 2);
        assert_eq!(
            matrix.set(2, 0, 1.0),
            Err(MatrixError::IndexOutOfBounds {
                row: 2,
                col: 0,
                nrows: 2,
                ncols: 2,
            })
        );
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_from_triples_last_write_wins() {
        let matrix =
            SparseMatrix::from_triples(2, 2, vec![(0, 0, 1.0), (0, 0, 9.0)]).unwrap();
        assert_eq!(matrix.get(0, 0), 9.0);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_from_triples_zero_erases() {
        let matrix =
            SparseMatrix::from_triples(2, 2, vec![(1, 1, 5.0), (1, 1, 0.0)]).unwrap();
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_from_triples_rejects_out_of_range() {
        let result: Result<SparseMatrix<f64>> =
            SparseMatrix::from_triples(2, 2, vec![(0, 0, 1.0), (5, 5, 2.0)]);
        assert!(matches!(
            result,
            Err(MatrixError::IndexOutOfBounds { row: 5, col: 5, .. })
        ));
    }

    #[test]
    fn test_identity() {
        let matrix: SparseMatrix<i64> = SparseMatrix::identity(3);
        assert_eq!(matrix.dimensions(), (3, 3));
        assert_eq!(matrix.nnz(), 3);
        assert_eq!(matrix.get(0, 0), 1);
        assert_eq!(matrix.get(2, 2), 1);
        assert_eq!(matrix.get(0, 1), 0);
    }

    #[test]
    fn test_row_and_col_entries_sorted() {
        let matrix =
            SparseMatrix::from_triples(3, 3, vec![(1, 2, 3.0), (1, 0, 1.0), (0, 2, 9.0)])
                .unwrap();
        assert_eq!(matrix.row_entries(1), vec![(0, 1.0), (2, 3.0)]);
        assert_eq!(matrix.col_entries(2), vec![(0, 9.0), (1, 3.0)]);
        assert!(matrix.row_entries(2).is_empty());
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = SparseMatrix::from_triples(2, 2, vec![(0, 0, 1.0), (1, 1, 2.0)]).unwrap();
        let b = SparseMatrix::from_triples(2, 2, vec![(1, 1, 2.0), (0, 0, 1.0)]).unwrap();
        assert_eq!(a, b);
    }
}
