//! Sparse multiplication kernels
//!
//! Two kernels with identical observable results: the column-probing
//! reference, and a row-indexed variant that skips probes of implicit
//! zeros.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::element::MatrixElement;
use crate::error::Result;
use crate::matrix::SparseMatrix;
use crate::validation::check_inner_dim;

/// Multiply two sparse matrices (column-probing kernel)
///
/// Requires `a.ncols() == b.nrows()`; the result has shape
/// `(a.nrows(), b.ncols())`. For every non-zero `(row, col, value)` of
/// `a`, probes every column `k` of `b` at `(col, k)` and accumulates
/// `value * b[col, k]` into the result at `(row, k)`.
///
/// The probe loop visits `ncols(b)` coordinates per non-zero of `a`,
/// so the cost is O(nnz(a) * ncols(b)) map lookups, which dominates
/// everything else in this crate. [`multiply_indexed`] trades one pass
/// over `b` for skipping the zero probes.
///
/// Empty operands, or `b.ncols() == 0`, produce a correctly-dimensioned
/// empty result.
pub fn multiply<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    check_inner_dim(a.dimensions(), b.dimensions())?;

    let mut out = SparseMatrix::new(a.nrows(), b.ncols());
    for (&(row, col), &value) in &a.entries {
        for k in 0..b.ncols() {
            let product = value * b.get(col, k);
            if !product.is_zero() {
                out.set(row, k, out.get(row, k) + product)?;
            }
        }
    }
    Ok(out)
}

/// Multiply via a row index over the right operand
///
/// Groups `b`'s non-zero entries by row once, then accumulates only
/// over pairs whose product can be non-zero. Observable results match
/// [`multiply`]; only the probe pattern differs. With floating-point
/// elements the accumulation order may differ between the two kernels,
/// which matters only for sums that are sensitive to rounding.
pub fn multiply_indexed<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    check_inner_dim(a.dimensions(), b.dimensions())?;

    let mut rows_of_b: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for (&(row, col), &value) in &b.entries {
        rows_of_b.entry(row).or_default().push((col, value));
    }

    let mut out = SparseMatrix::new(a.nrows(), b.ncols());
    for (&(row, col), &value) in &a.entries {
        let Some(b_row) = rows_of_b.get(&col) else {
            continue;
        };
        for &(k, b_value) in b_row {
            let product = value * b_value;
            if !product.is_zero() {
                out.set(row, k, out.get(row, k) + product)?;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use alloc::vec;

    fn fixture() -> (SparseMatrix<f64>, SparseMatrix<f64>) {
        // A = [[3, 0], [0, 5]], B = [[1, 2], [0, 0]].
        let a = SparseMatrix::from_triples(2, 2, vec![(0, 0, 3.0), (1, 1, 5.0)]).unwrap();
        let b = SparseMatrix::from_triples(2, 2, vec![(0, 0, 1.0), (0, 1, 2.0)]).unwrap();
        (a, b)
    }

    #[test]
    fn test_multiply_fixture() {
        let (a, b) = fixture();
        let c = multiply(&a, &b).unwrap();

        // Row 1 of A meets only the empty row 1 of B, so the result has
        // entries in row 0 only.
        let expected =
            SparseMatrix::from_triples(2, 2, vec![(0, 0, 3.0), (0, 1, 6.0)]).unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn test_multiply_by_identity() {
        let m = SparseMatrix::from_triples(3, 3, vec![(0, 2, 4.0), (1, 0, -2.0), (2, 2, 7.5)])
            .unwrap();
        let id = SparseMatrix::identity(3);
        assert_eq!(multiply(&m, &id).unwrap(), m);
        assert_eq!(multiply(&id, &m).unwrap(), m);
    }

    #[test]
    fn test_multiply_rectangular_shapes() {
        // (2x3) * (3x2) -> (2x2)
        let a = SparseMatrix::from_triples(2, 3, vec![(0, 0, 1.0), (0, 2, 2.0), (1, 1, 3.0)])
            .unwrap();
        let b = SparseMatrix::from_triples(3, 2, vec![(0, 1, 4.0), (1, 0, 5.0), (2, 1, 6.0)])
            .unwrap();

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.dimensions(), (2, 2));
        assert_eq!(c.get(0, 1), 16.0); // 1*4 + 2*6
        assert_eq!(c.get(1, 0), 15.0); // 3*5
        assert_eq!(c.nnz(), 2);
    }

    #[test]
    fn test_multiply_inner_dimension_mismatch() {
        let a: SparseMatrix<f64> = SparseMatrix::new(2, 3);
        let b: SparseMatrix<f64> = SparseMatrix::new(2, 3);
        assert_eq!(
            multiply(&a, &b),
            Err(MatrixError::DimensionMismatch {
                expected: (2, 3),
                actual: (2, 3),
            })
        );
    }

    #[test]
    fn test_multiply_empty_operand() {
        let a: SparseMatrix<f64> = SparseMatrix::new(2, 3);
        let b = SparseMatrix::from_triples(3, 4, vec![(0, 0, 1.0)]).unwrap();

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.dimensions(), (2, 4));
        assert_eq!(c.nnz(), 0);
    }

    #[test]
    fn test_multiply_zero_width_result() {
        let a = SparseMatrix::from_triples(2, 3, vec![(0, 0, 1.0)]).unwrap();
        let b: SparseMatrix<f64> = SparseMatrix::new(3, 0);

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.dimensions(), (2, 0));
        assert_eq!(c.nnz(), 0);
    }

    #[test]
    fn test_multiply_cancellation_drops_entry() {
        // Row 0 of A dotted with column 0 of B sums to exactly zero.
        let a = SparseMatrix::from_triples(1, 2, vec![(0, 0, 2i64), (0, 1, -1i64)]).unwrap();
        let b = SparseMatrix::from_triples(2, 1, vec![(0, 0, 3i64), (1, 0, 6i64)]).unwrap();

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.nnz(), 0);
    }

    #[test]
    fn test_indexed_kernel_matches_probing_kernel() {
        let a = SparseMatrix::from_triples(
            3,
            4,
            vec![(0, 0, 2.0), (0, 3, -1.0), (1, 1, 4.0), (2, 0, 0.5), (2, 2, 8.0)],
        )
        .unwrap();
        let b = SparseMatrix::from_triples(
            4,
            3,
            vec![(0, 0, 1.0), (0, 2, 3.0), (1, 1, -2.0), (2, 0, 5.0), (3, 2, 7.0)],
        )
        .unwrap();

        assert_eq!(multiply(&a, &b).unwrap(), multiply_indexed(&a, &b).unwrap());
    }

    #[test]
    fn test_indexed_kernel_dimension_mismatch() {
        let a: SparseMatrix<f64> = SparseMatrix::new(2, 3);
        let b: SparseMatrix<f64> = SparseMatrix::new(2, 3);
        assert!(multiply_indexed(&a, &b).is_err());
    }
}
