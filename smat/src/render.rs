//! Dense grid rendering for console output
//!
//! Walks the declared extent row by row, substituting zero for absent
//! coordinates. This is purely a formatting concern: the sparse
//! representation itself never materializes a dense grid.

use std::fmt;

use smat_core::{MatrixElement, SparseMatrix};

/// Render one row, values space-separated
pub fn render_row<T>(matrix: &SparseMatrix<T>, row: usize) -> String
where
    T: MatrixElement + fmt::Display,
{
    let mut line = String::new();
    for col in 0..matrix.ncols() {
        if col > 0 {
            line.push(' ');
        }
        line.push_str(&matrix.get(row, col).to_string());
    }
    line
}

/// Render the full grid, one line per row
pub fn render_dense<T>(matrix: &SparseMatrix<T>) -> String
where
    T: MatrixElement + fmt::Display,
{
    let mut out = String::new();
    for row in 0..matrix.nrows() {
        out.push_str(&render_row(matrix, row));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_zeros() {
        let matrix =
            SparseMatrix::from_triples(2, 3, vec![(0, 0, 3.0), (1, 2, 5.0)]).unwrap();
        assert_eq!(render_dense(&matrix), "3 0 0\n0 0 5\n");
    }

    #[test]
    fn test_render_empty_matrix() {
        let matrix: SparseMatrix<f64> = SparseMatrix::new(2, 2);
        assert_eq!(render_dense(&matrix), "0 0\n0 0\n");
    }

    #[test]
    fn test_render_zero_extent() {
        let matrix: SparseMatrix<f64> = SparseMatrix::new(0, 0);
        assert_eq!(render_dense(&matrix), "");

        let matrix: SparseMatrix<f64> = SparseMatrix::new(2, 0);
        assert_eq!(render_dense(&matrix), "\n\n");
    }

    #[test]
    fn test_render_single_row() {
        let matrix =
            SparseMatrix::from_triples(2, 2, vec![(1, 0, -2.5)]).unwrap();
        assert_eq!(render_row(&matrix, 0), "0 0");
        assert_eq!(render_row(&matrix, 1), "-2.5 0");
    }
}
