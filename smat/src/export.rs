//! Machine-readable triple export
//!
//! Serializes a matrix as `{"rows": R, "cols": C, "entries": [[r, c, v],
//! ...]}` for downstream tooling, and rebuilds matrices from the same
//! shape. Entries are kept in row-major order so the encoding of a
//! given matrix is stable.

use serde::{Deserialize, Serialize};

use smat_core::{MatrixElement, Result, SparseMatrix};

/// Flat triple snapshot of a sparse matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripleDump {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<(usize, usize, f64)>,
}

impl TripleDump {
    /// Capture the non-zero entries of a matrix, row-major order
    pub fn from_matrix<T: MatrixElement>(matrix: &SparseMatrix<T>) -> Self {
        let mut entries: Vec<(usize, usize, f64)> = matrix
            .triples()
            .map(|(row, col, value)| (row, col, value.to_f64()))
            .collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));

        Self {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
            entries,
        }
    }

    /// Rebuild a matrix from the snapshot
    pub fn into_matrix<T: MatrixElement>(self) -> Result<SparseMatrix<T>> {
        SparseMatrix::from_triples(
            self.rows,
            self.cols,
            self.entries
                .into_iter()
                .map(|(row, col, value)| (row, col, T::from_f64(value))),
        )
    }

    /// Encode as a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode from a JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_is_row_major() {
        let matrix =
            SparseMatrix::from_triples(2, 2, vec![(1, 1, 5.0), (0, 0, 3.0)]).unwrap();
        let dump = TripleDump::from_matrix(&matrix);
        assert_eq!(dump.rows, 2);
        assert_eq!(dump.cols, 2);
        assert_eq!(dump.entries, vec![(0, 0, 3.0), (1, 1, 5.0)]);
    }

    #[test]
    fn test_json_round_trip() {
        let matrix =
            SparseMatrix::from_triples(3, 4, vec![(0, 3, -1.5), (2, 0, 7.0)]).unwrap();
        let json = TripleDump::from_matrix(&matrix).to_json().unwrap();

        let rebuilt: SparseMatrix<f64> = TripleDump::from_json(&json)
            .unwrap()
            .into_matrix()
            .unwrap();
        assert_eq!(rebuilt, matrix);
    }

    #[test]
    fn test_json_shape() {
        let matrix = SparseMatrix::from_triples(1, 2, vec![(0, 1, 2.0)]).unwrap();
        let json = TripleDump::from_matrix(&matrix).to_json().unwrap();
        assert_eq!(json, r#"{"rows":1,"cols":2,"entries":[[0,1,2.0]]}"#);
    }
}
