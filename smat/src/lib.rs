//! smat - Sparse Matrix Text Format and Calculator Surface
//!
//! This crate layers the I/O and presentation concerns over the pure
//! `smat-core` representation:
//!
//! - **smat-core**: map-backed storage, arithmetic kernels, validation
//!   (no I/O)
//! - **smat**: text-format reader/writer, dense grid rendering, JSON
//!   export, and the operation dispatcher
//!
//! ## Quick Start
//!
//! ```rust
//! use smat::{parse_matrix, render_dense, Operation, SparseMatrix};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let a: SparseMatrix<f64> = parse_matrix("rows=2\ncols=2\n(0,0,3)\n(1,1,5)\n")?;
//!     let b: SparseMatrix<f64> = parse_matrix("rows=2\ncols=2\n(0,0,1)\n(0,1,2)\n")?;
//!
//!     let sum = Operation::Add.apply(&a, &b)?;
//!     print!("{}", render_dense(&sum));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Text format
//!
//! Two `rows=`/`cols=` header lines followed by one parenthesized
//! `(row,col,value)` triple per non-empty line. Parse errors carry the
//! 1-indexed physical line they occurred on.

// Re-export core abstractions
pub use smat_core::{
    // Storage
    MatrixElement, SparseMatrix,
    // Arithmetic kernels
    add, multiply, multiply_indexed, subtract,
    // Error handling
    MatrixError, Result,
    // Validation utilities
    check_bounds, check_inner_dim, check_same_shape,
};

pub mod dispatch;
#[cfg(feature = "serde")]
pub mod export;
pub mod render;
pub mod text_format;

pub use dispatch::{InvalidChoice, Operation};
pub use render::{render_dense, render_row};
pub use text_format::{
    format_matrix, parse_matrix, read_matrix_file, write_matrix_file, ParseError,
    ParseErrorKind, ReadError,
};

#[cfg(feature = "serde")]
pub use export::TripleDump;
