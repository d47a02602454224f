#![no_std]

//! smat-core - Sparse Matrix Storage and Arithmetic
//!
//! This crate provides the map-backed sparse matrix representation and
//! the arithmetic kernels that operate directly on it. Only the
//! non-zero entries are stored; every unlisted coordinate is implicitly
//! zero, and no operation ever materializes a dense grid.
//!
//! No I/O lives here: text parsing, grid rendering, and the calculator
//! surface sit in the `smat` crate. This crate is `no_std` and depends
//! only on `alloc`.

extern crate alloc;

pub mod element;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod validation;

// Storage
pub use element::MatrixElement;
pub use matrix::SparseMatrix;

// Arithmetic kernels
pub use ops::{add, multiply, multiply_indexed, subtract};

// Error handling
pub use error::{MatrixError, Result};

// Validation utilities
pub use validation::{check_bounds, check_inner_dim, check_same_shape};
