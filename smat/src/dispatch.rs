//! Operation selection and dispatch
//!
//! The interactive surface presents three named operations; this module
//! owns the enum they map to and the dispatch into the arithmetic
//! kernels, so selection logic stays testable without stdin.

use std::fmt;
use std::str::FromStr;

use smat_core::{add, multiply, subtract, MatrixElement, Result, SparseMatrix};

/// The three binary operations the calculator offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations, in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// 1-based menu position
    pub fn menu_index(self) -> usize {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    /// Human-readable name, as shown in the menu
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
        }
    }

    /// Run this operation on two operands
    pub fn apply<T: MatrixElement>(
        self,
        a: &SparseMatrix<T>,
        b: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A selection outside the three valid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid choice '{}', expected 1, 2, or 3", self.0)
    }
}

impl std::error::Error for InvalidChoice {}

impl FromStr for Operation {
    type Err = InvalidChoice;

    /// Accepts the menu digit or the operation name, case-insensitive
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "add" => Ok(Operation::Add),
            "2" | "subtract" | "sub" => Ok(Operation::Subtract),
            "3" | "multiply" | "mul" => Ok(Operation::Multiply),
            _ => Err(InvalidChoice(s.trim().to_string())),
        }
    }
}
