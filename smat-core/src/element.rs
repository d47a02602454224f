//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as sparse matrix entries, and implements it for the numeric
//! types the text format layer can construct.

use core::ops::{Add, Mul, Neg, Sub};

/// Trait for types that can be stored as sparse matrix entries
///
/// An element type must behave like a real number under addition,
/// subtraction, and multiplication, and must expose its additive
/// identity so that storage can suppress zeros.
///
/// The zero test is an exact comparison against [`MatrixElement::ZERO`],
/// for floating-point types too. A subtraction that cancels to an
/// inexact residue keeps the residue entry; callers needing
/// tolerance-based pruning should round values before storing them.
pub trait MatrixElement:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Sized
{
    /// The additive identity for this element type
    const ZERO: Self;

    /// The multiplicative identity for this element type
    const ONE: Self;

    /// Whether this value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Convert from f64 for generic construction
    ///
    /// The text format parses every value as f64 before the element
    /// type is known; this hook narrows it to the target type.
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic rendering and export
    fn to_f64(self) -> f64;
}

impl MatrixElement for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl MatrixElement for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl MatrixElement for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl MatrixElement for i64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

// Unsigned types are deliberately absent: subtraction negates entries
// present only in the right operand, which requires Neg.
