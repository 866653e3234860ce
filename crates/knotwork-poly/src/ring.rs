//! Entry types for matrices.
//!
//! Crossing matrices are filled with integers, but cofactor expansion also
//! runs over [`Polynomial`](crate::Polynomial) entries, so the matrix engine
//! only asks for the operations listed here.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Values a determinant can be expanded over.
///
/// Implemented for `i64` and `Polynomial`. Cofactor expansion adds,
/// subtracts and multiplies entries, and starts every sum from
/// [`zero`](Ring::zero).
pub trait Ring:
    Clone + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// Returns 0.
    fn zero() -> Self;

    /// Returns 1.
    fn one() -> Self;

    /// Returns true for 0.
    fn is_zero(&self) -> bool;
}

impl Ring for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}
