//! # knotwork-poly
//!
//! Exact multivariate polynomial arithmetic over the integers.
//!
//! This crate provides:
//! - Indeterminate vectors (`Exponents`) with zero-padded multiplication
//! - Single terms (`Term`) carrying an `i64` coefficient
//! - Sparse polynomials (`Polynomial`) with canonical compaction
//! - The `Ring` trait used by the matrix engine
//!
//! ## Canonical Form
//!
//! Polynomials may hold unsorted and duplicate terms. `Polynomial::compact`
//! sorts terms highest-first, merges equal indeterminates and drops zero
//! coefficients. Arithmetic results are always compacted; equality and
//! printing work on the compacted form.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod polynomial;
pub mod ring;
pub mod script;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use polynomial::Polynomial;
pub use ring::Ring;
pub use term::{Exponents, Term};
