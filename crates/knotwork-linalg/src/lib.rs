//! # knotwork-linalg
//!
//! Exact dense linear algebra for knot invariants.
//!
//! This crate provides:
//! - Dense row-major matrices over any `knotwork_poly::Ring`
//! - Determinants by Laplace expansion (no division, so polynomial
//!   entries stay exact)
//! - Minors and cofactor selection (random, seeded, or fixed)
//! - Parallel first-row expansion via rayon for large matrices
//!
//! ## Cost
//!
//! Laplace expansion is factorial in the matrix size. It is used because
//! elimination over polynomial entries would need rational coefficients.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cofactor;
pub mod dense_matrix;
pub mod parallel;

pub use cofactor::CofactorSelection;
pub use dense_matrix::Matrix;
pub use parallel::ParallelConfig;
