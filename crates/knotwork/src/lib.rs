//! # Knotwork
//!
//! Planar knot diagrams and their determinant invariant.
//!
//! Diagrams are graphs of arcs and crossings that can be rewritten by
//! Reidemeister moves. The knot determinant is read off any cofactor of
//! the crossing matrix, computed exactly with integer polynomials.
//!
//! ## Features
//!
//! - **Knot Graph**: arena-backed arcs and crossings with twist, poke and slide
//! - **Grid Coding**: lattice drawings replayed from direction sequences
//! - **Exact Algebra**: multivariate integer polynomials and dense matrices
//! - **Parallel Expansion**: top-level Laplace expansion with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use knotwork::prelude::*;
//!
//! let mut k = figure_eight();
//! k.twist_right(k.start());
//! assert_eq!(k.determinant(), 5);
//!
//! let grid = "LLLL".parse::<Directions>().unwrap().decode().unwrap();
//! assert_eq!(grid.crossings(), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use knotwork_diagram as diagram;
pub use knotwork_linalg as linalg;
pub use knotwork_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use knotwork_diagram::well_known::{figure_eight, simple_knot, trefoil, unknot};
    pub use knotwork_diagram::{
        ArcId, CrossId, DeterminantConfig, Directions, Grid, Handedness, Knot, KnotError,
    };
    pub use knotwork_linalg::{CofactorSelection, Matrix, ParallelConfig};
    pub use knotwork_poly::{Polynomial, Ring, Term};
}
