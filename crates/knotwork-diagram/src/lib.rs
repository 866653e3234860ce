//! # knotwork-diagram
//!
//! Knot diagrams and their determinant.
//!
//! This crate provides:
//! - The knot graph (`Knot`): arcs and crossings in an arena, addressed by
//!   `ArcId` and `CrossId`
//! - Reidemeister moves: twist/untwist, poke and slide
//! - Grid coding: replaying a direction sequence into a lattice drawing
//! - The knot determinant, from any cofactor of the crossing matrix
//! - Factories for the unknot, trefoil, figure-eight and cyclic chains
//!
//! ## Example
//!
//! ```
//! use knotwork_diagram::well_known::trefoil;
//!
//! let mut k = trefoil();
//! assert_eq!(k.determinant(), 3);
//!
//! let kink = k.twist_left(k.start());
//! assert_eq!(k.determinant(), 3);
//! k.untwist(kink).unwrap();
//! assert_eq!(k, trefoil());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod arena;
pub mod coding;
pub mod error;
pub mod handle;
pub mod invariant;
pub mod knot;
pub mod moves;
pub mod well_known;

#[cfg(test)]
mod proptests;

pub use coding::{decode, Cell, Direction, Directions, Grid, Orientation, Point};
pub use error::{CrossingViolation, KnotError};
pub use handle::{ArcId, CrossId};
pub use invariant::DeterminantConfig;
pub use knot::{Arc, Cross, Handedness, Knot};
