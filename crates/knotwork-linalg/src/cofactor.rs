//! Choosing which row and column to strike out.
//!
//! Any single cofactor of a knot's crossing matrix has the same
//! determinant up to sign, so the choice is free. Random selection is
//! the default; a seed or a fixed position makes runs reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// How a cofactor position is picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CofactorSelection {
    /// Uniformly random row and column.
    Random {
        /// Seed for a `ChaCha8Rng`; `None` uses the thread RNG.
        seed: Option<u64>,
    },
    /// Always the given row and column.
    Fixed {
        /// Row to strike out.
        row: usize,
        /// Column to strike out.
        col: usize,
    },
}

impl Default for CofactorSelection {
    fn default() -> Self {
        Self::Random { seed: None }
    }
}

impl CofactorSelection {
    /// Returns the (row, col) to remove from a `size`x`size` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or a fixed position is out of range.
    #[must_use]
    pub fn select(&self, size: usize) -> (usize, usize) {
        assert!(size > 0, "no cofactor of an empty matrix");

        match *self {
            Self::Random { seed: Some(seed) } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                (rng.gen_range(0..size), rng.gen_range(0..size))
            }
            Self::Random { seed: None } => {
                let mut rng = rand::thread_rng();
                (rng.gen_range(0..size), rng.gen_range(0..size))
            }
            Self::Fixed { row, col } => {
                assert!(
                    row < size && col < size,
                    "cofactor ({row}, {col}) out of range for size {size}"
                );
                (row, col)
            }
        }
    }
}
