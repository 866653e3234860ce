//! Parallel determinant expansion.
//!
//! The terms of the first-row expansion are independent, so large
//! matrices hand them to rayon. Deeper levels stay sequential.

use log::trace;
use rayon::prelude::*;

use knotwork_poly::Ring;

use crate::dense_matrix::Matrix;

/// Configuration for parallel determinant expansion.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum matrix size to enable parallelism.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 9,
        }
    }
}

impl<R: Ring + Send + Sync> Matrix<R> {
    /// Computes the determinant, expanding row 0 in parallel.
    ///
    /// Matrices smaller than the threshold use [`Matrix::determinant`].
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square or is empty.
    #[must_use]
    pub fn determinant_parallel(&self, config: &ParallelConfig) -> R {
        if self.stride() < config.parallel_threshold {
            return self.determinant();
        }
        self.assert_determinant_shape();
        trace!("parallel expansion of {0}x{0} matrix", self.stride());

        (0..self.stride())
            .into_par_iter()
            .map(|i| self.expansion_term(i))
            .reduce(R::zero, |a, b| a + b)
    }
}
