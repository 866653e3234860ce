//! The knot determinant.
//!
//! The crossing matrix has one row per crossing and one column per arc.
//! Row `i` encodes the colouring relation at crossing `i`: twice the
//! over-arc minus the two under-arcs. Any cofactor of this matrix has the
//! same absolute determinant, which is a knot invariant.

use log::debug;

use knotwork_linalg::{CofactorSelection, Matrix, ParallelConfig};
use knotwork_poly::Polynomial;

use crate::knot::Knot;

/// Configuration for [`Knot::determinant_with`].
#[derive(Clone, Debug, Default)]
pub struct DeterminantConfig {
    /// Which row and column to delete from the crossing matrix.
    pub cofactor: CofactorSelection,
    /// Expand the cofactor in parallel; `None` stays on one thread.
    pub parallel: Option<ParallelConfig>,
}

impl DeterminantConfig {
    /// Returns a configuration that always deletes row and column 0.
    #[must_use]
    pub fn fixed() -> Self {
        Self {
            cofactor: CofactorSelection::Fixed { row: 0, col: 0 },
            parallel: None,
        }
    }
}

impl Knot {
    /// Builds the crossing matrix, or `None` for a diagram with no crossings.
    ///
    /// Column `j` belongs to arc `j` of [`Knot::arcs`], the arc leaving
    /// crossing `j`. Every entry is stored, zeros included.
    #[must_use]
    pub fn matrix(&self) -> Option<Matrix<Polynomial>> {
        let crosses = self.crosses();
        if crosses.is_empty() {
            return None;
        }
        let arcs = self.arcs();

        let mut elements = Vec::with_capacity(crosses.len() * arcs.len());
        for &c in &crosses {
            let cross = self.cross(c);
            for &a in &arcs {
                let mut entry = 0;
                if cross.incoming() == a {
                    entry -= 1;
                }
                if cross.outgoing() == a {
                    entry -= 1;
                }
                if cross.over() == a {
                    entry += 2;
                }
                elements.push(Polynomial::constant(entry));
            }
        }
        Some(Matrix::new(elements, arcs.len()))
    }

    /// Computes the knot determinant with a random cofactor.
    ///
    /// # Panics
    ///
    /// Panics if the cofactor determinant is not a constant.
    #[must_use]
    pub fn determinant(&self) -> u64 {
        self.determinant_with(&DeterminantConfig::default())
    }

    /// Computes the knot determinant.
    ///
    /// Diagrams with fewer than two crossings have determinant 1.
    ///
    /// # Panics
    ///
    /// Panics if the cofactor determinant is not a constant.
    #[must_use]
    pub fn determinant_with(&self, config: &DeterminantConfig) -> u64 {
        let Some(matrix) = self.matrix() else {
            return 1;
        };
        if matrix.num_rows() == 1 {
            return 1;
        }

        let cofactor = matrix.cofactor_with(&config.cofactor);
        let det = match &config.parallel {
            Some(parallel) => cofactor.determinant_parallel(parallel),
            None => cofactor.determinant(),
        };
        let Some(value) = det.constant_value() else {
            panic!("knot determinant {det} is not a constant");
        };

        debug!("determinant of {}-crossing diagram: {value}", matrix.num_rows());
        value.unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::well_known::{figure_eight, simple_knot, trefoil, unknot};

    #[test]
    fn test_matrix_trefoil() {
        let m = trefoil().matrix().unwrap();
        assert_eq!(m.num_rows(), 3);
        assert!(m.is_square());
        assert_eq!(
            m.to_string(),
            "⎡-1  2 -1⎤\n⎢-1 -1  2⎥\n⎣ 2 -1 -1⎦"
        );
    }

    #[test]
    fn test_matrix_unknot() {
        assert!(unknot().matrix().is_none());
    }

    #[test]
    fn test_determinant_fixtures() {
        assert_eq!(unknot().determinant(), 1);
        assert_eq!(trefoil().determinant(), 3);
        assert_eq!(figure_eight().determinant(), 5);
        assert_eq!(simple_knot(5).determinant(), 11);
        assert_eq!(simple_knot(6).determinant(), 21);
        assert_eq!(simple_knot(7).determinant(), 43);
    }

    #[test]
    fn test_determinant_every_cofactor() {
        let k = figure_eight();
        for row in 0..4 {
            for col in 0..4 {
                let config = DeterminantConfig {
                    cofactor: CofactorSelection::Fixed { row, col },
                    parallel: None,
                };
                assert_eq!(k.determinant_with(&config), 5);
            }
        }
    }

    #[test]
    fn test_determinant_parallel() {
        let config = DeterminantConfig {
            cofactor: CofactorSelection::Random { seed: Some(7) },
            parallel: Some(ParallelConfig {
                parallel_threshold: 2,
            }),
        };
        assert_eq!(simple_knot(6).determinant_with(&config), 21);
    }

    #[test]
    fn test_one_crossing() {
        let mut k = unknot();
        k.twist_left(k.start());
        assert_eq!(k.matrix().unwrap().num_rows(), 1);
        assert_eq!(k.determinant(), 1);
    }
}
