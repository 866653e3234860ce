//! Error types for diagram decoding and local moves.

use thiserror::Error;

use crate::coding::{Cell, Direction, Orientation, Point};

/// Errors raised by decoding or transforming a knot diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnotError {
    /// The walk is empty or does not return to the origin.
    #[error("knot: incomplete directions")]
    IncompleteDirections,

    /// The walk revisits a point in a way that is not a valid crossing.
    #[error("knot: invalid crossing at position {point}: {reason}")]
    InvalidCrossing {
        /// Grid point where the walk failed.
        point: Point,
        /// Why the crossing was rejected.
        reason: CrossingViolation,
    },

    /// The arc is not adjacent to the crossing it should slide under.
    #[error("knot: cannot slide, arc must be between crosses adjacent to the cross")]
    Slide,

    /// The crossing is not a kink of a single arc.
    #[error("knot: cannot untwist, over arc must enter or leave the cross")]
    Untwist,

    /// A direction string contains an unknown letter.
    #[error("knot: invalid direction {0:?}, expected one of F, L, U, R")]
    InvalidDirection(char),
}

/// Reasons a revisited grid point cannot become a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CrossingViolation {
    /// Crossings must be passed straight through.
    #[error("must go straight (F or U) through a crossing, not {0}")]
    MustGoStraight(Direction),

    /// The point already holds a crossing.
    #[error("already crossed at {0}")]
    AlreadyCrossed(Cell),

    /// The earlier visit turned at this point.
    #[error("can only cross a straight line, not {0}")]
    NotStraight(Cell),

    /// The two passes run in parallel.
    #[error("{0} is not perpendicular to {1}")]
    NotPerpendicular(Cell, Orientation),

    /// Going under requires something already at the point.
    #[error("nothing to go under")]
    NothingToGoUnder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = KnotError::InvalidCrossing {
            point: Point::new(1, -2),
            reason: CrossingViolation::NothingToGoUnder,
        };
        assert_eq!(
            err.to_string(),
            "knot: invalid crossing at position (1, -2): nothing to go under"
        );
        assert_eq!(
            KnotError::IncompleteDirections.to_string(),
            "knot: incomplete directions"
        );
    }

    #[test]
    fn test_violation_messages() {
        let cell = Cell::new(Orientation::N, Direction::Left);
        assert_eq!(
            CrossingViolation::NotStraight(cell).to_string(),
            "can only cross a straight line, not N (L)"
        );
        assert_eq!(
            CrossingViolation::MustGoStraight(Direction::Right).to_string(),
            "must go straight (F or U) through a crossing, not R"
        );
    }
}
