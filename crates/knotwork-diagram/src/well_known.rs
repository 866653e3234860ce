//! Factories for small well-known diagrams.

use crate::arena::DiagramArena;
use crate::handle::ArcId;
use crate::knot::{Arc, Cross, Handedness, Knot};

/// Returns the plain unknot: one arc, no crossings.
#[must_use]
pub fn unknot() -> Knot {
    let mut arena = DiagramArena::new();
    let a = arena.alloc_arc(Arc::default());
    Knot::from_parts(arena, a)
}

/// Returns the trefoil, `simple_knot(3)`.
#[must_use]
pub fn trefoil() -> Knot {
    simple_knot(3)
}

/// Returns the figure-eight knot, `simple_knot(4)`.
#[must_use]
pub fn figure_eight() -> Knot {
    simple_knot(4)
}

/// Returns a cyclic chain of `size` left-handed crossings.
///
/// Arc `i` leaves crossing `i`, dives under crossing `i + 1`, and passes
/// over crossing `i - 1`, all indices taken mod `size`. A chain of no
/// crossings is the unknot.
#[must_use]
pub fn simple_knot(size: usize) -> Knot {
    if size == 0 {
        return unknot();
    }

    let mut arena = DiagramArena::new();
    let arcs: Vec<ArcId> = (0..size).map(|_| arena.alloc_arc(Arc::default())).collect();
    let crosses: Vec<_> = (0..size)
        .map(|i| {
            arena.alloc_cross(Cross::new(
                arcs[(i + 1) % size],
                arcs[(i + size - 1) % size],
                arcs[i],
                Handedness::Left,
            ))
        })
        .collect();
    for (i, &a) in arcs.iter().enumerate() {
        let arc = arena.arc_mut(a);
        arc.start = Some(crosses[i]);
        arc.stop = Some(crosses[(i + 1) % size]);
    }

    Knot::from_parts(arena, arcs[0])
}
