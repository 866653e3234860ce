//! The knot graph.
//!
//! A diagram is a cycle of arcs. An arc runs from the crossing where it
//! emerges from under another strand to the crossing where it dives under
//! again, passing over any number of crossings in between. Each crossing
//! records the arc coming in, the arc going out and the arc passing over.
//! The over-arc may be the incoming or outgoing arc itself.
//!
//! The plain unknot is a single arc with no crossings at either end.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arena::DiagramArena;
use crate::handle::{ArcId, CrossId};

/// Chirality of a crossing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    /// The incoming arc lies to the left of the over-arc.
    #[default]
    Left,
    /// The incoming arc lies to the right of the over-arc.
    Right,
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("L"),
            Self::Right => f.write_str("R"),
        }
    }
}

/// A directed strand between two under-crossings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Arc {
    pub(crate) start: Option<CrossId>,
    pub(crate) stop: Option<CrossId>,
}

impl Arc {
    /// Returns the crossing this arc emerges from.
    #[must_use]
    pub fn start(&self) -> Option<CrossId> {
        self.start
    }

    /// Returns the crossing this arc dives under.
    #[must_use]
    pub fn stop(&self) -> Option<CrossId> {
        self.stop
    }
}

/// A crossing of two strands.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cross {
    pub(crate) over: ArcId,
    pub(crate) incoming: ArcId,
    pub(crate) outgoing: ArcId,
    pub(crate) handedness: Handedness,
}

impl Cross {
    pub(crate) fn new(over: ArcId, incoming: ArcId, outgoing: ArcId, handedness: Handedness) -> Self {
        Self {
            over,
            incoming,
            outgoing,
            handedness,
        }
    }

    /// Returns the arc passing over this crossing.
    #[must_use]
    pub fn over(&self) -> ArcId {
        self.over
    }

    /// Returns the arc ending under this crossing.
    #[must_use]
    pub fn incoming(&self) -> ArcId {
        self.incoming
    }

    /// Returns the arc starting under this crossing.
    #[must_use]
    pub fn outgoing(&self) -> ArcId {
        self.outgoing
    }

    /// Returns the chirality of this crossing.
    #[must_use]
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Returns the under-arc on the left of the over-arc.
    #[must_use]
    pub fn left(&self) -> ArcId {
        match self.handedness {
            Handedness::Left => self.incoming,
            Handedness::Right => self.outgoing,
        }
    }

    /// Returns the under-arc on the right of the over-arc.
    #[must_use]
    pub fn right(&self) -> ArcId {
        match self.handedness {
            Handedness::Right => self.incoming,
            Handedness::Left => self.outgoing,
        }
    }
}

/// A knot diagram.
///
/// Arcs and crossings live in an arena owned by the knot and are addressed
/// by [`ArcId`] and [`CrossId`]. The diagram is anchored at a start arc,
/// which fixes the order of [`Knot::arcs`] and [`Knot::crosses`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Knot {
    pub(crate) arena: DiagramArena,
    pub(crate) start: ArcId,
}

impl Knot {
    pub(crate) fn from_parts(arena: DiagramArena, start: ArcId) -> Self {
        Self { arena, start }
    }

    /// Returns the arc the diagram is anchored at.
    #[must_use]
    pub fn start(&self) -> ArcId {
        self.start
    }

    /// Gets an arc record.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to a live arc of this knot.
    #[must_use]
    pub fn arc(&self, id: ArcId) -> &Arc {
        self.arena.arc(id)
    }

    /// Gets a crossing record.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to a live crossing of this knot.
    #[must_use]
    pub fn cross(&self, id: CrossId) -> &Cross {
        self.arena.cross(id)
    }

    /// Returns the arc following `arc` along the strand.
    ///
    /// An arc with no stop crossing is its own successor.
    #[must_use]
    pub fn next(&self, arc: ArcId) -> ArcId {
        match self.arc(arc).stop {
            Some(stop) => self.cross(stop).outgoing,
            None => arc,
        }
    }

    /// Returns the arc preceding `arc` along the strand.
    #[must_use]
    pub fn prev(&self, arc: ArcId) -> ArcId {
        match self.arc(arc).start {
            Some(start) => self.cross(start).incoming,
            None => arc,
        }
    }

    /// Returns all arcs in strand order, beginning at the start arc.
    ///
    /// # Panics
    ///
    /// Panics if following the strand never returns to the start arc.
    #[must_use]
    pub fn arcs(&self) -> Vec<ArcId> {
        let limit = self.arena.arc_count();
        let mut arcs = vec![self.start];
        let mut arc = self.next(self.start);
        while arc != self.start {
            assert!(arcs.len() < limit, "strand does not close at {}", self.start);
            arcs.push(arc);
            arc = self.next(arc);
        }
        arcs
    }

    /// Returns all crossings in strand order.
    ///
    /// Crossing `i` is the start of arc `i`. The plain unknot has none.
    #[must_use]
    pub fn crosses(&self) -> Vec<CrossId> {
        self.arcs()
            .into_iter()
            .filter_map(|a| self.arc(a).start)
            .collect()
    }

    /// Returns the number of crossings.
    #[must_use]
    pub fn size(&self) -> usize {
        self.crosses().len()
    }

    /// Returns true if one of the arcs passes over an end of the other.
    #[must_use]
    pub fn touches(&self, a: ArcId, b: ArcId) -> bool {
        if self.arc(a).start.is_none() {
            return false;
        }
        let over_end = |arc: ArcId, other: ArcId| {
            let record = self.arc(arc);
            [record.start, record.stop]
                .into_iter()
                .flatten()
                .any(|c| self.cross(c).over == other)
        };
        over_end(a, b) || over_end(b, a)
    }

    /// Reverses the direction of travel.
    ///
    /// Every crossing swaps its incoming and outgoing arcs, and every arc
    /// swaps its start and stop. Handedness is kept.
    pub fn reverse(&mut self) {
        let crosses = self.crosses();
        for &c in &crosses {
            let incoming = {
                let record = self.arena.cross_mut(c);
                std::mem::swap(&mut record.incoming, &mut record.outgoing);
                record.incoming
            };
            let arc = self.arena.arc_mut(incoming);
            std::mem::swap(&mut arc.start, &mut arc.stop);
        }
        if let Some(&first) = crosses.first() {
            self.start = self.cross(first).outgoing;
        }
    }
}

/// Renders the diagram as a sequence of labelled crossings and arcs.
///
/// Arc `i` is written `A{i}`, followed in braces by the crossings it passes
/// over. Each crossing is written as its handedness and the number of the
/// arc it starts, and appears again at the end when the strand closes.
impl fmt::Display for Knot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arcs = self.arcs();
        let crosses = self.crosses();
        let mut parts = Vec::with_capacity(2 * arcs.len() + 1);

        for (i, &a) in arcs.iter().enumerate() {
            let arc = self.arc(a);
            if let Some(start) = arc.start {
                parts.push(format!("{}{}", self.cross(start).handedness, i + 1));
            }
            let overs: Vec<String> = crosses
                .iter()
                .enumerate()
                .filter(|&(_, &c)| self.cross(c).over == a)
                .map(|(j, &c)| format!("{}{}", self.cross(c).handedness, j + 1))
                .collect();
            if overs.is_empty() {
                parts.push(format!("A{}", i + 1));
            } else {
                parts.push(format!("A{}{{{}}}", i + 1, overs.join(", ")));
            }
        }

        if let Some(stop) = arcs.last().and_then(|&a| self.arc(a).stop) {
            parts.push(format!("{}1", self.cross(stop).handedness));
        }

        f.write_str(&parts.join(" "))
    }
}
