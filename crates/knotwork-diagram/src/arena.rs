//! Arena storage for arcs and crossings.
//!
//! Arcs and crossings reference each other in cycles. Storing them in two
//! slot vectors and linking them by handle keeps the aliasing explicit:
//! a crossing's over-arc may be the very arc that enters or leaves it.

use crate::handle::{ArcId, CrossId};
use crate::knot::{Arc, Cross};

/// Slot storage for the records of one knot.
///
/// Released slots become `None`. Trailing empty slots are dropped so that
/// undoing the most recent allocations leaves the arena exactly as before.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DiagramArena {
    /// Arc records, indexed by `ArcId`.
    arcs: Vec<Option<Arc>>,
    /// Crossing records, indexed by `CrossId`.
    crosses: Vec<Option<Cross>>,
}

impl DiagramArena {
    /// Creates a new empty arena.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Stores an arc, returning its handle.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn alloc_arc(&mut self, arc: Arc) -> ArcId {
        let index = self.arcs.len();
        assert!(index < u32::MAX as usize, "Arc arena capacity exceeded");
        self.arcs.push(Some(arc));
        ArcId::new(index as u32)
    }

    /// Stores a crossing, returning its handle.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn alloc_cross(&mut self, cross: Cross) -> CrossId {
        let index = self.crosses.len();
        assert!(index < u32::MAX as usize, "Cross arena capacity exceeded");
        self.crosses.push(Some(cross));
        CrossId::new(index as u32)
    }

    /// Gets the arc at the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was released or never allocated.
    pub(crate) fn arc(&self, id: ArcId) -> &Arc {
        match self.arcs.get(id.index() as usize) {
            Some(Some(arc)) => arc,
            _ => panic!("dangling arc handle {id:?}"),
        }
    }

    pub(crate) fn arc_mut(&mut self, id: ArcId) -> &mut Arc {
        match self.arcs.get_mut(id.index() as usize) {
            Some(Some(arc)) => arc,
            _ => panic!("dangling arc handle {id:?}"),
        }
    }

    /// Gets the crossing at the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was released or never allocated.
    pub(crate) fn cross(&self, id: CrossId) -> &Cross {
        match self.crosses.get(id.index() as usize) {
            Some(Some(cross)) => cross,
            _ => panic!("dangling cross handle {id:?}"),
        }
    }

    pub(crate) fn cross_mut(&mut self, id: CrossId) -> &mut Cross {
        match self.crosses.get_mut(id.index() as usize) {
            Some(Some(cross)) => cross,
            _ => panic!("dangling cross handle {id:?}"),
        }
    }

    /// Iterates over live crossings, mutably.
    pub(crate) fn crosses_mut(&mut self) -> impl Iterator<Item = &mut Cross> {
        self.crosses.iter_mut().flatten()
    }

    /// Releases an arc slot.
    pub(crate) fn release_arc(&mut self, id: ArcId) {
        if let Some(slot) = self.arcs.get_mut(id.index() as usize) {
            *slot = None;
        }
        while matches!(self.arcs.last(), Some(None)) {
            self.arcs.pop();
        }
    }

    /// Releases a crossing slot.
    pub(crate) fn release_cross(&mut self, id: CrossId) {
        if let Some(slot) = self.crosses.get_mut(id.index() as usize) {
            *slot = None;
        }
        while matches!(self.crosses.last(), Some(None)) {
            self.crosses.pop();
        }
    }

    /// Returns the number of live arcs.
    pub(crate) fn arc_count(&self) -> usize {
        self.arcs.iter().flatten().count()
    }

    /// Returns the number of live crossings.
    pub(crate) fn cross_count(&self) -> usize {
        self.crosses.iter().flatten().count()
    }
}
