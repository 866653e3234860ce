//! Reidemeister moves.
//!
//! - [`Knot::twist`] / [`Knot::untwist`]: add or remove a kink (move I)
//! - [`Knot::poke`]: push one arc under another (move II)
//! - [`Knot::slide`]: move a strand across a crossing (move III)
//!
//! Moves rewrite the arena in place and never change the knot type, so
//! the determinant is preserved.

use log::debug;

use crate::error::KnotError;
use crate::handle::{ArcId, CrossId};
use crate::knot::{Arc, Cross, Handedness, Knot};

impl Knot {
    /// Adds a kink to `arc`, returning the new crossing.
    ///
    /// The arc is cut at the new crossing: the original arc ends under it and
    /// a new arc leaves it. A right-handed kink passes the new arc over the
    /// crossing; a left-handed kink passes the original arc over it. On the
    /// plain unknot the single arc both starts and stops at the new crossing.
    ///
    /// # Panics
    ///
    /// Panics if `arc` is not a live arc of this knot.
    pub fn twist(&mut self, arc: ArcId, handedness: Handedness) -> CrossId {
        let stop = self.arc(arc).stop;
        let Some(stop) = stop else {
            let c = self
                .arena
                .alloc_cross(Cross::new(arc, arc, arc, handedness));
            let a = self.arena.arc_mut(arc);
            a.start = Some(c);
            a.stop = Some(c);
            debug!("twist {arc} ({handedness}) on the unknot: {c}");
            return c;
        };

        let c = self
            .arena
            .alloc_cross(Cross::new(arc, arc, arc, handedness));
        let b = self.arena.alloc_arc(Arc {
            start: Some(c),
            stop: Some(stop),
        });
        let cross = self.arena.cross_mut(c);
        cross.outgoing = b;
        cross.over = match handedness {
            Handedness::Right => b,
            Handedness::Left => arc,
        };
        self.arena.cross_mut(stop).incoming = b;
        self.arena.arc_mut(arc).stop = Some(c);

        debug!("twist {arc} ({handedness}): {c}, new arc {b}");
        c
    }

    /// Adds a left-handed kink. See [`Knot::twist`].
    pub fn twist_left(&mut self, arc: ArcId) -> CrossId {
        self.twist(arc, Handedness::Left)
    }

    /// Adds a right-handed kink. See [`Knot::twist`].
    pub fn twist_right(&mut self, arc: ArcId) -> CrossId {
        self.twist(arc, Handedness::Right)
    }

    /// Removes a kink, undoing [`Knot::twist`].
    ///
    /// The incoming arc absorbs the outgoing arc: it takes over its stop
    /// crossing and every crossing it passed over. The crossing and the
    /// outgoing arc are released.
    ///
    /// # Errors
    ///
    /// Returns [`KnotError::Untwist`] if the crossing's over-arc is neither
    /// its incoming nor its outgoing arc.
    ///
    /// # Panics
    ///
    /// Panics if `cross` is not a live crossing of this knot, which includes
    /// a crossing already removed by an earlier untwist.
    pub fn untwist(&mut self, cross: CrossId) -> Result<(), KnotError> {
        let c = self.cross(cross).clone();
        if c.over != c.incoming && c.over != c.outgoing {
            return Err(KnotError::Untwist);
        }

        let (a, b) = (c.incoming, c.outgoing);
        if a == b {
            let arc = self.arena.arc_mut(a);
            arc.start = None;
            arc.stop = None;
            self.arena.release_cross(cross);
            self.start = a;
            debug!("untwist {cross}: back to the unknot");
            return Ok(());
        }

        let Some(downstream) = self.arc(b).stop else {
            panic!("arc {b} leaves {cross} but never stops");
        };
        self.arena.arc_mut(a).stop = Some(downstream);
        self.arena.cross_mut(downstream).incoming = a;
        for record in self.arena.crosses_mut() {
            if record.over == b {
                record.over = a;
            }
        }
        if self.start == b {
            self.start = a;
        }
        self.arena.release_arc(b);
        self.arena.release_cross(cross);

        debug!("untwist {cross}: {a} absorbs {b}");
        Ok(())
    }

    /// Pushes `over` across `under`, returning the two new crossings.
    ///
    /// `under` now ends under the first crossing. A new arc runs from there
    /// to the second crossing, and another from the second crossing to the
    /// old end of `under`. Both crossings are left-handed and have `over`
    /// on top. Whether the two arcs are actually next to each other in the
    /// plane is not checked.
    ///
    /// # Panics
    ///
    /// Panics if `over` or `under` is not a live arc of this knot.
    pub fn poke(&mut self, over: ArcId, under: ArcId) -> (CrossId, CrossId) {
        let stop = self.arc(under).stop;

        let c1 = self
            .arena
            .alloc_cross(Cross::new(over, under, under, Handedness::Left));
        let c2 = self
            .arena
            .alloc_cross(Cross::new(over, under, under, Handedness::Left));
        let d = self.arena.alloc_arc(Arc {
            start: Some(c1),
            stop: Some(c2),
        });
        self.arena.cross_mut(c1).outgoing = d;
        self.arena.cross_mut(c2).incoming = d;

        match stop {
            Some(stop) => {
                let e = self.arena.alloc_arc(Arc {
                    start: Some(c2),
                    stop: Some(stop),
                });
                self.arena.cross_mut(c2).outgoing = e;
                self.arena.cross_mut(stop).incoming = e;
                self.arena.arc_mut(under).stop = Some(c1);
            }
            None => {
                // The unknot's arc closes through both crossings.
                let arc = self.arena.arc_mut(under);
                arc.start = Some(c2);
                arc.stop = Some(c1);
            }
        }

        debug!("poke {over} over {under}: {c1}, {c2}");
        (c1, c2)
    }

    /// Slides `arc` across `cross`.
    ///
    /// The arc must run between two crossings, one passed over by the same
    /// arc as `cross` and the other passed over by one of `cross`'s under
    /// arcs. The over-arcs are rotated so that the strand ends up on the far
    /// side of `cross`. Sliding twice restores the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`KnotError::Slide`] if the arc does not fit either pattern.
    ///
    /// # Panics
    ///
    /// Panics if `arc` is not a live arc or `cross` is not a live crossing
    /// of this knot.
    pub fn slide(&mut self, arc: ArcId, cross: CrossId) -> Result<(), KnotError> {
        let record = self.arc(arc);
        let (Some(start), Some(stop)) = (record.start, record.stop) else {
            return Err(KnotError::Slide);
        };

        let c = self.cross(cross);
        let is_under = |a: ArcId| a == c.incoming || a == c.outgoing;
        let start_over = self.cross(start).over;
        let stop_over = self.cross(stop).over;

        let (near, far) = if start_over == c.over && is_under(stop_over) {
            (stop, start)
        } else if is_under(start_over) && stop_over == c.over {
            (start, stop)
        } else {
            return Err(KnotError::Slide);
        };
        self.rotate_overs(cross, near, far);

        debug!("slide {arc} across {cross}");
        Ok(())
    }

    fn rotate_overs(&mut self, pivot: CrossId, near: CrossId, far: CrossId) {
        let p = self.cross(pivot).clone();
        self.arena.cross_mut(far).over = p.over;
        let near = self.arena.cross_mut(near);
        near.over = if near.over == p.incoming {
            p.outgoing
        } else {
            p.incoming
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::well_known::{figure_eight, simple_knot, trefoil, unknot};

    #[test]
    fn test_twist_unknot() {
        let mut k = unknot();
        let a = k.start();
        let c = k.twist_left(a);
        assert_eq!(k.arc(a).start(), Some(c));
        assert_eq!(k.arc(a).stop(), Some(c));
        assert_eq!(k.cross(c).over(), a);
        assert_eq!(k.to_string(), "L1 A1{L1} L1");

        let mut k = unknot();
        k.twist_right(a);
        assert_eq!(k.to_string(), "R1 A1{R1} R1");
    }

    #[test]
    fn test_twist_twice() {
        let mut k = unknot();
        k.twist_left(k.start());
        k.twist_left(k.start());
        assert_eq!(k.to_string(), "L1 A1{L1, L2} L2 A2 L1");
    }

    #[test]
    fn test_twist_mixed() {
        let mut k = unknot();
        k.twist_left(k.start());
        k.twist_right(k.start());
        assert_eq!(k.to_string(), "L1 A1{L1} R2 A2{R2} L1");
    }

    #[test]
    fn test_twist_trefoil() {
        let mut k = trefoil();
        let first = k.arcs()[0];
        k.twist_left(first);
        assert_eq!(k.to_string(), "L1 A1{L2, L4} L2 A2 L3 A3{L1} L4 A4{L3} L1");
    }

    #[test]
    fn test_untwist_restores() {
        for handedness in [Handedness::Left, Handedness::Right] {
            for original in [unknot(), trefoil(), figure_eight()] {
                for arc in original.arcs() {
                    let mut k = original.clone();
                    let c = k.twist(arc, handedness);
                    k.untwist(c).unwrap();
                    assert_eq!(k, original);
                }
            }
        }
    }

    #[test]
    fn test_untwist_first_of_two() {
        let mut k = unknot();
        let first = k.twist_left(k.start());
        k.twist_right(k.start());

        k.untwist(first).unwrap();
        assert_eq!(k.size(), 1);
        assert_eq!(k.to_string(), "R1 A1{R1} R1");
    }

    #[test]
    fn test_untwist_rejects_real_crossing() {
        let mut k = trefoil();
        let c = k.crosses()[0];
        assert_eq!(k.untwist(c), Err(KnotError::Untwist));
        assert_eq!(k, trefoil());
    }

    #[test]
    fn test_poke() {
        let mut k = trefoil();
        let arcs = k.arcs();
        let (c1, c2) = k.poke(arcs[1], arcs[0]);

        assert_eq!(k.size(), 5);
        assert_eq!(k.cross(c1).over(), arcs[1]);
        assert_eq!(k.cross(c2).over(), arcs[1]);
        assert_eq!(k.cross(c1).incoming(), arcs[0]);
        assert_eq!(k.next(arcs[0]), k.cross(c1).outgoing());
        assert_eq!(k.next(k.cross(c2).outgoing()), arcs[1]);
    }

    #[test]
    fn test_poke_unknot() {
        let mut k = unknot();
        let a = k.start();
        let (c1, c2) = k.poke(a, a);

        assert_eq!(k.size(), 2);
        assert_eq!(k.arcs().len(), 2);
        assert_eq!(k.arc(a).start(), Some(c2));
        assert_eq!(k.arc(a).stop(), Some(c1));
        assert_eq!(k.cross(c2).outgoing(), a);
    }

    #[test]
    fn test_slide_twice_restores() {
        let original = trefoil();
        let arcs = original.arcs();
        let crosses = original.crosses();

        let mut k = original.clone();
        k.slide(arcs[0], crosses[0]).unwrap();
        assert_ne!(k, original);
        assert_eq!(k.cross(crosses[1]).over(), arcs[0]);
        k.slide(arcs[0], crosses[0]).unwrap();
        assert_eq!(k, original);
    }

    #[test]
    fn test_slide_from_under_side() {
        let original = trefoil();
        let arcs = original.arcs();
        let crosses = original.crosses();

        let mut k = original.clone();
        k.slide(arcs[0], crosses[1]).unwrap();
        assert_eq!(k.cross(crosses[0]).over(), arcs[0]);
        assert_eq!(k.cross(crosses[1]).over(), arcs[2]);
        assert_eq!(k.to_string(), "L1 A1{L1, L3} L2 A2 L3 A3{L2} L1");
        k.slide(arcs[0], crosses[1]).unwrap();
        assert_eq!(k, original);
    }

    #[test]
    fn test_slide_twice_restores_everywhere() {
        for n in 3..7 {
            let original = simple_knot(n);
            for arc in original.arcs() {
                for cross in original.crosses() {
                    let mut k = original.clone();
                    if k.slide(arc, cross).is_ok() {
                        k.slide(arc, cross).unwrap();
                    }
                    assert_eq!(k, original, "slide {arc} across {cross}");
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "dangling cross handle")]
    fn test_untwist_twice_panics() {
        let mut k = trefoil();
        let c = k.twist_left(k.start());
        k.untwist(c).unwrap();
        let _ = k.untwist(c);
    }

    #[test]
    fn test_slide_errors() {
        let mut k = unknot();
        let a = k.start();
        assert_eq!(k.slide(a, CrossId::new(0)), Err(KnotError::Slide));

        let mut k = figure_eight();
        let arcs = k.arcs();
        let crosses = k.crosses();
        assert_eq!(k.slide(arcs[0], crosses[2]), Err(KnotError::Slide));
        assert_eq!(k, figure_eight());
    }
}
