//! Property-based tests for knot diagrams.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::coding::{decode, Direction, Directions};
    use crate::knot::{Handedness, Knot};
    use crate::well_known::{figure_eight, simple_knot, trefoil, unknot};

    // Strategy for a base diagram together with its determinant
    fn base_knot() -> impl Strategy<Value = (Knot, u64)> {
        prop_oneof![
            Just((unknot(), 1)),
            Just((trefoil(), 3)),
            Just((figure_eight(), 5)),
            Just((simple_knot(5), 11)),
        ]
    }

    // Strategy for a sequence of kinks: (arc selector, handedness)
    fn twists() -> impl Strategy<Value = Vec<(usize, Handedness)>> {
        proptest::collection::vec(
            (any::<usize>(), prop_oneof![Just(Handedness::Left), Just(Handedness::Right)]),
            0..6,
        )
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Forward),
            Just(Direction::Left),
            Just(Direction::Under),
            Just(Direction::Right),
        ]
    }

    // Mirrors a walk across the starting heading
    fn mirror(steps: &[Direction]) -> Vec<Direction> {
        steps
            .iter()
            .map(|&d| match d {
                Direction::Left => Direction::Right,
                Direction::Right => Direction::Left,
                other => other,
            })
            .collect()
    }

    // Counter-clockwise rectangular loop of `2 * (width + height)` steps
    fn rectangle(width: usize, height: usize) -> Vec<Direction> {
        let mut steps = Vec::new();
        for side in [width, height, width, height] {
            steps.extend(std::iter::repeat(Direction::Forward).take(side - 1));
            steps.push(Direction::Left);
        }
        steps
    }

    // Strategy for walks that close up, optionally mirrored
    fn closed_walk() -> impl Strategy<Value = Vec<Direction>> {
        let parse = |s: &str| s.parse::<Directions>().unwrap().as_slice().to_vec();
        let fixtures = prop_oneof![Just(parse("FLLLURRR")), Just(parse("LFLFFLLFLFLLUFLF"))];
        let walks = prop_oneof![
            (1..8usize, 1..8usize).prop_map(|(w, h)| rectangle(w, h)),
            fixtures,
        ];
        (walks, any::<bool>()).prop_map(|(walk, flip)| if flip { mirror(&walk) } else { walk })
    }

    proptest! {
        #[test]
        fn twists_keep_determinant((base, det) in base_knot(), steps in twists()) {
            let mut k = base;
            for (selector, handedness) in steps {
                let arcs = k.arcs();
                k.twist(arcs[selector % arcs.len()], handedness);
            }
            prop_assert_eq!(k.determinant(), det);
        }

        #[test]
        fn untwist_in_reverse_order_restores((base, _) in base_knot(), steps in twists()) {
            let mut k = base.clone();
            let mut kinks = Vec::new();
            for (selector, handedness) in steps {
                let arcs = k.arcs();
                kinks.push(k.twist(arcs[selector % arcs.len()], handedness));
            }
            for c in kinks.into_iter().rev() {
                prop_assert!(k.untwist(c).is_ok());
            }
            prop_assert_eq!(k, base);
        }

        #[test]
        fn reverse_twice_is_identity((base, det) in base_knot(), steps in twists()) {
            let mut k = base;
            for (selector, handedness) in steps {
                let arcs = k.arcs();
                k.twist(arcs[selector % arcs.len()], handedness);
            }
            let before = k.clone();
            k.reverse();
            prop_assert_eq!(k.size(), before.size());
            prop_assert_eq!(k.determinant(), det);
            k.reverse();
            prop_assert_eq!(k, before);
        }

        #[test]
        fn arcs_and_crosses_agree((base, _) in base_knot(), steps in twists()) {
            let mut k = base;
            for (selector, handedness) in steps {
                let arcs = k.arcs();
                k.twist(arcs[selector % arcs.len()], handedness);
            }
            let arcs = k.arcs();
            let crosses = k.crosses();
            for (i, &c) in crosses.iter().enumerate() {
                prop_assert_eq!(k.cross(c).outgoing(), arcs[i]);
                prop_assert_eq!(k.next(k.prev(arcs[i])), arcs[i]);
            }
        }

        #[test]
        fn decode_is_deterministic(steps in proptest::collection::vec(direction(), 0..24)) {
            let first = decode(&steps);
            prop_assert_eq!(&first, &decode(&steps));
            if let Ok(grid) = first {
                prop_assert_eq!(grid.len() + grid.crossings(), steps.len());
            }
        }

        #[test]
        fn closed_walk_fills_one_cell_per_step(steps in closed_walk()) {
            prop_assert!(!steps.is_empty());
            let grid = decode(&steps);
            prop_assert!(grid.is_ok(), "{:?}", grid);
            let grid = grid.unwrap();
            prop_assert_eq!(grid.len() + grid.crossings(), steps.len());
        }
    }
}
