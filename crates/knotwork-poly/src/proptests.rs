//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::Polynomial;
    use crate::term::Term;

    // Strategy for generating small terms over at most three variables
    fn small_term() -> impl Strategy<Value = Term> {
        (proptest::collection::vec(-3i64..4i64, 0..=3), -20i64..20i64)
            .prop_map(|(exps, coeff)| Term::new(&exps, coeff))
    }

    // Strategy for generating small, uncompacted polynomials
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_term(), 0..=6).prop_map(Polynomial::new)
    }

    proptest! {
        #[test]
        fn compact_idempotent(p in small_poly()) {
            let once = p.compact();
            let twice = once.compact();
            prop_assert_eq!(once.terms(), twice.terms());
        }

        #[test]
        fn compact_is_sorted_and_nonzero(p in small_poly()) {
            let c = p.compact();
            for t in c.terms() {
                prop_assert!(t.coeff != 0);
            }
            for w in c.terms().windows(2) {
                prop_assert!(w[0].precedes(&w[1]));
            }
        }

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_term_count_bound(a in small_poly(), b in small_poly()) {
            prop_assert!((&a + &b).len() <= a.len() + b.len());
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.multiply(&(&b + &c));
            let right = &a.multiply(&b) + &a.multiply(&c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn additive_inverse(a in small_poly()) {
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn mul_identity(a in small_poly()) {
            prop_assert_eq!(a.multiply(&Polynomial::one()), a.clone());
            prop_assert!(a.multiply(&Polynomial::zero()).is_zero());
        }

        #[test]
        fn json_round_trip(p in small_poly()) {
            let json = p.to_json().unwrap();
            let back = Polynomial::from_json(&json).unwrap();
            prop_assert_eq!(back.terms(), p.terms());
        }
    }
}
