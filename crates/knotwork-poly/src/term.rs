//! Monomials with integer coefficients.
//!
//! An indeterminate vector holds one exponent per variable slot. Vectors of
//! different lengths are compared as if the shorter one were padded with
//! zeros, so `[1]` and `[1, 0]` name the same monomial.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::PolyError;
use crate::script::{subscript, superscript};

/// Variable names used when a vector has at most three slots.
const SIMPLE_NAMES: [char; 3] = ['x', 'y', 'z'];

/// The exponent vector of a single term.
///
/// Exponents may be negative. Trailing zeros are allowed and ignored by
/// equality and ordering, but they do affect how variables are named
/// when printed: up to three slots print as `x`, `y`, `z`, longer vectors
/// print every variable as `xₙ`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Exponents(SmallVec<[i64; 4]>);

impl Exponents {
    /// Creates an exponent vector from a slice.
    #[must_use]
    pub fn new(exps: &[i64]) -> Self {
        Self(SmallVec::from_slice(exps))
    }

    /// Creates the empty vector (the monomial 1).
    #[must_use]
    pub fn one() -> Self {
        Self(SmallVec::new())
    }

    /// Creates the monomial x_i in a vector of `num_vars` slots.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable {i} out of range for {num_vars} slots");
        let mut exps = SmallVec::from_elem(0, num_vars);
        exps[i] = 1;
        Self(exps)
    }

    /// Returns the number of slots, including trailing zeros.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the exponent of variable i (zero past the end).
    #[must_use]
    pub fn exponent(&self, i: usize) -> i64 {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// Returns the raw slots.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Multiplies two monomials (adds exponents).
    ///
    /// The result is as long as the longer operand.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let (long, short) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut exps = long.0.clone();
        for (e, s) in exps.iter_mut().zip(short.0.iter()) {
            *e += s;
        }
        Self(exps)
    }

    /// Compares lexicographically, slot by slot, padding with zeros.
    #[must_use]
    pub fn cmp_lex(&self, other: &Self) -> Ordering {
        let n = self.len().max(other.len());
        (0..n)
            .map(|i| self.exponent(i).cmp(&other.exponent(i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for Exponents {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_lex(other) == Ordering::Equal
    }
}

impl Eq for Exponents {}

impl From<Vec<i64>> for Exponents {
    fn from(exps: Vec<i64>) -> Self {
        Self(SmallVec::from_vec(exps))
    }
}

impl fmt::Display for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.len() <= SIMPLE_NAMES.len();
        let mut out = String::new();

        for (i, &e) in self.0.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if simple {
                out.push(SIMPLE_NAMES[i]);
            } else {
                // slot counts never approach i64::MAX
                #[allow(clippy::cast_possible_wrap)]
                let index = i as i64;
                out.push('x');
                out.push_str(&subscript(index));
            }
            if e != 1 {
                out.push_str(&superscript(e));
            }
        }

        if out.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{out}")
        }
    }
}

/// A single term: an exponent vector scaled by an integer coefficient.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Exponent per indeterminate.
    #[serde(rename = "ind", default)]
    pub exponents: Exponents,
    /// The coefficient.
    #[serde(rename = "const", default)]
    pub coeff: i64,
}

impl Term {
    /// Creates a term from exponents and a coefficient.
    #[must_use]
    pub fn new(exps: &[i64], coeff: i64) -> Self {
        Self {
            exponents: Exponents::new(exps),
            coeff,
        }
    }

    /// Creates a constant term (no indeterminates).
    #[must_use]
    pub fn constant(coeff: i64) -> Self {
        Self {
            exponents: Exponents::one(),
            coeff,
        }
    }

    /// Returns true if the term has no non-zero exponent.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.exponents.is_one()
    }

    /// Multiplies two terms: exponents add, coefficients multiply.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            exponents: self.exponents.mul(&other.exponents),
            coeff: self.coeff * other.coeff,
        }
    }

    /// Reports whether `self` sorts before `other` in a polynomial.
    ///
    /// Higher exponents come first, compared slot by slot.
    #[must_use]
    pub fn precedes(&self, other: &Self) -> bool {
        self.exponents.cmp_lex(&other.exponents) == Ordering::Greater
    }

    /// Decodes a term from `{"const": c, "ind": [..]}`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Json`] if the input is not a valid term.
    pub fn from_json(json: &str) -> Result<Self, PolyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes the term as `{"ind": [..], "const": c}`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PolyError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeff == 0 {
            return write!(f, "0");
        }

        let ind = self.exponents.to_string();
        if self.coeff == 1 {
            write!(f, "{ind}")
        } else if ind == "1" {
            write!(f, "{}", self.coeff)
        } else {
            write!(f, "{}{ind}", self.coeff)
        }
    }
}
