//! Sparse multivariate polynomials with integer coefficients.
//!
//! Terms are stored as given. Nothing requires a polynomial to be compact:
//! duplicate indeterminates and zero coefficients are valid input anywhere.
//! Every arithmetic result is compacted.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::PolyError;
use crate::ring::Ring;
use crate::term::Term;

/// A sparse polynomial: an unordered list of terms.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates a polynomial from raw terms, without compacting.
    #[must_use]
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Creates the zero polynomial (no terms).
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1)
    }

    /// Creates a single constant term.
    ///
    /// A zero constant is kept as an explicit `0` term.
    #[must_use]
    pub fn constant(c: i64) -> Self {
        Self {
            terms: vec![Term::constant(c)],
        }
    }

    /// Returns the stored terms, in storage order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if no terms are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if every term cancels out.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.compact().is_empty()
    }

    /// Multiplies every term by a single term, without compacting.
    #[must_use]
    pub fn mul_term(&self, t: &Term) -> Self {
        Self {
            terms: self.terms.iter().map(|x| x.mul(t)).collect(),
        }
    }

    /// Multiplies two polynomials term by term, then compacts.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.len() * other.len());
        for t in &other.terms {
            terms.extend(self.terms.iter().map(|x| x.mul(t)));
        }
        Self { terms }.compact()
    }

    /// Sums two polynomials, then compacts.
    #[must_use]
    pub fn sum(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.len() + other.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&other.terms);
        Self { terms }.compact()
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term {
                    exponents: t.exponents.clone(),
                    coeff: -t.coeff,
                })
                .collect(),
        }
    }

    /// Returns the canonical form.
    ///
    /// Terms are sorted highest-first, terms with equal indeterminates are
    /// merged by summing coefficients, and zero coefficients are dropped.
    /// When merged vectors differ only in trailing zeros, the longer one is
    /// kept so that printing stays stable.
    #[must_use]
    pub fn compact(&self) -> Self {
        let mut sorted = self.terms.clone();
        sorted.sort_by(|a, b| b.exponents.cmp_lex(&a.exponents));

        let mut terms: Vec<Term> = Vec::with_capacity(sorted.len());
        for t in sorted {
            match terms.last_mut() {
                Some(last) if last.exponents == t.exponents => {
                    last.coeff += t.coeff;
                    if t.exponents.len() > last.exponents.len() {
                        last.exponents = t.exponents;
                    }
                }
                _ => terms.push(t),
            }
        }
        terms.retain(|t| t.coeff != 0);

        Self { terms }
    }

    /// Returns the scalar value if the compacted polynomial is constant.
    ///
    /// The zero polynomial yields `Some(0)`; a single constant term yields
    /// its coefficient; anything with an indeterminate yields `None`.
    #[must_use]
    pub fn constant_value(&self) -> Option<i64> {
        let compact = self.compact();
        match compact.terms.as_slice() {
            [] => Some(0),
            [t] if t.is_constant() => Some(t.coeff),
            _ => None,
        }
    }

    /// Decodes a polynomial from a JSON array of terms.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Json`] if the input is not an array of terms.
    pub fn from_json(json: &str) -> Result<Self, PolyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes the polynomial as a JSON array of terms.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PolyError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.compact().terms == other.compact().terms
    }
}

impl Eq for Polynomial {}

impl From<Term> for Polynomial {
    fn from(t: Term) -> Self {
        Self { terms: vec![t] }
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.sum(&rhs)
    }
}

impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &'a Polynomial) -> Polynomial {
        self.sum(rhs)
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.sum(&rhs.negate())
    }
}

impl<'a> Sub<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &'a Polynomial) -> Polynomial {
        self.sum(&rhs.negate())
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<'a> Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &'a Polynomial) -> Polynomial {
        self.multiply(rhs)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}

impl Ring for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn one() -> Self {
        Polynomial::one()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();

        for t in self.terms.iter().filter(|t| t.coeff != 0) {
            let negative = t.coeff < 0;
            let magnitude = Term {
                exponents: t.exponents.clone(),
                coeff: t.coeff.abs(),
            };

            if out.is_empty() {
                if negative {
                    out.push('-');
                }
            } else {
                out.push_str(if negative { " - " } else { " + " });
            }
            out.push_str(&magnitude.to_string());
        }

        if out.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{out}")
        }
    }
}
