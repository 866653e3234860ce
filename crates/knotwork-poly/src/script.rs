//! Unicode subscript and superscript rendering of integers.
//!
//! Subscripts name indeterminates past the third (`x₃`), superscripts
//! carry exponents (`x²`, `x¯¹`).

/// Subscript digits 0-9 followed by the subscript minus sign.
const SUBSCRIPT: [char; 11] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉', '₋'];

/// Superscript digits 0-9 followed by the macron used as a minus sign.
const SUPERSCRIPT: [char; 11] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹', '¯'];

/// Renders `n` with subscript digits.
#[must_use]
pub fn subscript(n: i64) -> String {
    if n == 0 {
        return SUBSCRIPT[0].to_string();
    }
    render(n, &SUBSCRIPT)
}

/// Renders `n` with superscript digits.
///
/// Zero renders as the empty string; callers never print a zero exponent.
#[must_use]
pub fn superscript(n: i64) -> String {
    render(n, &SUPERSCRIPT)
}

fn render(n: i64, table: &[char; 11]) -> String {
    let mut digits = Vec::new();
    let mut rest = n.unsigned_abs();
    while rest > 0 {
        // rest % 10 < 10, always a valid index
        #[allow(clippy::cast_possible_truncation)]
        digits.push(table[(rest % 10) as usize]);
        rest /= 10;
    }
    if n < 0 {
        digits.push(table[10]);
    }
    digits.iter().rev().collect()
}
