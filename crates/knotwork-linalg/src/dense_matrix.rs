//! Dense matrices over an exact ring.
//!
//! Entries are stored row-major together with a row stride (the column
//! count). Determinants use cofactor expansion along the first row, so
//! no division is ever needed and polynomial entries stay exact.

use std::fmt;
use std::ops::{Index, IndexMut};

use log::debug;
use serde::{Deserialize, Serialize};

use knotwork_poly::{Polynomial, Ring};

use crate::cofactor::CofactorSelection;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix<R> {
    /// Matrix entries, top-left to bottom-right, row by row.
    elements: Vec<R>,
    /// Length of each row.
    stride: usize,
}

impl<R: Ring> Matrix<R> {
    /// Creates a matrix from row-major entries and a row stride.
    ///
    /// # Panics
    ///
    /// Panics if the entries do not fill a whole number of rows.
    #[must_use]
    pub fn new(elements: Vec<R>, stride: usize) -> Self {
        if stride == 0 {
            assert!(elements.is_empty(), "matrix with zero stride must be empty");
        } else {
            assert_eq!(
                elements.len() % stride,
                0,
                "{} elements do not fill rows of {stride}",
                elements.len()
            );
        }
        Self { elements, stride }
    }

    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            elements: vec![R::zero(); num_rows * num_cols],
            stride: num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        let stride = rows.first().map_or(0, Vec::len);
        let num_rows = rows.len();
        let elements: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(elements.len(), num_rows * stride, "ragged rows");
        Self { elements, stride }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        if self.stride == 0 {
            0
        } else {
            self.elements.len() / self.stride
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.stride
    }

    /// Returns the row stride.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the row-major entries.
    #[must_use]
    pub fn elements(&self) -> &[R] {
        &self.elements
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.stride * self.stride == self.elements.len()
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows() && col < self.stride {
            Some(&self.elements[row * self.stride + col])
        } else {
            None
        }
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let (rows, cols) = (self.num_rows(), self.num_cols());
        let mut elements = Vec::with_capacity(self.elements.len());
        for j in 0..cols {
            for i in 0..rows {
                elements.push(self[(i, j)].clone());
            }
        }
        Self {
            elements,
            stride: rows,
        }
    }

    /// Returns a copy with row `row` and column `col` removed.
    #[must_use]
    pub fn minor(&self, row: usize, col: usize) -> Self {
        let elements = self
            .elements
            .iter()
            .enumerate()
            .filter(|(k, _)| k / self.stride != row && k % self.stride != col)
            .map(|(_, e)| e.clone())
            .collect();

        Self {
            elements,
            stride: self.stride - 1,
        }
    }

    /// Returns the minor chosen by `selection`.
    #[must_use]
    pub fn cofactor_with(&self, selection: &CofactorSelection) -> Self {
        let (row, col) = selection.select(self.stride);
        debug!("cofactor ({row}, {col}) of {size}x{size} matrix", size = self.stride);
        self.minor(row, col)
    }

    /// Picks a row and a column at random and returns that minor.
    #[must_use]
    pub fn any_cofactor(&self) -> Self {
        self.cofactor_with(&CofactorSelection::default())
    }

    /// Computes the determinant by Laplace expansion along row 0.
    ///
    /// Cost grows factorially with the size; callers bound the input.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square or is empty.
    #[must_use]
    pub fn determinant(&self) -> R {
        self.assert_determinant_shape();
        self.laplace()
    }

    pub(crate) fn assert_determinant_shape(&self) {
        assert!(self.is_square(), "determinant of non-square matrix");
        assert!(self.stride != 0, "determinant of empty matrix");
    }

    /// Signed product of entry (0, i) and its minor's determinant.
    pub(crate) fn expansion_term(&self, i: usize) -> R {
        let term = self.elements[i].clone() * self.minor(0, i).laplace();
        if i % 2 == 1 {
            -term
        } else {
            term
        }
    }

    fn laplace(&self) -> R {
        if self.stride == 1 {
            return self.elements[0].clone();
        }

        (0..self.stride).fold(R::zero(), |acc, i| acc + self.expansion_term(i))
    }
}

impl<R> Index<(usize, usize)> for Matrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.elements[row * self.stride + col]
    }
}

impl<R> IndexMut<(usize, usize)> for Matrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.elements[row * self.stride + col]
    }
}

impl fmt::Display for Matrix<Polynomial> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.elements.is_empty() || self.stride == 0 {
            return write!(f, "[]");
        }

        let cells: Vec<String> = self
            .elements
            .iter()
            .map(|p| {
                if p.len() > 1 {
                    format!("({p})")
                } else {
                    p.to_string()
                }
            })
            .collect();

        let mut widths = vec![0; self.stride];
        for (i, s) in cells.iter().enumerate() {
            let w = &mut widths[i % self.stride];
            *w = (*w).max(s.chars().count());
        }

        let rows: Vec<String> = cells
            .chunks(self.stride)
            .map(|row| {
                row.iter()
                    .zip(&widths)
                    .map(|(s, &w)| format!("{s:>w$}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        if rows.len() == 1 {
            return write!(f, "[{}]", rows[0]);
        }

        let last = rows.len() - 1;
        let framed: Vec<String> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| match i {
                0 => format!("⎡{row}⎤"),
                i if i == last => format!("⎣{row}⎦"),
                _ => format!("⎢{row}⎥"),
            })
            .collect();

        write!(f, "{}", framed.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knotwork_poly::Term;

    fn unit(i: usize, n: usize) -> Polynomial {
        let mut exps = vec![0; n];
        exps[i] = 1;
        Term::new(&exps, 1).into()
    }

    fn units(n: usize, stride: usize) -> Matrix<Polynomial> {
        Matrix::new((0..n).map(|i| unit(i, n)).collect(), stride)
    }

    fn constants(values: &[i64], stride: usize) -> Matrix<Polynomial> {
        Matrix::new(values.iter().map(|&c| Polynomial::constant(c)).collect(), stride)
    }

    #[test]
    fn test_zeros() {
        let m: Matrix<i64> = Matrix::zeros(3, 4);
        assert_eq!(m.num_rows(), 3);
        assert_eq!(m.num_cols(), 4);
        assert!(!m.is_square());
        assert!(m.elements().iter().all(|&e| e == 0));
    }

    #[test]
    fn test_det_single() {
        let m = Matrix::new(vec![Polynomial::from(Term::new(&[1], 1))], 1);
        assert_eq!(m.determinant().to_string(), "x");
    }

    #[test]
    fn test_det_symbolic() {
        assert_eq!(units(4, 2).determinant().to_string(), "x₀x₃ - x₁x₂");
        assert_eq!(
            units(9, 3).determinant().to_string(),
            "x₀x₄x₈ - x₀x₅x₇ - x₁x₃x₈ + x₁x₅x₆ + x₂x₃x₇ - x₂x₄x₆"
        );
    }

    #[test]
    fn test_det_singular() {
        let m = constants(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 3);
        assert_eq!(m.determinant().to_string(), "0");
    }

    #[test]
    fn test_det_integers() {
        let m = Matrix::from_rows(vec![vec![3i64, 8], vec![4, 6]]);
        assert_eq!(m.determinant(), -14);

        let m = Matrix::from_rows(vec![vec![2i64, 0, 1], vec![1, 3, 2], vec![1, 1, 1]]);
        // 2*(3-2) - 0 + 1*(1-3) = 0
        assert_eq!(m.determinant(), 0);
    }

    #[test]
    #[should_panic(expected = "empty matrix")]
    fn test_det_empty_panics() {
        let m: Matrix<Polynomial> = Matrix::new(Vec::new(), 0);
        let _ = m.determinant();
    }

    #[test]
    #[should_panic(expected = "non-square")]
    fn test_det_non_square_panics() {
        let m = constants(&[1, 2, 3, 4, 5, 6], 3);
        let _ = m.determinant();
    }

    #[test]
    fn test_minor() {
        let m = constants(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 3);
        assert_eq!(m.minor(0, 0), constants(&[5, 6, 8, 9], 2));
        assert_eq!(m.minor(1, 2), constants(&[1, 2, 7, 8], 2));
        assert_eq!(m.minor(2, 1), constants(&[1, 3, 4, 6], 2));
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]);
        let t = m.transpose();
        assert_eq!(t.num_rows(), 3);
        assert_eq!(t.num_cols(), 2);
        assert_eq!(t[(0, 1)], 4);
        assert_eq!(t[(2, 0)], 3);
    }

    #[test]
    fn test_string() {
        let empty: Matrix<Polynomial> = Matrix::new(Vec::new(), 0);
        assert_eq!(empty.to_string(), "[]");

        let entries = vec![
            Polynomial::constant(0),
            Term::new(&[1, 0, 1], 2).into(),
            Polynomial::constant(-6),
        ];
        assert_eq!(Matrix::new(entries.clone(), 3).to_string(), "[0 2xz -6]");
        assert_eq!(Matrix::new(entries, 1).to_string(), "⎡  0⎤\n⎢2xz⎥\n⎣ -6⎦");

        let entries = vec![
            Polynomial::constant(0),
            Term::new(&[1, 0, 1], 2).into(),
            Polynomial::constant(-6),
            Polynomial::constant(-1),
            Polynomial::new(vec![Term::new(&[1, 0, 1], 2), Term::new(&[0, 1, 1], 1)]),
            Polynomial::constant(8),
        ];
        assert_eq!(
            Matrix::new(entries.clone(), 3).to_string(),
            "⎡ 0        2xz -6⎤\n⎣-1 (2xz + yz)  8⎦"
        );
        assert_eq!(
            Matrix::new(entries, 2).to_string(),
            "⎡         0 2xz⎤\n⎢        -6  -1⎥\n⎣(2xz + yz)   8⎦"
        );

        assert_eq!(units(4, 2).to_string(), "⎡x₀ x₁⎤\n⎣x₂ x₃⎦");
    }
}
