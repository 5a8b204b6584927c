//! Spiral traversal.
//!
//! The order is the one produced by transposing the matrix and then
//! repeatedly emitting the first row and rotating the remainder
//! (transpose, reverse rows). On the matrix itself that reads down the
//! first column, along the bottom row, up the last column, back along the
//! top row, and continues inward.
//!
//! Instead of rebuilding the remainder on every turn, [`Spiral`] keeps the
//! unvisited region as four shrinking bounds over the original buffer.

use std::iter::FusedIterator;

use crate::data::Matrix;

/// Collect the spiral order of `matrix`.
///
/// # Examples
///
/// ```
/// use spiral_grid::{Matrix, spiral};
///
/// let m = Matrix::from_rows([[1i64, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
/// assert_eq!(spiral(&m), vec![1, 4, 7, 8, 9, 6, 3, 2, 5]);
/// ```
pub fn spiral(matrix: &Matrix) -> Vec<i64> {
    matrix.spiral_iter().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    /// Down the left column.
    Down,
    /// Left to right along the bottom row.
    Across,
    /// Up the right column.
    Up,
    /// Right to left along the top row.
    Back,
}

/// Lazy spiral walk over a [`Matrix`].
///
/// The unvisited region is always the rectangle of rows `top..bottom` and
/// columns `left..right`; it is non-empty whenever `remaining > 0`.
#[derive(Debug, Clone)]
pub struct Spiral<'a> {
    matrix: &'a Matrix,
    top: usize,
    bottom: usize,
    left: usize,
    right: usize,
    leg: Leg,
    step: usize,
    remaining: usize,
}

impl<'a> Spiral<'a> {
    pub(crate) fn new(matrix: &'a Matrix) -> Self {
        Self {
            matrix,
            top: 0,
            bottom: matrix.rows(),
            left: 0,
            right: matrix.cols(),
            leg: Leg::Down,
            step: 0,
            remaining: matrix.len(),
        }
    }

    fn emit(&mut self, row: usize, col: usize) -> i64 {
        self.step += 1;
        self.remaining -= 1;
        self.matrix.at(row, col)
    }

    fn turn(&mut self, leg: Leg) {
        self.leg = leg;
        self.step = 0;
    }
}

impl Iterator for Spiral<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if self.remaining == 0 {
                return None;
            }

            let height = self.bottom - self.top;
            let width = self.right - self.left;

            match self.leg {
                Leg::Down => {
                    if self.step < height {
                        return Some(self.emit(self.top + self.step, self.left));
                    }
                    self.left += 1;
                    self.turn(Leg::Across);
                }
                Leg::Across => {
                    if self.step < width {
                        return Some(self.emit(self.bottom - 1, self.left + self.step));
                    }
                    self.bottom -= 1;
                    self.turn(Leg::Up);
                }
                Leg::Up => {
                    if self.step < height {
                        return Some(self.emit(self.bottom - 1 - self.step, self.right - 1));
                    }
                    self.right -= 1;
                    self.turn(Leg::Back);
                }
                Leg::Back => {
                    if self.step < width {
                        return Some(self.emit(self.top, self.right - 1 - self.step));
                    }
                    self.top += 1;
                    self.turn(Leg::Down);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Spiral<'_> {}

impl FusedIterator for Spiral<'_> {}
