use std::fmt;
use std::str::FromStr;

use crate::core::{Spiral, parse_matrix};
use crate::error::{GridError, Result};

/// A rectangular matrix of integers.
///
/// Elements live in one row-major buffer; every row has exactly
/// [`cols`](Matrix::cols) elements. A matrix is either `0 x 0` or has
/// at least one element in every row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Matrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// The `0 x 0` matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a matrix from nested rows, rejecting empty and ragged rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use spiral_grid::{GridError, Matrix};
    ///
    /// let m = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]]).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 2));
    ///
    /// let ragged = Matrix::from_rows(vec![vec![1i64, 2], vec![3]]);
    /// assert_eq!(
    ///     ragged,
    ///     Err(GridError::Ragged { row: 1, expected: 2, found: 1 })
    /// );
    /// ```
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: AsRef<[i64]>,
    {
        let mut data = Vec::new();
        let mut cols = None;
        let mut count = 0;

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if row.is_empty() {
                return Err(GridError::EmptyRow { row: index });
            }
            match cols {
                None => cols = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(GridError::Ragged {
                        row: index,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            data.extend_from_slice(row);
            count += 1;
        }

        Ok(Self {
            data,
            rows: count,
            cols: cols.unwrap_or(0),
        })
    }

    /// Build a matrix whose columns are the given sequences.
    ///
    /// Equivalent to `Matrix::from_rows(columns)?.transpose()`.
    pub fn from_columns<R>(columns: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: AsRef<[i64]>,
    {
        Ok(Self::from_rows(columns)?.transpose())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[i64]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    pub fn iter_rows(&self) -> Rows<'_> {
        Rows {
            matrix: self,
            next: 0,
        }
    }

    /// Exchange rows and columns.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[row * self.cols + col]);
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Lazily walk the matrix in spiral order. See [`crate::spiral`].
    pub fn spiral_iter(&self) -> Spiral<'_> {
        Spiral::new(self)
    }

    /// Row-major view of every element.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Unchecked element access for callers that already hold valid bounds.
    pub(crate) fn at(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }
}

/// Iterator over the rows of a [`Matrix`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    matrix: &'a Matrix,
    next: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [i64];

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.matrix.row(self.next)?;
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matrix.rows - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// Rows joined by `\n`, fields joined by `|`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.iter_rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Matrix {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        parse_matrix(s)
    }
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows([[1i64, 2, 3], [4, 5, 6]]).unwrap()
    }

    #[test]
    fn from_rows_records_shape() {
        let m = sample();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.len(), 6);
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn from_rows_empty_input_is_empty_matrix() {
        let m = Matrix::from_rows(Vec::<Vec<i64>>::new()).unwrap();
        assert_eq!(m, Matrix::empty());
        assert!(m.is_empty());
        assert_eq!((m.rows(), m.cols()), (0, 0));
    }

    #[test]
    fn from_rows_rejects_empty_row() {
        let err = Matrix::from_rows(vec![vec![1i64], vec![]]).unwrap_err();
        assert_eq!(err, GridError::EmptyRow { row: 1 });
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Matrix::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6], vec![7, 8]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn get_and_row_bounds() {
        let m = sample();
        assert_eq!(m.get(1, 2), Some(6));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.row(0), Some(&[1, 2, 3][..]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn iter_rows_is_exact() {
        let m = sample();
        let rows = m.iter_rows();
        assert_eq!(rows.len(), 2);
        let collected: Vec<_> = rows.collect();
        assert_eq!(collected, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
    }

    #[test]
    fn transpose_swaps_shape() {
        let t = sample().transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn from_columns_is_transposed_from_rows() {
        let m = Matrix::from_columns([[1i64, 4], [2, 5], [3, 6]]).unwrap();
        assert_eq!(m, sample());
    }

    #[test]
    fn display_is_pipe_delimited() {
        assert_eq!(sample().to_string(), "1|2|3\n4|5|6");
        assert_eq!(Matrix::empty().to_string(), "");
    }

    #[test]
    fn from_str_parses_display_output() {
        let m: Matrix = "1|2|3\n4|5|6".parse().unwrap();
        assert_eq!(m, sample());
    }
}
