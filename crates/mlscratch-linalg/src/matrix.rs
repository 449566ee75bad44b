use std::ops::Index;
use std::slice::Iter;

use crate::{Error, Vector};

/// Cell generators for [`Matrix::create`].
///
/// A generator receives `(row, column)` and returns the cell value.
pub mod generator {
    /// Every cell is `0.0`.
    #[must_use]
    pub fn zeroed(_row: usize, _column: usize) -> f64 {
        0.0
    }

    /// `1.0` on the main diagonal and `0.0` elsewhere, for any shape.
    #[must_use]
    pub fn diagonal(row: usize, column: usize) -> f64 {
        if row == column { 1.0 } else { 0.0 }
    }
}

/// A sequence of row vectors.
///
/// Matrices built by [`Matrix::create`] are always rectangular. Matrices
/// built from caller-supplied rows are trusted to be rectangular; the column
/// count is taken from the first row and reductions report ragged rows as
/// [`Error::DimensionMismatch`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matrix {
    rows: Vec<Vector>,
}

impl Matrix {
    #[must_use]
    pub fn new(rows: Vec<Vector>) -> Self {
        Self { rows }
    }

    /// Builds a matrix with `rows` rows and `columns` columns by calling
    /// `generator(row, column)` for every cell.
    ///
    /// Either dimension being zero yields an empty matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlscratch_linalg::{Matrix, matrix::generator};
    ///
    /// let m = Matrix::create(3, 2, |row, column| (row * 10 + column) as f64);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[1].as_slice(), &[10.0, 11.0, 12.0]);
    ///
    /// assert!(Matrix::create(0, 4, generator::zeroed).is_empty());
    /// ```
    #[must_use]
    pub fn create<F>(columns: usize, rows: usize, mut generator: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        log::trace!("creating {rows}x{columns} matrix");
        if rows == 0 || columns == 0 {
            return Self::default();
        }
        let rows = (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|column| generator(row, column))
                    .collect::<Vector>()
            })
            .collect();
        Self { rows }
    }

    /// The `n`x`n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::create(n, n, generator::diagonal)
    }

    #[must_use]
    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    pub fn iter(&self) -> Iter<'_, Vector> {
        self.rows.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Column count, taken from the first row; `0` for an empty matrix.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, Vector::len)
    }

    /// `(rows, columns)`; `(0, 0)` for an empty matrix.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn push_row(&mut self, row: Vector) {
        self.rows.push(row);
    }

    /// Returns the row at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < nrows()`.
    pub fn row(&self, index: usize) -> Result<&Vector, Error> {
        self.rows.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.nrows(),
        })
    }

    /// Returns a new vector holding element `index` of every row.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < ncols()` and `index` is
    /// below the length of every row.
    pub fn column(&self, index: usize) -> Result<Vector, Error> {
        if index >= self.ncols() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.ncols(),
            });
        }
        self.rows
            .iter()
            .map(|row| {
                row.get(index).ok_or(Error::IndexOutOfBounds {
                    index,
                    len: row.len(),
                })
            })
            .collect()
    }

    /// Componentwise sum of all rows.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if the matrix has no rows
    /// - [`Error::DimensionMismatch`] if rows differ in length
    ///
    /// # Examples
    ///
    /// ```
    /// use mlscratch_linalg::{Matrix, Vector};
    ///
    /// let m = Matrix::new(vec![
    ///     Vector::from(vec![1.0, 2.0, 3.0]),
    ///     Vector::from(vec![4.0, 5.0, 6.0]),
    ///     Vector::from(vec![7.0, 8.0, 9.0]),
    /// ]);
    /// assert_eq!(m.sum_vectors().unwrap().as_slice(), &[12.0, 15.0, 18.0]);
    /// ```
    pub fn sum_vectors(&self) -> Result<Vector, Error> {
        let (first, rest) = self.rows.split_first().ok_or(Error::EmptyInput {
            operation: "matrix row sum",
        })?;
        let mut sum = first.clone();
        for row in rest {
            if row.len() != sum.len() {
                return Err(Error::DimensionMismatch {
                    expected: sum.len(),
                    actual: row.len(),
                });
            }
            for (acc, value) in sum.iter_mut().zip(row) {
                *acc += value;
            }
        }
        Ok(sum)
    }

    /// Componentwise mean of all rows.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Matrix::sum_vectors`].
    #[expect(clippy::cast_precision_loss)]
    pub fn mean_vector(&self) -> Result<Vector, Error> {
        let mut mean = self.sum_vectors()?;
        mean.scalar_multiply_in_place(1.0 / self.nrows() as f64);
        Ok(mean)
    }
}

impl From<Vec<Vector>> for Matrix {
    fn from(rows: Vec<Vector>) -> Self {
        Self::new(rows)
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::new(rows.into_iter().map(Vector::from).collect())
    }
}

impl FromIterator<Vector> for Matrix {
    fn from_iter<I: IntoIterator<Item = Vector>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Vector;
    type IntoIter = Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl Index<usize> for Matrix {
    type Output = Vector;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
            vec![10.0, 11.0, 12.0],
        ])
    }

    #[test]
    fn test_generators() {
        assert_eq!(generator::zeroed(3, 7), 0.0);
        assert_eq!(generator::diagonal(2, 2), 1.0);
        assert_eq!(generator::diagonal(2, 3), 0.0);
    }

    #[test]
    fn test_create_zeroed() {
        let m = Matrix::create(2, 2, generator::zeroed);
        assert_eq!(m, Matrix::from(vec![vec![0.0, 0.0], vec![0.0, 0.0]]));
    }

    #[test]
    fn test_create_diagonal_non_square() {
        let m = Matrix::create(4, 2, generator::diagonal);
        assert_eq!(m.shape(), (2, 4));
        assert_eq!(m[0].as_slice(), &[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(m[1].as_slice(), &[0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(5);
        assert_eq!(m.shape(), (5, 5));
        for (i, row) in m.iter().enumerate() {
            assert_eq!(row.sum(), 1.0);
            assert_eq!(row[i], 1.0);
        }
    }

    #[test]
    fn test_create_passes_row_then_column() {
        let mut calls = vec![];
        let _ = Matrix::create(2, 3, |row, column| {
            calls.push((row, column));
            0.0
        });
        assert_eq!(
            calls,
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn test_create_empty() {
        assert_eq!(Matrix::create(0, 3, generator::zeroed).shape(), (0, 0));
        assert_eq!(Matrix::create(3, 0, generator::zeroed).shape(), (0, 0));
    }

    #[test]
    fn test_shape() {
        assert_eq!(sample().shape(), (4, 3));
        assert_eq!(Matrix::default().shape(), (0, 0));
    }

    #[test]
    fn test_row() {
        let m = sample();
        assert_eq!(m.row(1).unwrap().as_slice(), &[4.0, 5.0, 6.0]);
        assert_eq!(m.row(3).unwrap().as_slice(), &[10.0, 11.0, 12.0]);
        assert_eq!(
            m.row(4),
            Err(Error::IndexOutOfBounds { index: 4, len: 4 })
        );
        assert!(Matrix::default().row(0).is_err());
        assert!(Matrix::default().column(0).is_err());
    }

    #[test]
    fn test_column() {
        let m = sample();
        assert_eq!(m.column(0).unwrap().as_slice(), &[1.0, 4.0, 7.0, 10.0]);
        assert_eq!(m.column(2).unwrap().as_slice(), &[3.0, 6.0, 9.0, 12.0]);
        assert_eq!(
            m.column(3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_column_of_ragged_matrix() {
        let m = Matrix::from(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(m.column(0).is_ok());
        assert_eq!(
            m.column(1),
            Err(Error::IndexOutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_sum_vectors() {
        assert_eq!(
            sample().sum_vectors().unwrap().as_slice(),
            &[22.0, 26.0, 30.0]
        );
        let single = Matrix::from(vec![vec![1.0, 2.0]]);
        assert_eq!(single.sum_vectors().unwrap().as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_sum_vectors_errors() {
        assert!(matches!(
            Matrix::default().sum_vectors(),
            Err(Error::EmptyInput { .. })
        ));
        let ragged = Matrix::from(vec![vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(
            ragged.sum_vectors(),
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_sum_vectors_leaves_rows_untouched() {
        let m = sample();
        let _ = m.sum_vectors().unwrap();
        assert_eq!(m, sample());
    }

    #[test]
    fn test_mean_vector() {
        assert_eq!(
            sample().mean_vector().unwrap().as_slice(),
            &[5.5, 6.5, 7.5]
        );
        assert!(matches!(
            Matrix::default().mean_vector(),
            Err(Error::EmptyInput { .. })
        ));
    }
}
