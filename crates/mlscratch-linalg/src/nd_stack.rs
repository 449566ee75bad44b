use std::ops::Index;
use std::slice::Iter;

use crate::Matrix;

/// Several matrices stacked along an outer axis.
///
/// Only used for bulk construction; the matrices are expected, but not
/// required, to share the same shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NdStack {
    matrices: Vec<Matrix>,
}

impl NdStack {
    #[must_use]
    pub fn new(matrices: Vec<Matrix>) -> Self {
        Self { matrices }
    }

    /// Builds `depth` matrices, each with `rows` rows and `columns` columns,
    /// filled by `generator(row, column)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlscratch_linalg::{Matrix, NdStack, matrix::generator};
    ///
    /// let stack = NdStack::create(3, 2, 2, generator::diagonal);
    /// assert_eq!(stack.len(), 3);
    /// assert!(stack.iter().all(|m| *m == Matrix::identity(2)));
    /// ```
    #[must_use]
    pub fn create<F>(depth: usize, columns: usize, rows: usize, mut generator: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        log::trace!("creating stack of {depth} {rows}x{columns} matrices");
        let matrices = (0..depth)
            .map(|_| Matrix::create(columns, rows, &mut generator))
            .collect();
        Self { matrices }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    #[must_use]
    pub fn matrices(&self) -> &[Matrix] {
        &self.matrices
    }

    pub fn iter(&self) -> Iter<'_, Matrix> {
        self.matrices.iter()
    }
}

impl From<Vec<Matrix>> for NdStack {
    fn from(matrices: Vec<Matrix>) -> Self {
        Self::new(matrices)
    }
}

impl Index<usize> for NdStack {
    type Output = Matrix;

    fn index(&self, index: usize) -> &Self::Output {
        &self.matrices[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::generator;

    #[test]
    fn test_create() {
        let stack = NdStack::create(2, 3, 4, generator::zeroed);
        assert_eq!(stack.len(), 2);
        for matrix in &stack.matrices {
            assert_eq!(matrix.shape(), (4, 3));
            assert!(matrix.iter().all(|row| row.iter().all(|&v| v == 0.0)));
        }
    }

    #[test]
    fn test_create_calls_generator_per_layer() {
        let mut calls = 0_u32;
        let stack = NdStack::create(3, 2, 2, |_, _| {
            calls += 1;
            f64::from(calls)
        });
        assert_eq!(calls, 12);
        assert_eq!(stack[0][0].as_slice(), &[1.0, 2.0]);
        assert_eq!(stack[2][1].as_slice(), &[11.0, 12.0]);
    }

    #[test]
    fn test_create_empty() {
        assert!(NdStack::create(0, 3, 3, generator::zeroed).is_empty());
        let flat = NdStack::create(2, 0, 3, generator::zeroed);
        assert_eq!(flat.len(), 2);
        assert!(flat.iter().all(Matrix::is_empty));
    }
}
