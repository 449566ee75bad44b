use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

/// An ordered sequence of `f64` values.
///
/// There is no sortedness or uniqueness invariant and the length may be zero.
/// Statistical methods live in [`crate::descriptive`]; operations spanning two
/// vectors live in [`crate::ops`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self::new(values)
    }

    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.values.iter_mut()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Sum of all elements, `0.0` for an empty vector.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Smallest element, or `None` for an empty vector.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Largest element, or `None` for an empty vector.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Sorts the elements in ascending order (in place).
    pub fn sort(&mut self) {
        self.values.sort_by(f64::total_cmp);
    }

    /// Sorts the elements in descending order (in place).
    pub fn reverse_sort(&mut self) {
        self.values.sort_by(|a, b| b.total_cmp(a));
    }

    /// Returns an ascending copy, leaving `self` untouched.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.sort();
        copy
    }

    /// Returns a descending copy, leaving `self` untouched.
    #[must_use]
    pub fn reverse_sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.reverse_sort();
        copy
    }

    /// Returns a new vector with every element multiplied by `scalar`.
    ///
    /// ```
    /// # use mlscratch_linalg::Vector;
    /// let v = Vector::from(vec![2.0, 4.0, 6.0]);
    /// assert_eq!(v.scalar_multiply(-1.0).as_slice(), &[-2.0, -4.0, -6.0]);
    /// assert!(Vector::default().scalar_multiply(3.0).is_empty());
    /// ```
    #[must_use]
    pub fn scalar_multiply(&self, scalar: f64) -> Self {
        self.values.iter().map(|v| v * scalar).collect()
    }

    /// Multiplies every element by `scalar` (in place).
    pub fn scalar_multiply_in_place(&mut self, scalar: f64) {
        for v in &mut self.values {
            *v *= scalar;
        }
    }

    /// Sum of the squared elements; `0.0` for an empty vector.
    #[must_use]
    pub fn sum_of_squares(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum()
    }

    /// Euclidean length of the vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.sum_of_squares().sqrt()
    }

    pub(crate) fn zip_with<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(f64, f64) -> f64,
    {
        debug_assert_eq!(self.len(), other.len());
        self.values
            .iter()
            .zip(&other.values)
            .map(|(&a, &b)| f(a, b))
            .collect()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.values
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
