//! Descriptive statistics over a single [`Vector`].
//!
//! Central tendency (`mean`, `median`, `mode`), spread (`range`,
//! `interquartile_range`, `variance`, `standard_deviation`) and rank lookups
//! (`quantile`). Rank-based measures sort a copy; the receiver is never
//! reordered.
//!
//! `mean`, `median` and `range` return `0.0` for an empty vector rather than
//! failing, so aggregation code does not need to branch on emptiness.

use crate::{Error, Vector, rank};

impl Vector {
    /// Arithmetic mean; `0.0` for an empty vector.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.sum() / self.len() as f64
    }

    /// Median of a sorted copy; `0.0` for an empty vector.
    ///
    /// ```
    /// # use mlscratch_linalg::Vector;
    /// assert_eq!(Vector::from(vec![5.0, 1.0, 3.0]).median(), 3.0);
    /// assert_eq!(Vector::from(vec![4.0, 1.0, 3.0, 2.0]).median(), 2.5);
    /// ```
    #[must_use]
    pub fn median(&self) -> f64 {
        rank::median(self.sorted().as_slice()).unwrap_or(0.0)
    }

    /// Element at index `floor(p * len)` of a sorted copy.
    ///
    /// `p == 1.0` returns the maximum.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] unless `0 <= p <= 1`
    /// - [`Error::EmptyInput`] if the vector is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use mlscratch_linalg::Vector;
    /// let v = Vector::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    /// assert_eq!(v.quantile(0.5).unwrap(), 5.0);
    /// assert!(v.quantile(1.5).is_err());
    /// ```
    pub fn quantile(&self, p: f64) -> Result<f64, Error> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidParameter {
                name: "percentile",
                value: p,
            });
        }
        rank::nearest_rank(self.sorted().as_slice(), p)
            .ok_or(Error::EmptyInput { operation: "quantile" })
    }

    /// All values sharing the highest occurrence count, in ascending order.
    ///
    /// Returns an empty vector when no value occurs more than once.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mlscratch_linalg::Vector;
    /// let v = Vector::from(vec![1.0, 3.0, 2.0, 3.0, 1.0, 5.0]);
    /// assert_eq!(v.mode().unwrap().as_slice(), &[1.0, 3.0]);
    ///
    /// let unique = Vector::from(vec![1.0, 2.0, 3.0]);
    /// assert!(unique.mode().unwrap().is_empty());
    /// ```
    pub fn mode(&self) -> Result<Self, Error> {
        if self.is_empty() {
            return Err(Error::EmptyInput { operation: "mode" });
        }

        // Equal values are adjacent after sorting, so runs give the counts.
        let sorted = self.sorted();
        let mut runs: Vec<(f64, usize)> = vec![];
        for &value in &sorted {
            match runs.last_mut() {
                Some((last, count)) if *last == value => *count += 1,
                _ => runs.push((value, 1)),
            }
        }

        let max_count = runs.iter().map(|(_, count)| *count).max().unwrap_or(0);
        if max_count <= 1 {
            return Ok(Self::default());
        }
        Ok(runs
            .into_iter()
            .filter(|(_, count)| *count == max_count)
            .map(|(value, _)| value)
            .collect())
    }

    /// Difference between the last and first element of a sorted copy;
    /// `0.0` for an empty vector.
    ///
    /// NaN sorts last under [`f64::total_cmp`], so any NaN makes the range NaN.
    #[must_use]
    pub fn range(&self) -> f64 {
        let sorted = self.sorted();
        match (sorted.as_slice().first(), sorted.as_slice().last()) {
            (Some(min), Some(max)) => max - min,
            _ => 0.0,
        }
    }

    /// `quantile(0.75) - quantile(0.25)`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if the vector is empty.
    pub fn interquartile_range(&self) -> Result<f64, Error> {
        let upper = self.quantile(0.75)?;
        let lower = self.quantile(0.25)?;
        Ok(upper - lower)
    }

    /// Returns a copy with the mean subtracted from every element.
    #[must_use]
    pub fn de_mean(&self) -> Self {
        let mean = self.mean();
        self.iter().map(|v| v - mean).collect()
    }

    /// Subtracts the mean from every element (in place).
    pub fn de_mean_in_place(&mut self) {
        let mean = self.mean();
        for v in self.iter_mut() {
            *v -= mean;
        }
    }

    /// Sample variance with Bessel's correction (divisor `n - 1`).
    ///
    /// Returns `0.0` for fewer than two elements.
    ///
    /// ```
    /// # use mlscratch_linalg::Vector;
    /// let v = Vector::from(vec![99.0, 42.0, 75.0, 11.0, 13.0, 100.0, 97.0, 66.0]);
    /// assert_eq!(v.variance(), 1374.125);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn variance(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }
        self.de_mean().sum_of_squares() / (self.len() - 1) as f64
    }

    /// Square root of [`Vector::variance`].
    #[must_use]
    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }
}

/// Descriptive statistics summarizing a vector.
///
/// All fields are computed from a single sorted copy of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of elements.
    pub len: usize,
    /// The smallest element.
    pub min: f64,
    /// The largest element.
    pub max: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median (average of the two middle elements for even lengths).
    pub median: f64,
    /// Sample variance (divisor `n - 1`, `0.0` below two elements).
    pub variance: f64,
    /// Square root of the variance.
    pub std_dev: f64,
    /// `max - min`.
    pub range: f64,
    /// Nearest-rank `P75 - P25`.
    pub interquartile_range: f64,
}

impl Summary {
    /// Computes the summary of `vector`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mlscratch_linalg::{Summary, Vector};
    /// let v = Vector::from(vec![5.0, 2.0, 4.0, 1.0, 3.0]);
    /// let summary = Summary::new(&v).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 5.0);
    /// assert_eq!(summary.mean, 3.0);
    /// assert_eq!(summary.median, 3.0);
    /// assert_eq!(summary.variance, 2.5);
    /// ```
    #[must_use]
    pub fn new(vector: &Vector) -> Option<Self> {
        Self::from_sorted(&vector.sorted())
    }

    /// Computes the summary of an already sorted vector, skipping the sort.
    ///
    /// # Panics
    ///
    /// Panics if `sorted` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted: &Vector) -> Option<Self> {
        let values = sorted.as_slice();
        let min = *values.first()?;
        let max = *values.last()?;
        let median = rank::median(values)?;
        let upper = rank::nearest_rank(values, 0.75)?;
        let lower = rank::nearest_rank(values, 0.25)?;
        let variance = sorted.variance();

        Some(Self {
            len: values.len(),
            min,
            max,
            mean: sorted.mean(),
            median,
            variance,
            std_dev: variance.sqrt(),
            range: max - min,
            interquartile_range: upper - lower,
        })
    }
}
