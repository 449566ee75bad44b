//! Operations spanning two vectors.
//!
//! All functions here are pure: they borrow both operands and return a new
//! value or a typed [`Error`].

use crate::{Error, Vector};

fn check_same_len(a: &Vector, b: &Vector) -> Result<(), Error> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        })
    }
}

/// Elementwise operations need a shared, non-zero length.
fn check_elementwise(a: &Vector, b: &Vector) -> Result<(), Error> {
    if a.len() == b.len() && !a.is_empty() {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        })
    }
}

fn check_non_empty(v: &Vector, operation: &'static str) -> Result<(), Error> {
    if v.is_empty() {
        Err(Error::EmptyInput { operation })
    } else {
        Ok(())
    }
}

/// Elementwise sum of `a` and `b`.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if the lengths differ or both vectors are
/// empty.
///
/// # Examples
///
/// ```
/// use mlscratch_linalg::{Vector, ops::add_vectors};
///
/// let a = Vector::from(vec![1.0, 2.0, 3.0]);
/// let b = Vector::from(vec![10.0, 20.0, 30.0]);
/// assert_eq!(add_vectors(&a, &b).unwrap().as_slice(), &[11.0, 22.0, 33.0]);
/// ```
pub fn add_vectors(a: &Vector, b: &Vector) -> Result<Vector, Error> {
    check_elementwise(a, b)?;
    Ok(a.zip_with(b, |x, y| x + y))
}

/// Elementwise difference `a - b`.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if the lengths differ or both vectors are
/// empty.
pub fn subtract_vectors(a: &Vector, b: &Vector) -> Result<Vector, Error> {
    check_elementwise(a, b)?;
    Ok(a.zip_with(b, |x, y| x - y))
}

/// Sum of the pairwise products of `a` and `b`.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if either vector is empty
/// - [`Error::DimensionMismatch`] if the lengths differ
///
/// # Examples
///
/// ```
/// use mlscratch_linalg::{Vector, ops::dot_product};
///
/// let a = Vector::from(vec![1.0, 2.0, 3.0, 4.0]);
/// let b = Vector::from(vec![-2.0, -2.0, -2.0, -2.0]);
/// assert_eq!(dot_product(&a, &b).unwrap(), -20.0);
/// ```
pub fn dot_product(a: &Vector, b: &Vector) -> Result<f64, Error> {
    check_non_empty(a, "dot product")?;
    check_non_empty(b, "dot product")?;
    check_same_len(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Sum of squares of `a - b`.
///
/// # Errors
///
/// Same failure modes as [`subtract_vectors`].
pub fn squared_distance(a: &Vector, b: &Vector) -> Result<f64, Error> {
    Ok(subtract_vectors(a, b)?.sum_of_squares())
}

/// Euclidean distance between `a` and `b`.
///
/// # Errors
///
/// Same failure modes as [`subtract_vectors`].
pub fn distance(a: &Vector, b: &Vector) -> Result<f64, Error> {
    Ok(subtract_vectors(a, b)?.magnitude())
}

/// Sample covariance of `a` and `b` (divisor `n - 1`).
///
/// Length-one inputs return `0.0`: a single pair has no deviation from its
/// mean, and the `n - 1` divisor would otherwise give `0 / 0`.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if either vector is empty
/// - [`Error::DimensionMismatch`] if the lengths differ
///
/// # Examples
///
/// ```
/// use mlscratch_linalg::{Vector, ops::covariance};
///
/// let a = Vector::from(vec![9.0, 10.0, 100.0]);
/// let b = Vector::from(vec![5.0, 4.0, 3.0]);
/// assert_eq!(covariance(&a, &b).unwrap(), -45.5);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn covariance(a: &Vector, b: &Vector) -> Result<f64, Error> {
    check_non_empty(a, "covariance")?;
    check_non_empty(b, "covariance")?;
    check_same_len(a, b)?;
    if a.len() < 2 {
        return Ok(0.0);
    }
    let deviations = dot_product(&a.de_mean(), &b.de_mean())?;
    Ok(deviations / (a.len() - 1) as f64)
}

/// Pearson correlation of `a` and `b`, in `[-1, 1]`.
///
/// If either vector has zero standard deviation no linear relationship is
/// defined and `0.0` is returned; this is not an error. Vectors with fewer
/// than two elements always take this path.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if both standard deviations are positive and
/// the lengths differ.
///
/// # Examples
///
/// ```
/// use mlscratch_linalg::{Vector, ops::correlation};
///
/// let x = Vector::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// let up = Vector::from(vec![6.0, 7.0, 8.0, 9.0, 10.0]);
/// let flat = Vector::from(vec![3.0, 3.0, 3.0, 3.0, 3.0]);
///
/// assert!((correlation(&x, &up).unwrap() - 1.0).abs() < 1e-12);
/// assert_eq!(correlation(&x, &flat).unwrap(), 0.0);
/// ```
pub fn correlation(a: &Vector, b: &Vector) -> Result<f64, Error> {
    let a_std_dev = a.standard_deviation();
    let b_std_dev = b.standard_deviation();
    if a_std_dev > 0.0 && b_std_dev > 0.0 {
        let covar = covariance(a, b)?;
        Ok((covar / a_std_dev / b_std_dev).clamp(-1.0, 1.0))
    } else {
        Ok(0.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn pair() -> impl Strategy<Value = (Vector, Vector)> {
        (1_usize..32).prop_flat_map(|len| {
            (
                proptest::collection::vec(-1e3_f64..1e3, len),
                proptest::collection::vec(-1e3_f64..1e3, len),
            )
                .prop_map(|(a, b)| (Vector::from(a), Vector::from(b)))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn add_is_elementwise((a, b) in pair()) {
            let sum = add_vectors(&a, &b).unwrap();
            for i in 0..a.len() {
                prop_assert_eq!(sum[i], a[i] + b[i]);
            }
        }

        #[test]
        fn subtract_inverts_add((a, b) in pair()) {
            let back = subtract_vectors(&add_vectors(&a, &b).unwrap(), &b).unwrap();
            for i in 0..a.len() {
                prop_assert!((back[i] - a[i]).abs() < 1e-9);
            }
        }

        #[test]
        fn dot_product_commutes((a, b) in pair()) {
            prop_assert_eq!(dot_product(&a, &b).unwrap(), dot_product(&b, &a).unwrap());
        }

        #[test]
        fn correlation_is_bounded((a, b) in pair()) {
            let r = correlation(&a, &b).unwrap();
            prop_assert!((-1.0..=1.0).contains(&r));
        }

        #[test]
        fn self_correlation_is_one(
            data in proptest::collection::vec(-1e3_f64..1e3, 2..32)
                .prop_filter("non-constant", |d| d.iter().any(|&x| x != d[0])),
        ) {
            let a = Vector::from(data);
            prop_assert!((correlation(&a, &a).unwrap() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn distance_is_symmetric((a, b) in pair()) {
            let ab = distance(&a, &b).unwrap();
            let ba = distance(&b, &a).unwrap();
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-9);
        }
    }
}
