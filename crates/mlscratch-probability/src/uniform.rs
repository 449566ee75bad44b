//! The standard uniform distribution on `[0, 1)`.

/// Density of the standard uniform distribution: `1` on `[0, 1)`, else `0`.
#[must_use]
pub fn uniform_pdf(x: f64) -> f64 {
    if (0.0..1.0).contains(&x) { 1.0 } else { 0.0 }
}

/// Probability that a standard uniform draw is `<= x`.
///
/// ```
/// use mlscratch_probability::uniform_cdf;
///
/// assert_eq!(uniform_cdf(-3.0), 0.0);
/// assert_eq!(uniform_cdf(0.4), 0.4);
/// assert_eq!(uniform_cdf(7.0), 1.0);
/// ```
#[must_use]
pub fn uniform_cdf(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x < 1.0 {
        x
    } else {
        1.0
    }
}

/// The standard uniform distribution as a value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Uniform;

impl Uniform {
    #[must_use]
    pub fn pdf(self, x: f64) -> f64 {
        uniform_pdf(x)
    }

    #[must_use]
    pub fn cdf(self, x: f64) -> f64 {
        uniform_cdf(x)
    }
}
