//! The normal (Gaussian) distribution.

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erf;

use crate::{Bisection, DistributionError};

/// Gaussian density `1 / (sigma * sqrt(2 pi)) * exp(-(x - mean)^2 / (2 sigma^2))`.
///
/// ```
/// use mlscratch_probability::normal_pdf;
///
/// assert!((normal_pdf(1.0, 0.0, 1.0) - 0.24197072451914337).abs() < 1e-15);
/// ```
#[must_use]
pub fn normal_pdf(x: f64, mean: f64, sigma: f64) -> f64 {
    let base = 1.0 / (sigma * (2.0 * PI).sqrt());
    let exponent = -(x - mean).powi(2) / (2.0 * sigma.powi(2));
    base * exponent.exp()
}

/// Probability that a draw from `N(mean, sigma^2)` is `<= x`.
#[must_use]
pub fn normal_cdf(x: f64, mean: f64, sigma: f64) -> f64 {
    (1.0 + erf((x - mean) / SQRT_2 / sigma)) / 2.0
}

/// A normal distribution with validated parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    sigma: f64,
}

impl Normal {
    /// Creates `N(mean, sigma^2)`.
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidParameter`] if `mean` is not finite or
    /// `sigma` is not finite and positive.
    pub fn new(mean: f64, sigma: f64) -> Result<Self, DistributionError> {
        if !mean.is_finite() {
            return Err(DistributionError::InvalidParameter {
                name: "mean",
                value: mean,
            });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(DistributionError::InvalidParameter {
                name: "sigma",
                value: sigma,
            });
        }
        Ok(Self { mean, sigma })
    }

    /// The standard normal distribution `N(0, 1)`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            sigma: 1.0,
        }
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        normal_pdf(x, self.mean, self.sigma)
    }

    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        normal_cdf(x, self.mean, self.sigma)
    }

    /// Approximate `x` with `cdf(x) == probability`, see [`Bisection`].
    ///
    /// ```
    /// use mlscratch_probability::{Bisection, Normal};
    ///
    /// let normal = Normal::new(100.0, 15.0).unwrap();
    /// let x = normal.inverse_cdf(0.5, &Bisection::default());
    /// assert!((x - 100.0).abs() < 1e-3);
    /// ```
    #[must_use]
    pub fn inverse_cdf(&self, probability: f64, bisection: &Bisection) -> f64 {
        self.mean + self.sigma * bisection.inverse_standard_normal_cdf(probability)
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}
