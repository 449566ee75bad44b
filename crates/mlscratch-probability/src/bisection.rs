//! Inversion of the normal CDF by bisection search.
//!
//! The standard normal CDF is monotonic and numerically saturated at `0` and
//! `1` well inside `[-10, 10]`, so halving that bracket converges for every
//! target probability. Non-standard parameters are handled by inverting the
//! standard normal and rescaling with `mean + sigma * z`.

use crate::normal_cdf;

/// Bracket, tolerance and iteration cap of the bisection search.
///
/// # Examples
///
/// ```
/// use mlscratch_probability::Bisection;
///
/// let search = Bisection::default().with_tolerance(1e-9);
/// let z = search.inverse_standard_normal_cdf(0.975);
/// assert!((z - 1.959_963_985).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    /// Lower end of the initial bracket.
    pub low: f64,
    /// Upper end of the initial bracket.
    pub high: f64,
    /// The search stops once the bracket is at most this wide.
    pub tolerance: f64,
    /// Upper bound on the number of halvings.
    pub max_iterations: usize,
}

impl Default for Bisection {
    fn default() -> Self {
        Self {
            low: -10.0,
            high: 10.0,
            tolerance: 1e-5,
            max_iterations: 200,
        }
    }
}

impl Bisection {
    #[must_use]
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Approximates `z` with `normal_cdf(z, 0, 1) == probability`.
    ///
    /// Each step evaluates the CDF at the bracket midpoint and keeps the half
    /// containing the target. The returned value is the last midpoint
    /// evaluated. A non-positive (or NaN) tolerance stops before the first
    /// halving and returns the initial midpoint.
    ///
    /// Probabilities outside `(0, 1)` converge to the nearest bracket end.
    #[must_use]
    pub fn inverse_standard_normal_cdf(&self, probability: f64) -> f64 {
        let mut low = self.low;
        let mut high = self.high;
        let mut mid = f64::midpoint(low, high);
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return mid;
        }

        let mut iterations = 0;
        while high - low > self.tolerance {
            if iterations == self.max_iterations {
                log::warn!(
                    "bisection stopped after {iterations} iterations with bracket [{low}, {high}]"
                );
                break;
            }
            iterations += 1;

            mid = f64::midpoint(low, high);
            let mid_probability = normal_cdf(mid, 0.0, 1.0);
            if mid_probability < probability {
                low = mid;
            } else if mid_probability > probability {
                high = mid;
            } else {
                break;
            }
        }

        log::debug!(
            "bisection for p={probability} finished after {iterations} iterations at {mid}"
        );
        mid
    }
}

/// Approximates `x` with `normal_cdf(x, mean, sigma) == probability` within
/// `tolerance`.
///
/// Runs [`Bisection`] over `[-10, 10]` on the standard normal and rescales the
/// result as `mean + sigma * z`. A non-positive tolerance returns `mean`
/// without searching.
///
/// ```
/// use mlscratch_probability::inverse_normal_cdf;
///
/// assert_eq!(inverse_normal_cdf(0.1, 0.0, 1.0, 0.00001), -1.2815570831298828);
/// assert_eq!(inverse_normal_cdf(0.9, 2.0, 2.0, 0.0), 2.0);
/// ```
#[must_use]
pub fn inverse_normal_cdf(probability: f64, mean: f64, sigma: f64, tolerance: f64) -> f64 {
    let search = Bisection::default().with_tolerance(tolerance);
    mean + sigma * search.inverse_standard_normal_cdf(probability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Normal;

    #[test]
    fn test_inverse_normal_cdf_reference_value() {
        assert_eq!(
            inverse_normal_cdf(0.1, 0.0, 1.0, 0.00001),
            -1.281_557_083_129_882_8
        );
    }

    #[test]
    fn test_inverse_normal_cdf_round_trips() {
        for p in [0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99] {
            let x = inverse_normal_cdf(p, 0.0, 1.0, 1e-10);
            assert!((normal_cdf(x, 0.0, 1.0) - p).abs() < 1e-9, "p = {p}");
        }
    }

    #[test]
    fn test_inverse_normal_cdf_rescales() {
        let standard = inverse_normal_cdf(0.1, 0.0, 1.0, 0.00001);
        let scaled = inverse_normal_cdf(0.1, 5.0, 3.0, 0.00001);
        assert_eq!(scaled, 5.0 + 3.0 * standard);

        let x = inverse_normal_cdf(0.3, -2.0, 0.5, 1e-10);
        assert!((normal_cdf(x, -2.0, 0.5) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_normal_cdf_out_of_range_probability_saturates() {
        for p in [-10.0, -1.0] {
            let x = inverse_normal_cdf(p, 0.0, 1.0, 0.00001);
            assert!((x + 10.0).abs() < 1e-4, "p = {p}, x = {x}");
        }
        for p in [2.0, 9.0] {
            let x = inverse_normal_cdf(p, 0.0, 1.0, 0.00001);
            assert!((x - 10.0).abs() < 1e-4, "p = {p}, x = {x}");
        }
    }

    #[test]
    fn test_non_positive_tolerance_stops_immediately() {
        assert_eq!(inverse_normal_cdf(9_904_000_002.0, 2.0, 2.0, 0.0), 2.0);
        assert_eq!(inverse_normal_cdf(0.1, 0.0, 1.0, -1.0), 0.0);
        assert_eq!(inverse_normal_cdf(0.1, 0.0, 1.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_exact_hit_at_midpoint() {
        assert_eq!(inverse_normal_cdf(0.5, 0.0, 1.0, 0.00001), 0.0);
    }

    #[test]
    fn test_iteration_cap_terminates() {
        let search = Bisection {
            max_iterations: 3,
            ..Bisection::default()
        };
        // Three halvings of [-10, 10] towards the upper end: 0, 5, 7.5.
        assert_eq!(search.inverse_standard_normal_cdf(2.0), 7.5);
        // NaN compares neither below nor above, so the first midpoint is final.
        assert_eq!(search.inverse_standard_normal_cdf(f64::NAN), 0.0);
    }

    #[test]
    fn test_iteration_count_matches_bracket_width() {
        // Twenty-one halvings bring a width-20 bracket below 1e-5.
        let search = Bisection {
            max_iterations: 21,
            ..Bisection::default()
        };
        assert_eq!(
            search.inverse_standard_normal_cdf(0.1),
            Bisection::default().inverse_standard_normal_cdf(0.1)
        );
    }

    #[test]
    fn test_normal_inverse_cdf() {
        let normal = Normal::new(3.0, 2.0).unwrap();
        let x = normal.inverse_cdf(0.8, &Bisection::default().with_tolerance(1e-10));
        assert!((normal.cdf(x) - 0.8).abs() < 1e-9);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn inverse_is_monotonic(p in 0.001_f64..0.999, q in 0.001_f64..0.999) {
            let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
            let x_lo = inverse_normal_cdf(lo, 0.0, 1.0, 1e-9);
            let x_hi = inverse_normal_cdf(hi, 0.0, 1.0, 1e-9);
            prop_assert!(x_lo <= x_hi + 1e-8);
        }

        #[test]
        fn result_stays_in_bracket(p in -1.0_f64..2.0, tolerance in 1e-12_f64..1.0) {
            let x = inverse_normal_cdf(p, 0.0, 1.0, tolerance);
            prop_assert!((-10.0..=10.0).contains(&x));
        }
    }
}
