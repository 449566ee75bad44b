//! Probability distributions for small learning experiments.
//!
//! - [`uniform`]: the standard uniform distribution on `[0, 1)`
//! - [`normal`]: Gaussian density and cumulative distribution
//! - [`bisection`]: numeric inversion of the normal CDF by bisection search
//! - [`plot`]: the seam to an external plotting sink
//!
//! The free functions mirror the textbook formulas and never fail. The
//! [`Normal`] value type validates its parameters once at construction.
//!
//! # Examples
//!
//! ```
//! use mlscratch_probability::{inverse_normal_cdf, normal_cdf};
//!
//! assert_eq!(normal_cdf(0.0, 0.0, 1.0), 0.5);
//!
//! let x = inverse_normal_cdf(0.1, 0.0, 1.0, 0.00001);
//! assert!((x - -1.2815570831298828).abs() < 1e-12);
//! ```

pub use self::{
    bisection::{Bisection, inverse_normal_cdf},
    normal::{Normal, normal_cdf, normal_pdf},
    uniform::{Uniform, uniform_cdf, uniform_pdf},
};

pub mod bisection;
pub mod normal;
pub mod plot;
pub mod uniform;

/// Rejected distribution parameter.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DistributionError {
    /// A parameter is non-finite or outside its domain.
    #[display("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
