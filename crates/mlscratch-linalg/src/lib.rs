//! Vector and matrix algebra with attached descriptive statistics.
//!
//! This crate provides the small dense containers used by the elementary
//! learning algorithms built on top of it:
//!
//! - **Vectors**: [`Vector`], an owned sequence of `f64` with elementwise
//!   arithmetic and descriptive statistics (mean, median, quantiles, mode,
//!   variance, ...)
//! - **Binary operations**: free functions in [`ops`] spanning two vectors
//!   (addition, dot product, distance, covariance, correlation)
//! - **Matrices**: [`Matrix`], a sequence of row vectors with shape queries,
//!   row/column access, generator-based construction and row reductions
//! - **Stacks**: [`NdStack`], a bulk-construction helper for several matrices
//! - **Summaries**: [`Summary`], all descriptive measures from one sorted copy
//!
//! # In-place operations
//!
//! Methods whose names end in `_in_place`, as well as [`Vector::sort`] and
//! [`Vector::reverse_sort`], mutate the receiver. Every other operation leaves
//! its inputs untouched and returns a new value. Clone first when the original
//! values are still needed.
//!
//! # Examples
//!
//! ```
//! use mlscratch_linalg::{Vector, ops};
//!
//! let a = Vector::from(vec![99.0, 42.0, 75.0, 11.0, 13.0, 100.0, 97.0, 66.0]);
//! let b = Vector::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
//!
//! assert_eq!(a.variance(), 1374.125);
//! assert_eq!(ops::dot_product(&a, &b).unwrap(), 2324.0);
//! ```
//!
//! ## Building matrices
//!
//! ```
//! use mlscratch_linalg::{Matrix, matrix::generator};
//!
//! let identity = Matrix::create(3, 3, generator::diagonal);
//! assert_eq!(identity.shape(), (3, 3));
//! assert_eq!(identity.column(1).unwrap().as_slice(), &[0.0, 1.0, 0.0]);
//! ```

pub use self::{descriptive::Summary, matrix::Matrix, nd_stack::NdStack, vector::Vector};

pub mod descriptive;
pub mod matrix;
pub mod nd_stack;
pub mod ops;
pub mod rank;
pub mod vector;

/// Failure of a vector or matrix operation.
///
/// Every failure means the requested computation is undefined for the given
/// input; no partial result is produced.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// Two vectors or rows required to have equal length do not.
    #[display("dimension mismatch: expected length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// An operation requiring at least one element received none.
    #[display("{operation} requires at least one element")]
    EmptyInput { operation: &'static str },
    /// A parameter lies outside its required domain.
    #[display("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// A row or column index lies outside `[0, len)`.
    #[display("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
