//! Polynomial interpolation: Lagrange, Newton divided differences, Hermite.
//!
//! All three build the unique polynomial through the given nodes; they
//! differ in cost and in what they store. Nodes do not need to be sorted,
//! but two nodes closer than [`NODE_TOL`] make the polynomial undefined and
//! surface as [`InterpError::DivideByZero`]. Evaluation outside the node
//! range extrapolates the same polynomial.
//!
//! Requires the `alloc` feature.
//!
//! # Examples
//!
//! ```
//! use numana::interp::{Dataset, LagrangeInterp, NewtonInterp, Point};
//!
//! let data = Dataset::new(&[
//!     Point::new(1.0_f64, 1.0),
//!     Point::new(2.0, 4.0),
//!     Point::new(3.0, 9.0),
//! ])
//! .unwrap();
//!
//! let newton = NewtonInterp::new(&data).unwrap();
//! let lagrange = LagrangeInterp::from_dataset(data);
//! assert!((newton.eval(2.5) - 6.25).abs() < 1e-12);
//! assert!((lagrange.eval(2.5).unwrap() - 6.25).abs() < 1e-12);
//! ```

mod dataset;
mod hermite;
mod lagrange;
mod newton;


pub use dataset::{Dataset, HermitePoint, ParsePointError, Point};
pub use hermite::HermiteInterp;
pub use lagrange::LagrangeInterp;
pub use newton::NewtonInterp;

/// Two nodes closer than this are treated as coincident.
pub const NODE_TOL: f64 = 1e-9;

/// Errors from interpolant construction and evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpError {
    /// No data points.
    Empty,
    /// Parallel slices have different lengths.
    LengthMismatch,
    /// Coincident nodes make a divided difference or basis undefined.
    DivideByZero,
}

impl core::fmt::Display for InterpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterpError::Empty => write!(f, "interpolation needs at least one data point"),
            InterpError::LengthMismatch => write!(f, "xs, ys and dys must have the same length"),
            InterpError::DivideByZero => write!(f, "coincident interpolation nodes"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpError {}
