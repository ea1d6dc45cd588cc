//! Scalar root finding.
//!
//! Each method is a small handle that owns its callback and iteration state;
//! `solve()` runs the iteration and leaves the handle positioned at its last
//! iterate (bisection keeps its narrowed bracket).
//!
//! - [`Bisection`]: bracketed halving with a precomputed step count
//! - [`NewtonRaphson`]: Newton's method on a finite-difference derivative
//! - [`Secant`]: secant method from two starting points
//! - [`FixedPoint`]: successive approximation `x = g(x)` with a contraction check
//!
//! All of them report a [`RootResult`] on success and a [`RootError`]
//! otherwise. Handles can carry a label (`with_name`) for diagnostics.

mod bisection;
mod fixed_point;
mod newton_raphson;
mod secant;


pub use bisection::Bisection;
pub use fixed_point::{FixedPoint, FIXED_POINT_ZERO_SNAP};
pub use newton_raphson::NewtonRaphson;
pub use secant::{Secant, SECANT_ZERO_SNAP, SLOPE_TOL};

use crate::traits::{cast, FloatScalar};

/// Step used by the finite-difference derivative.
pub const FD_STEP: f64 = 1e-3;

/// Derivative magnitudes below this count as zero, and the forward and
/// reversed quotients must agree to within it.
pub const DERIVATIVE_TOL: f64 = 1e-9;

/// Errors from root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootError {
    /// Tolerance, interval or iteration budget out of range.
    InvalidInput,
    /// Bracket endpoints do not have opposite signs.
    BracketInvalid,
    /// Maximum number of iterations exceeded.
    MaxIterations,
    /// Finite-difference derivative is (numerically) zero.
    DerivativeZero,
    /// Forward and reversed difference quotients disagree or are not finite.
    DerivativeUnstable,
    /// Secant gap or slope too small to divide by.
    DivideByZero,
    /// Iteration map is not a contraction at the current point.
    NoApproximation,
}

impl core::fmt::Display for RootError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RootError::InvalidInput => write!(f, "invalid tolerance, interval or iteration limit"),
            RootError::BracketInvalid => write!(f, "bracket endpoints must have opposite signs"),
            RootError::MaxIterations => write!(f, "maximum iterations exceeded"),
            RootError::DerivativeZero => write!(f, "derivative is zero"),
            RootError::DerivativeUnstable => write!(f, "derivative estimate is unstable"),
            RootError::DivideByZero => write!(f, "secant gap or slope is too small"),
            RootError::NoApproximation => write!(f, "iteration map is not a contraction"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RootError {}

/// Result of a scalar root-finding algorithm.
#[derive(Debug, Clone, Copy)]
pub struct RootResult<T> {
    /// Approximate root.
    pub x: T,
    /// Function value at the root: `f(x)` (for [`FixedPoint`], the residual `g(x) - x`).
    pub fx: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function evaluations.
    pub evals: usize,
}

/// Forward and reversed difference quotients of `f` at `x0` with step
/// [`FD_STEP`].
///
/// Returns `(q_forward, q_reversed, f(x0))`. Evaluates `f(x0 + h)` first,
/// then `f(x0)`.
fn difference_quotients<T: FloatScalar>(f: &mut impl FnMut(T) -> T, x0: T) -> (T, T, T) {
    let x1 = x0 + cast::<T>(FD_STEP);
    let y1 = f(x1);
    let y0 = f(x0);
    ((y1 - y0) / (x1 - x0), (y0 - y1) / (x0 - x1), y0)
}

/// Finite-difference derivative of `f` at `x0`.
///
/// Returns `(f'(x0), f(x0))` using two evaluations. Fails with
/// `DerivativeZero` if either quotient is below [`DERIVATIVE_TOL`] and with
/// `DerivativeUnstable` if they disagree by more than that (NaN included).
pub(crate) fn fd_derivative<T: FloatScalar>(
    f: &mut impl FnMut(T) -> T,
    x0: T,
) -> Result<(T, T), RootError> {
    let tol: T = cast(DERIVATIVE_TOL);
    let (forward, reversed, y0) = difference_quotients(f, x0);
    if forward.abs() < tol || reversed.abs() < tol {
        return Err(RootError::DerivativeZero);
    }
    let gap = (forward - reversed).abs();
    if gap.is_nan() || gap > tol {
        return Err(RootError::DerivativeUnstable);
    }
    Ok(((forward + reversed) / cast::<T>(2.0), y0))
}

/// Contraction test for successive approximation: `|g'(x)| < 1` on the
/// finite-difference estimate. A NaN estimate fails.
pub(crate) fn is_contraction<T: FloatScalar>(g: &mut impl FnMut(T) -> T, x: T) -> bool {
    let (forward, reversed, _) = difference_quotients(g, x);
    let slope = (forward + reversed) / cast::<T>(2.0);
    slope.abs() < T::one()
}

/// Optional owned label attached to a solver handle.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Default)]
pub(crate) struct Label {
    name: Option<alloc::string::String>,
}

#[cfg(feature = "alloc")]
impl Label {
    pub(crate) fn set(&mut self, name: alloc::string::String) {
        self.name = Some(name);
    }

    pub(crate) fn get(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
