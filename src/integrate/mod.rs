//! Quadrature and fixed-step ODE integration.
//!
//! # Quadrature
//!
//! | Function             | Rule                     | Error   | Requirement       |
//! |----------------------|--------------------------|---------|-------------------|
//! | [`trapezoid`]        | composite trapezoidal    | O(h²)   | `n > 0`           |
//! | [`simpson`]          | composite Simpson 1/3    | O(h⁴)   | `n` even          |
//! | [`double_simpson`]   | product Simpson on a box | O(h⁴)   | `n`, `m` even     |
//! | [`rk4_fixed`]        | RK4 on `y' = f(x)`       | O(h⁴)   | `steps > 0`       |
//! | [`rk4_adaptive`]     | RK4 step doubling        | tol     | finite bounds     |
//!
//! Intervals must be ordered (`a < b`) for the Newton–Cotes rules; invalid
//! input is rejected before `f` is called.
//!
//! # Initial value problems
//!
//! [`euler`] and [`rk4`] advance a scalar state `y' = f(t, y)` by a fixed
//! number of steps of size `h`; [`rk4_step`] is the single-step kernel.
//!
//! # Example
//!
//! ```
//! use numana::integrate::{rk4_adaptive, simpson, AdaptiveSettings, QuadStatus};
//!
//! let s = simpson(|x: f64| x * x, 0.0, 1.0, 10).unwrap();
//! assert!((s - 1.0 / 3.0).abs() < 1e-14);
//!
//! let q = rk4_adaptive(|x: f64| x * x, 0.0, 2.0, &AdaptiveSettings::default()).unwrap();
//! assert_eq!(q.status, QuadStatus::Converged);
//! assert!((q.value - 8.0 / 3.0).abs() < 1e-9);
//! ```

mod adaptive;
mod newton_cotes;
mod ode;

#[cfg(test)]
mod tests;

use core::fmt;

pub use adaptive::{rk4_adaptive, rk4_fixed, AdaptiveSettings, QuadResult, QuadStatus};
pub use newton_cotes::{double_simpson, simpson, trapezoid};
pub use ode::{euler, rk4, rk4_step};

/// Errors from quadrature and ODE stepping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegrateError {
    /// Interval bounds are not finite or not ordered.
    InvalidInterval,
    /// Subdivision or step count is zero, or odd where an even count is required.
    InvalidSubdivisions,
    /// Step size is not positive and finite.
    InvalidStep,
}

impl fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval => write!(f, "integration interval must be finite with a < b"),
            Self::InvalidSubdivisions => write!(f, "invalid number of subdivisions"),
            Self::InvalidStep => write!(f, "step size must be positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IntegrateError {}
