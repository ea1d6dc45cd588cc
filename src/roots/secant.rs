use core::fmt;

use crate::traits::{cast, FloatScalar};

#[cfg(feature = "alloc")]
use super::Label;
use super::{RootError, RootResult};

const MIN_TOL: f64 = 1e-65;

/// Smallest gap `|x1 - x0|` and slope magnitude the secant step divides by.
pub const SLOPE_TOL: f64 = 1e-9;

/// Roots closer than this to zero are reported as exactly zero.
pub const SECANT_ZERO_SNAP: f64 = 2e-8;

/// Secant method from two starting points.
///
/// ```
/// use numana::roots::Secant;
///
/// let mut s = Secant::new(|x: f64| x * x - 4.0, 1.0, 3.0, 1e-12, 50).unwrap();
/// let r = s.solve().unwrap();
/// assert!((r.x - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct Secant<T, F> {
    f: F,
    x0: T,
    x1: T,
    tol: T,
    max_iter: usize,
    #[cfg(feature = "alloc")]
    label: Label,
}

impl<T: fmt::Debug, F> fmt::Debug for Secant<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Secant");
        s.field("x0", &self.x0);
        s.field("x1", &self.x1);
        s.field("tol", &self.tol);
        s.field("max_iter", &self.max_iter);
        #[cfg(feature = "alloc")]
        s.field("label", &self.label.get());
        s.finish_non_exhaustive()
    }
}

impl<T: FloatScalar, F: FnMut(T) -> T> Secant<T, F> {
    /// # Errors
    ///
    /// [`RootError::InvalidInput`] if `tol <= 1e-65` or `max_iter == 0`.
    pub fn new(f: F, x0: T, x1: T, tol: T, max_iter: usize) -> Result<Self, RootError> {
        let min_tol: T = cast(MIN_TOL);
        if tol.is_nan() || tol <= min_tol || max_iter == 0 {
            return Err(RootError::InvalidInput);
        }
        Ok(Self {
            f,
            x0,
            x1,
            tol,
            max_iter,
            #[cfg(feature = "alloc")]
            label: Label::default(),
        })
    }

    #[cfg(feature = "alloc")]
    pub fn with_name(mut self, name: impl Into<alloc::string::String>) -> Self {
        self.label.set(name.into());
        self
    }

    #[cfg(feature = "alloc")]
    pub fn name(&self) -> Option<&str> {
        self.label.get()
    }

    /// The two most recent iterates.
    pub fn points(&self) -> (T, T) {
        (self.x0, self.x1)
    }

    /// Iterate `x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))`.
    ///
    /// Converges when `|x2 - x1| < tol` or `|f(x2)| < tol`; a root within
    /// [`SECANT_ZERO_SNAP`] of zero is returned as `0`.
    ///
    /// # Errors
    ///
    /// [`RootError::DivideByZero`] if the gap or the slope drops below
    /// [`SLOPE_TOL`], [`RootError::MaxIterations`] if the budget runs out.
    pub fn solve(&mut self) -> Result<RootResult<T>, RootError> {
        let eps: T = cast(SLOPE_TOL);
        let mut f0 = (self.f)(self.x0);
        let mut f1 = (self.f)(self.x1);
        let mut evals = 2usize;

        for iter in 0..self.max_iter {
            let gap = self.x1 - self.x0;
            if gap.abs() < eps {
                diag_debug!(name = ?self.label.get(), iter, "secant gap collapsed");
                return Err(RootError::DivideByZero);
            }
            let slope = (f1 - f0) / gap;
            if slope.abs() < eps {
                diag_debug!(name = ?self.label.get(), iter, "secant slope vanished");
                return Err(RootError::DivideByZero);
            }

            let x2 = self.x1 - f1 / slope;
            let f2 = (self.f)(x2);
            evals += 1;
            diag_trace!(iter, ?x2, ?f2, "secant step");

            let converged = (x2 - self.x1).abs() < self.tol || f2.abs() < self.tol;
            self.x0 = self.x1;
            self.x1 = x2;
            f0 = f1;
            f1 = f2;

            if converged {
                let (x, fx) = if x2.abs() < cast::<T>(SECANT_ZERO_SNAP) {
                    evals += 1;
                    (T::zero(), (self.f)(T::zero()))
                } else {
                    (x2, f2)
                };
                diag_debug!(name = ?self.label.get(), iterations = iter + 1, "secant converged");
                return Ok(RootResult {
                    x,
                    fx,
                    iterations: iter + 1,
                    evals,
                });
            }
        }

        diag_debug!(name = ?self.label.get(), "secant hit the iteration limit");
        Err(RootError::MaxIterations)
    }
}
