use core::fmt;

use crate::traits::{cast, FloatScalar};

#[cfg(feature = "alloc")]
use super::Label;
use super::{fd_derivative, RootError, RootResult};

const MIN_TOL: f64 = 1e-15;

/// Newton's method with a finite-difference derivative.
///
/// Each step computes `x1 = x0 - f(x0) / f'(x0)`, where `f'` is the
/// central value of the forward and reversed difference quotients with
/// step [`FD_STEP`](super::FD_STEP). Converges when `|x1 - x0| < tol` or
/// `|f(x1)| < tol`.
///
/// # Example
///
/// ```
/// use numana::roots::NewtonRaphson;
///
/// let mut nr = NewtonRaphson::new(|x: f64| x.cos() - x, 1.0, 1e-12, 50).unwrap();
/// let r = nr.solve().unwrap();
/// assert!((r.x - 0.7390851332151607).abs() < 1e-10);
/// ```
#[derive(Clone)]
pub struct NewtonRaphson<T, F> {
    f: F,
    x: T,
    tol: T,
    max_iter: usize,
    #[cfg(feature = "alloc")]
    label: Label,
}

impl<T: fmt::Debug, F> fmt::Debug for NewtonRaphson<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("NewtonRaphson");
        s.field("x", &self.x);
        s.field("tol", &self.tol);
        s.field("max_iter", &self.max_iter);
        #[cfg(feature = "alloc")]
        s.field("label", &self.label.get());
        s.finish_non_exhaustive()
    }
}

impl<T: FloatScalar, F: FnMut(T) -> T> NewtonRaphson<T, F> {
    /// # Errors
    ///
    /// [`RootError::InvalidInput`] if `tol <= 1e-15` or `max_iter == 0`.
    pub fn new(f: F, x0: T, tol: T, max_iter: usize) -> Result<Self, RootError> {
        let min_tol: T = cast(MIN_TOL);
        if tol.is_nan() || tol <= min_tol || max_iter == 0 {
            return Err(RootError::InvalidInput);
        }
        Ok(Self {
            f,
            x: x0,
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

    /// Current iterate (the initial guess before `solve()`).
    pub fn current(&self) -> T {
        self.x
    }

    /// Iterate from the current point.
    ///
    /// # Errors
    ///
    /// [`RootError::DerivativeZero`] / [`RootError::DerivativeUnstable`] from
    /// the derivative estimate, [`RootError::MaxIterations`] if the budget
    /// runs out.
    pub fn solve(&mut self) -> Result<RootResult<T>, RootError> {
        let mut evals = 0usize;

        for iter in 0..self.max_iter {
            let x0 = self.x;
            let (dfx, fx0) = fd_derivative(&mut self.f, x0).map_err(|e| {
                diag_debug!(name = ?self.label.get(), error = ?e, "newton-raphson derivative failed");
                e
            })?;
            evals += 2;

            let x1 = x0 - fx0 / dfx;
            let fx1 = (self.f)(x1);
            evals += 1;
            self.x = x1;
            diag_trace!(iter, ?x1, ?fx1, "newton-raphson step");

            if (x1 - x0).abs() < self.tol || fx1.abs() < self.tol {
                diag_debug!(name = ?self.label.get(), iterations = iter + 1, "newton-raphson converged");
                return Ok(RootResult {
                    x: x1,
                    fx: fx1,
                    iterations: iter + 1,
                    evals,
                });
            }
        }

        diag_debug!(name = ?self.label.get(), "newton-raphson hit the iteration limit");
        Err(RootError::MaxIterations)
    }
}
