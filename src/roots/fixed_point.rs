use core::fmt;

use crate::traits::{cast, FloatScalar};

#[cfg(feature = "alloc")]
use super::Label;
use super::{is_contraction, RootError, RootResult};

const MIN_TOL: f64 = 1e-65;

/// Fixed points closer than this to zero are reported as exactly zero.
pub const FIXED_POINT_ZERO_SNAP: f64 = 1e-7;

/// Successive approximation: iterate `x = g(x)` to a fixed point.
///
/// The map must be a contraction, `|g'(x)| < 1`, at the starting point and
/// at every iterate (checked with a finite-difference estimate).
///
/// ```
/// use numana::roots::FixedPoint;
///
/// // x = sqrt(2x + 3) has the fixed point 3.
/// let mut fp = FixedPoint::new(|x: f64| (2.0 * x + 3.0).sqrt(), 0.0, 1e-10, 100).unwrap();
/// let r = fp.solve().unwrap();
/// assert!((r.x - 3.0).abs() < 1e-9);
/// ```
#[derive(Clone)]
pub struct FixedPoint<T, G> {
    g: G,
    x: T,
    tol: T,
    max_iter: usize,
    #[cfg(feature = "alloc")]
    label: Label,
}

impl<T: fmt::Debug, G> fmt::Debug for FixedPoint<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("FixedPoint");
        s.field("x", &self.x);
        s.field("tol", &self.tol);
        s.field("max_iter", &self.max_iter);
        #[cfg(feature = "alloc")]
        s.field("label", &self.label.get());
        s.finish_non_exhaustive()
    }
}

impl<T: FloatScalar, G: FnMut(T) -> T> FixedPoint<T, G> {
    /// # Errors
    ///
    /// [`RootError::InvalidInput`] if `tol <= 1e-65` or `max_iter == 0`;
    /// [`RootError::NoApproximation`] if `g` is not a contraction at `x0`.
    pub fn new(mut g: G, x0: T, tol: T, max_iter: usize) -> Result<Self, RootError> {
        let min_tol: T = cast(MIN_TOL);
        if tol.is_nan() || tol <= min_tol || max_iter == 0 {
            return Err(RootError::InvalidInput);
        }
        if !is_contraction(&mut g, x0) {
            return Err(RootError::NoApproximation);
        }
        Ok(Self {
            g,
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

    /// Current iterate.
    pub fn current(&self) -> T {
        self.x
    }

    /// Iterate until `|x1 - x0| < tol`.
    ///
    /// `fx` in the result is the residual `g(x) - x`. A fixed point within
    /// [`FIXED_POINT_ZERO_SNAP`] of zero is returned as `0`.
    ///
    /// # Errors
    ///
    /// [`RootError::NoApproximation`] if an iterate leaves the contraction
    /// region, [`RootError::MaxIterations`] if the budget runs out.
    pub fn solve(&mut self) -> Result<RootResult<T>, RootError> {
        let mut evals = 0usize;

        for iter in 0..self.max_iter {
            let x0 = self.x;
            let x1 = (self.g)(x0);
            let contracts = is_contraction(&mut self.g, x1);
            evals += 3;

            if !contracts {
                diag_debug!(name = ?self.label.get(), iter, "fixed-point iterate left the contraction region");
                return Err(RootError::NoApproximation);
            }
            self.x = x1;
            diag_trace!(iter, ?x1, "fixed-point step");

            if (x1 - x0).abs() < self.tol {
                let x = if x1.abs() < cast::<T>(FIXED_POINT_ZERO_SNAP) {
                    T::zero()
                } else {
                    x1
                };
                let fx = (self.g)(x) - x;
                evals += 1;
                diag_debug!(name = ?self.label.get(), iterations = iter + 1, "fixed-point converged");
                return Ok(RootResult {
                    x,
                    fx,
                    iterations: iter + 1,
                    evals,
                });
            }
        }

        diag_debug!(name = ?self.label.get(), "fixed-point hit the iteration limit");
        Err(RootError::MaxIterations)
    }
}
