use core::fmt;

use crate::traits::{cast, FloatScalar};

#[cfg(feature = "alloc")]
use super::Label;
use super::{RootError, RootResult};

/// Tolerances at or below this are rejected.
const MIN_TOL: f64 = 1e-15;

/// Bisection on a sign-changing bracket `[a, b]`.
///
/// The number of halvings is fixed at construction: the smallest `k` with
/// `(b - a) / 2^k <= tol`. `solve()` narrows the stored bracket in place
/// and returns its final midpoint.
///
/// # Example
///
/// ```
/// use numana::roots::Bisection;
///
/// let mut bis = Bisection::new(|x: f64| x * x - 4.0, 0.0, 3.0, 1e-10).unwrap();
/// assert_eq!(bis.iterations(), 35);
/// let r = bis.solve().unwrap();
/// assert!((r.x - 2.0).abs() < 1e-10);
/// ```
#[derive(Clone)]
pub struct Bisection<T, F> {
    f: F,
    a: T,
    b: T,
    tol: T,
    iterations: usize,
    #[cfg(feature = "alloc")]
    label: Label,
}

impl<T: fmt::Debug, F> fmt::Debug for Bisection<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Bisection");
        s.field("a", &self.a);
        s.field("b", &self.b);
        s.field("tol", &self.tol);
        s.field("iterations", &self.iterations);
        #[cfg(feature = "alloc")]
        s.field("label", &self.label.get());
        s.finish_non_exhaustive()
    }
}

impl<T: FloatScalar, F: FnMut(T) -> T> Bisection<T, F> {
    /// Create a bisection handle over `[a, b]`.
    ///
    /// # Errors
    ///
    /// [`RootError::InvalidInput`] if `tol <= 1e-15`, `a >= b`, or the
    /// bracket is not finite.
    pub fn new(f: F, a: T, b: T, tol: T) -> Result<Self, RootError> {
        let min_tol: T = cast(MIN_TOL);
        if tol.is_nan() || tol <= min_tol {
            return Err(RootError::InvalidInput);
        }
        if !a.is_finite() || !b.is_finite() || a >= b || !(b - a).is_finite() {
            return Err(RootError::InvalidInput);
        }
        Ok(Self {
            f,
            a,
            b,
            tol,
            iterations: step_count(b - a, tol),
            #[cfg(feature = "alloc")]
            label: Label::default(),
        })
    }

    /// Attach a label used in diagnostics.
    #[cfg(feature = "alloc")]
    pub fn with_name(mut self, name: impl Into<alloc::string::String>) -> Self {
        self.label.set(name.into());
        self
    }

    /// Label attached with [`with_name`](Self::with_name), if any.
    #[cfg(feature = "alloc")]
    pub fn name(&self) -> Option<&str> {
        self.label.get()
    }

    /// Number of halvings `solve()` performs.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Current bracket `(a, b)`.
    pub fn bracket(&self) -> (T, T) {
        (self.a, self.b)
    }

    /// Midpoint of the current bracket.
    pub fn midpoint(&self) -> T {
        (self.a + self.b) / cast::<T>(2.0)
    }

    pub fn tolerance(&self) -> T {
        self.tol
    }

    /// Run the bisection.
    ///
    /// A root exactly at an endpoint is returned immediately. An exact zero
    /// at a midpoint collapses the bracket onto it.
    ///
    /// # Errors
    ///
    /// [`RootError::BracketInvalid`] if `f(a)` and `f(b)` have the same sign
    /// or either is NaN.
    pub fn solve(&mut self) -> Result<RootResult<T>, RootError> {
        let zero = T::zero();
        let mut fa = (self.f)(self.a);
        let fb = (self.f)(self.b);
        let mut evals = 2usize;

        if fa == zero {
            return Ok(RootResult { x: self.a, fx: fa, iterations: 0, evals });
        }
        if fb == zero {
            return Ok(RootResult { x: self.b, fx: fb, iterations: 0, evals });
        }
        if fa.is_nan() || fb.is_nan() || (fa < zero) == (fb < zero) {
            diag_debug!(name = ?self.label.get(), "bisection bracket has no sign change");
            return Err(RootError::BracketInvalid);
        }

        let mut done = 0usize;
        for _ in 0..self.iterations {
            let m = self.midpoint();
            let fm = (self.f)(m);
            evals += 1;
            done += 1;
            diag_trace!(iter = done, ?m, "bisection step");

            if fm == zero {
                self.a = m;
                self.b = m;
                break;
            }
            // Sign comparison, not f(a) * f(m).
            if (fa < zero) != (fm < zero) {
                self.b = m;
            } else {
                self.a = m;
                fa = fm;
            }
        }

        let x = self.midpoint();
        let fx = (self.f)(x);
        evals += 1;
        diag_debug!(name = ?self.label.get(), iterations = done, "bisection converged");
        Ok(RootResult { x, fx, iterations: done, evals })
    }
}

/// Smallest `k` with `width / 2^k <= tol`.
fn step_count<T: FloatScalar>(width: T, tol: T) -> usize {
    let two: T = cast(2.0);
    let mut w = width;
    let mut k = 0usize;
    while w > tol {
        w = w / two;
        k += 1;
    }
    k
}
