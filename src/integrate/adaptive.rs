use crate::traits::{cast, FloatScalar};

use super::IntegrateError;

const DEFAULT_ABS_TOL: f64 = 1e-9;
const DEFAULT_REL_TOL: f64 = 1e-9;
const DEFAULT_MAX_ITERATIONS: usize = 20;
const INITIAL_STEPS: usize = 8;

/// Settings for [`rk4_adaptive`].
///
/// Fields that are not positive (including NaN tolerances) are replaced by
/// their defaults when the integrator runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveSettings<T> {
    /// Absolute error tolerance (default: 1e-9).
    pub abs_tol: T,
    /// Relative error tolerance (default: 1e-9).
    pub rel_tol: T,
    /// Maximum number of step-doubling rounds (default: 20).
    pub max_iterations: usize,
}

impl<T: FloatScalar> Default for AdaptiveSettings<T> {
    fn default() -> Self {
        Self {
            abs_tol: cast(DEFAULT_ABS_TOL),
            rel_tol: cast(DEFAULT_REL_TOL),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl<T: FloatScalar> AdaptiveSettings<T> {
    fn resolved(&self) -> Self {
        let defaults = Self::default();
        Self {
            abs_tol: if self.abs_tol > T::zero() { self.abs_tol } else { defaults.abs_tol },
            rel_tol: if self.rel_tol > T::zero() { self.rel_tol } else { defaults.rel_tol },
            max_iterations: if self.max_iterations > 0 {
                self.max_iterations
            } else {
                defaults.max_iterations
            },
        }
    }
}

/// How [`rk4_adaptive`] finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadStatus {
    /// The error estimate met the tolerance.
    Converged,
    /// The doubling budget ran out; the value is the last estimate.
    MaxStepsReached,
}

/// Result of an adaptive quadrature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadResult<T> {
    /// Integral estimate.
    pub value: T,
    /// Richardson error estimate of `value`.
    pub error: T,
    /// Total integrand evaluations.
    pub evals: usize,
    /// Number of RK4 steps behind `value`.
    pub steps: usize,
    pub status: QuadStatus,
}

/// One fixed-step pass. Returns the integral and the number of evaluations.
///
/// For `y' = f(x)` the two midpoint stages of RK4 coincide, so each step
/// costs three evaluations.
fn fixed_pass<T: FloatScalar>(f: &mut impl FnMut(T) -> T, a: T, b: T, steps: usize) -> (T, usize) {
    let half = cast::<T>(0.5);
    let four = cast::<T>(4.0);
    let six = cast::<T>(6.0);

    let h = (b - a) / cast::<T>(steps as f64);
    let mut y = T::zero();
    for i in 0..steps {
        let x = a + cast::<T>(i as f64) * h;
        let k1 = f(x);
        let k2 = f(x + half * h);
        let k4 = f(x + h);
        y = y + h / six * (k1 + four * k2 + k4);
    }
    (y, 3 * steps)
}

fn check_bounds<T: FloatScalar>(a: T, b: T) -> Result<(), IntegrateError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(IntegrateError::InvalidInterval);
    }
    Ok(())
}

/// `∫_a^b f(x) dx` as the IVP `y' = f(x), y(a) = 0`, solved with `steps`
/// equal RK4 steps.
///
/// `b < a` integrates backwards and gives the negated integral.
///
/// # Errors
///
/// [`IntegrateError::InvalidInterval`] for non-finite bounds;
/// [`IntegrateError::InvalidSubdivisions`] if `steps == 0`.
///
/// ```
/// use numana::integrate::rk4_fixed;
///
/// let v = rk4_fixed(|x: f64| x.exp(), 0.0, 1.0, 2000).unwrap();
/// assert!((v - (core::f64::consts::E - 1.0)).abs() < 1e-12);
/// ```
pub fn rk4_fixed<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    steps: usize,
) -> Result<T, IntegrateError> {
    check_bounds(a, b)?;
    if steps == 0 {
        return Err(IntegrateError::InvalidSubdivisions);
    }
    Ok(fixed_pass(&mut f, a, b, steps).0)
}

/// Adaptive `∫_a^b f(x) dx` by RK4 step doubling with Richardson error control.
///
/// Starts from 8 steps and doubles the count each round. With `I_n` the
/// fixed-step estimate, the error of `I_2n` is taken as
/// `|I_2n - I_n| / 15` (RK4 is 4th order, `2⁴ - 1 = 15`) and the round is
/// accepted once it is at most `max(abs_tol, rel_tol·|I_2n|)`.
///
/// Running out of rounds is not an error: the last estimate comes back with
/// [`QuadStatus::MaxStepsReached`]. `a == b` returns zero without calling `f`.
///
/// # Errors
///
/// [`IntegrateError::InvalidInterval`] for non-finite bounds.
///
/// ```
/// use numana::integrate::{rk4_adaptive, AdaptiveSettings, QuadStatus};
///
/// let q = rk4_adaptive(|x: f64| x.sin(), 0.0, core::f64::consts::PI,
///     &AdaptiveSettings::default()).unwrap();
/// assert_eq!(q.status, QuadStatus::Converged);
/// assert!((q.value - 2.0).abs() < 1e-8);
/// ```
pub fn rk4_adaptive<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &AdaptiveSettings<T>,
) -> Result<QuadResult<T>, IntegrateError> {
    check_bounds(a, b)?;
    if a == b {
        return Ok(QuadResult {
            value: T::zero(),
            error: T::zero(),
            evals: 0,
            steps: 0,
            status: QuadStatus::Converged,
        });
    }

    let cfg = settings.resolved();
    let fifteen = cast::<T>(15.0);

    let mut steps = INITIAL_STEPS;
    let (mut prev, mut evals) = fixed_pass(&mut f, a, b, steps);
    let mut error = T::infinity();

    for _round in 0..cfg.max_iterations {
        steps = match steps.checked_mul(2) {
            Some(s) => s,
            None => break,
        };
        let (refined, n) = fixed_pass(&mut f, a, b, steps);
        evals += n;

        error = (refined - prev).abs() / fifteen;
        let scale = cfg.abs_tol.max(cfg.rel_tol * refined.abs());
        diag_trace!(round = _round, steps, ?refined, ?error, "rk4 adaptive round");

        if error <= scale {
            diag_debug!(rounds = _round + 1, steps, evals, "rk4 adaptive converged");
            return Ok(QuadResult {
                value: refined,
                error,
                evals,
                steps,
                status: QuadStatus::Converged,
            });
        }
        prev = refined;
    }

    diag_debug!(steps, evals, ?error, "rk4 adaptive hit the round limit");
    Ok(QuadResult {
        value: prev,
        error,
        evals,
        steps,
        status: QuadStatus::MaxStepsReached,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_fallback() {
        let s = AdaptiveSettings {
            abs_tol: -1.0_f64,
            rel_tol: f64::NAN,
            max_iterations: 0,
        }
        .resolved();
        assert_eq!(s, AdaptiveSettings::default());

        let custom = AdaptiveSettings {
            abs_tol: 1e-3_f64,
            rel_tol: 1e-4,
            max_iterations: 5,
        };
        assert_eq!(custom.resolved(), custom);
    }

    #[test]
    fn pass_counts_evaluations() {
        let mut calls = 0;
        let (v, n) = fixed_pass(
            &mut |x: f64| {
                calls += 1;
                x
            },
            0.0,
            1.0,
            4,
        );
        assert!((v - 0.5).abs() < 1e-15);
        assert_eq!(n, 12);
        assert_eq!(calls, 12);
    }
}
