use crate::traits::{cast, FloatScalar};

use super::IntegrateError;

fn check_step<T: FloatScalar>(h: T, steps: usize) -> Result<(), IntegrateError> {
    if !h.is_finite() || h <= T::zero() {
        return Err(IntegrateError::InvalidStep);
    }
    if steps == 0 {
        return Err(IntegrateError::InvalidSubdivisions);
    }
    Ok(())
}

/// Forward Euler for `y' = f(t, y)`.
///
/// Takes `steps` steps of size `h` from `(t0, y0)` and returns `y(t0 + steps·h)`.
/// The callback takes time first and state second: `f(t, y)`. Both have
/// type `T`, so a swapped closure still compiles.
///
/// # Errors
///
/// [`IntegrateError::InvalidStep`] unless `h` is positive and finite;
/// [`IntegrateError::InvalidSubdivisions`] if `steps == 0`.
///
/// ```
/// use numana::integrate::euler;
///
/// // y' = y, one step of 0.5 from y = 2
/// let y = euler(|_t, y: f64| y, 0.0, 2.0, 0.5, 1).unwrap();
/// assert_eq!(y, 3.0);
/// ```
pub fn euler<T: FloatScalar>(
    mut f: impl FnMut(T, T) -> T,
    t0: T,
    y0: T,
    h: T,
    steps: usize,
) -> Result<T, IntegrateError> {
    check_step(h, steps)?;

    let mut t = t0;
    let mut y = y0;
    for _ in 0..steps {
        y = y + h * f(t, y);
        t = t + h;
    }

    diag_debug!(method = "euler", steps, ?y, "integration done");
    Ok(y)
}

/// Single step of the classic 4th-order Runge-Kutta method.
///
/// Advances `y` from `t` to `t + h` using `f(t, y) -> dy/dt`.
///
/// ```
/// use numana::integrate::rk4_step;
///
/// // dy/dt = -y (exponential decay)
/// let y1 = rk4_step(|_t, y: f64| -y, 0.0, 1.0, 0.01);
/// assert!((y1 - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
pub fn rk4_step<T: FloatScalar>(mut f: impl FnMut(T, T) -> T, t: T, y: T, h: T) -> T {
    let half = cast::<T>(0.5);
    let two = cast::<T>(2.0);
    let six = cast::<T>(6.0);

    let k1 = h * f(t, y);
    let k2 = h * f(t + half * h, y + half * k1);
    let k3 = h * f(t + half * h, y + half * k2);
    let k4 = h * f(t + h, y + k3);

    y + (k1 + two * k2 + two * k3 + k4) / six
}

/// Integrate `y' = f(t, y)` with `steps` fixed RK4 steps of size `h`.
///
/// Returns the state at `t0 + steps·h`. Argument order is `f(t, y)`, time
/// first, as in [`euler`].
///
/// # Errors
///
/// As [`euler`].
///
/// ```
/// use numana::integrate::rk4;
///
/// // y' = y from y(0) = 1 to t = 1
/// let y = rk4(|_t, y: f64| y, 0.0, 1.0, 0.01, 100).unwrap();
/// assert!((y - core::f64::consts::E).abs() < 1e-9);
/// ```
pub fn rk4<T: FloatScalar>(
    mut f: impl FnMut(T, T) -> T,
    t0: T,
    y0: T,
    h: T,
    steps: usize,
) -> Result<T, IntegrateError> {
    check_step(h, steps)?;

    let mut t = t0;
    let mut y = y0;
    for _i in 0..steps {
        y = rk4_step(&mut f, t, y, h);
        t = t + h;
        diag_trace!(step = _i, ?t, ?y, "rk4 step");
    }

    diag_debug!(method = "rk4", steps, ?y, "integration done");
    Ok(y)
}
