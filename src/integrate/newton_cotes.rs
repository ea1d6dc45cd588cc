use crate::traits::{cast, FloatScalar};

use super::IntegrateError;

fn check_interval<T: FloatScalar>(a: T, b: T) -> Result<(), IntegrateError> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(IntegrateError::InvalidInterval);
    }
    Ok(())
}

fn check_even(n: usize) -> Result<(), IntegrateError> {
    if n == 0 || n % 2 != 0 {
        return Err(IntegrateError::InvalidSubdivisions);
    }
    Ok(())
}

/// Composite Simpson weight of node `i` out of `0..=n`: 1, 4, 2, 4, …, 4, 1.
fn simpson_weight<T: FloatScalar>(i: usize, n: usize) -> T {
    if i == 0 || i == n {
        T::one()
    } else if i % 2 == 1 {
        cast::<T>(4.0)
    } else {
        cast::<T>(2.0)
    }
}

/// Composite trapezoidal rule over `n` equal panels of `[a, b]`.
///
/// ```
/// use numana::integrate::trapezoid;
///
/// // Exact for linear integrands
/// let v = trapezoid(|x: f64| 2.0 * x + 1.0, 0.0, 3.0, 4).unwrap();
/// assert!((v - 12.0).abs() < 1e-12);
/// ```
pub fn trapezoid<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    n: usize,
) -> Result<T, IntegrateError> {
    check_interval(a, b)?;
    if n == 0 {
        return Err(IntegrateError::InvalidSubdivisions);
    }

    let h = (b - a) / cast::<T>(n as f64);
    let mut sum = (f(a) + f(b)) * cast::<T>(0.5);
    for i in 1..n {
        sum = sum + f(a + cast::<T>(i as f64) * h);
    }

    diag_debug!(rule = "trapezoid", n, "quadrature done");
    Ok(sum * h)
}

/// Composite Simpson 1/3 rule over `n` (even) panels of `[a, b]`.
///
/// Exact for cubics.
pub fn simpson<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    n: usize,
) -> Result<T, IntegrateError> {
    check_interval(a, b)?;
    check_even(n)?;

    let h = (b - a) / cast::<T>(n as f64);
    let mut sum = T::zero();
    for i in 0..=n {
        let x = if i == n { b } else { a + cast::<T>(i as f64) * h };
        sum = sum + simpson_weight::<T>(i, n) * f(x);
    }

    diag_debug!(rule = "simpson", n, "quadrature done");
    Ok(sum * h / cast::<T>(3.0))
}

/// Double integral of `f(x, y)` over the box `[xa, xb] × [yc, yd]`.
///
/// Product Simpson rule with `n` (even) panels in `x` and `m` (even) in `y`:
/// the weight of grid node `(i, j)` is `w_i · w_j` and the sum is scaled by
/// `h·k/9`. `f` is called `(n + 1)(m + 1)` times.
///
/// ```
/// use numana::integrate::double_simpson;
///
/// let v = double_simpson(|x: f64, y: f64| x * y, (0.0, 1.0), (0.0, 2.0), 2, 2).unwrap();
/// assert!((v - 1.0).abs() < 1e-14);
/// ```
pub fn double_simpson<T: FloatScalar>(
    mut f: impl FnMut(T, T) -> T,
    (xa, xb): (T, T),
    (yc, yd): (T, T),
    n: usize,
    m: usize,
) -> Result<T, IntegrateError> {
    check_interval(xa, xb)?;
    check_interval(yc, yd)?;
    check_even(n)?;
    check_even(m)?;

    let h = (xb - xa) / cast::<T>(n as f64);
    let k = (yd - yc) / cast::<T>(m as f64);

    let mut total = T::zero();
    for j in 0..=m {
        let y = if j == m { yd } else { yc + cast::<T>(j as f64) * k };
        let wy = simpson_weight::<T>(j, m);
        for i in 0..=n {
            let x = if i == n { xb } else { xa + cast::<T>(i as f64) * h };
            total = total + simpson_weight::<T>(i, n) * wy * f(x, y);
        }
    }

    diag_debug!(rule = "double_simpson", n, m, "quadrature done");
    Ok(total * h * k / cast::<T>(9.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights() {
        let w: [f64; 5] = core::array::from_fn(|i| simpson_weight(i, 4));
        assert_eq!(w, [1.0, 4.0, 2.0, 4.0, 1.0]);
    }

    #[test]
    fn double_simpson_grid_ends_on_bounds() {
        let (xb, yd) = (0.3_f64, 0.7_f64);
        let mut last = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        double_simpson(
            |x: f64, y: f64| {
                last = (last.0.max(x), last.1.max(y));
                1.0
            },
            (0.1, xb),
            (0.1, yd),
            10,
            6,
        )
        .unwrap();
        assert_eq!(last, (xb, yd));
    }

    #[test]
    fn odd_counts_rejected() {
        assert_eq!(check_even(0), Err(IntegrateError::InvalidSubdivisions));
        assert_eq!(check_even(3), Err(IntegrateError::InvalidSubdivisions));
        assert_eq!(check_even(4), Ok(()));
    }
}
