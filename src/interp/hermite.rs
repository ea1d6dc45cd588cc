use alloc::vec::Vec;

use crate::traits::{cast, FloatScalar};

use super::{HermitePoint, InterpError, NODE_TOL};

/// Hermite interpolating polynomial matching values and first derivatives.
///
/// Built from divided differences over the doubled node sequence
/// `z = (x_0, x_0, x_1, x_1, …)`: a first-order difference on a repeated
/// pair is the given slope, every other entry follows the usual recurrence.
/// `n` points give a polynomial of degree `2n - 1`.
///
/// # Example
///
/// ```
/// use numana::interp::{HermiteInterp, HermitePoint};
///
/// // Samples of x² with slope 2x
/// let pts = [
///     HermitePoint::new(1.0_f64, 1.0, 2.0),
///     HermitePoint::new(2.0, 4.0, 4.0),
///     HermitePoint::new(3.0, 9.0, 6.0),
/// ];
/// let h = HermiteInterp::new(&pts).unwrap();
/// let (y, dy) = h.eval_derivative(2.5);
/// assert!((y - 6.25).abs() < 1e-12);
/// assert!((dy - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct HermiteInterp<T> {
    coeffs: Vec<T>,
    z: Vec<T>,
}

impl<T: FloatScalar> HermiteInterp<T> {
    /// # Errors
    ///
    /// [`InterpError::Empty`] for no points; [`InterpError::DivideByZero`] if
    /// two data nodes are within [`NODE_TOL`].
    pub fn new(points: &[HermitePoint<T>]) -> Result<Self, InterpError> {
        if points.is_empty() {
            return Err(InterpError::Empty);
        }
        let tol: T = cast(NODE_TOL);
        let m = 2 * points.len();

        let mut z = Vec::with_capacity(m);
        let mut c = Vec::with_capacity(m);
        for p in points {
            z.push(p.x);
            z.push(p.x);
            c.push(p.y);
            c.push(p.y);
        }

        // First order. Odd i sits on a repeated pair; even i spans two data nodes.
        for i in (1..m).rev() {
            if i % 2 == 1 {
                c[i] = points[i / 2].dy;
            } else {
                let denom = z[i] - z[i - 1];
                if denom.abs() < tol {
                    return Err(InterpError::DivideByZero);
                }
                c[i] = (c[i] - c[i - 1]) / denom;
            }
        }

        for j in 2..m {
            for i in (j..m).rev() {
                let denom = z[i] - z[i - j];
                if denom.abs() < tol {
                    return Err(InterpError::DivideByZero);
                }
                c[i] = (c[i] - c[i - 1]) / denom;
            }
        }

        Ok(Self { coeffs: c, z })
    }

    /// Build from parallel slices of nodes, values and slopes.
    pub fn from_slices(xs: &[T], ys: &[T], dys: &[T]) -> Result<Self, InterpError> {
        if xs.len() != ys.len() || xs.len() != dys.len() {
            return Err(InterpError::LengthMismatch);
        }
        let points: Vec<HermitePoint<T>> = xs
            .iter()
            .zip(ys)
            .zip(dys)
            .map(|((&x, &y), &dy)| HermitePoint { x, y, dy })
            .collect();
        Self::new(&points)
    }

    /// Evaluate the interpolant at `x`.
    pub fn eval(&self, x: T) -> T {
        let m = self.coeffs.len();
        let mut result = self.coeffs[m - 1];
        for i in (0..m - 1).rev() {
            result = result * (x - self.z[i]) + self.coeffs[i];
        }
        result
    }

    /// Evaluate the interpolant and its derivative at `x`.
    pub fn eval_derivative(&self, x: T) -> (T, T) {
        let m = self.coeffs.len();
        let mut result = self.coeffs[m - 1];
        let mut deriv = T::zero();
        for i in (0..m - 1).rev() {
            deriv = deriv * (x - self.z[i]) + result;
            result = result * (x - self.z[i]) + self.coeffs[i];
        }
        (result, deriv)
    }

    /// Divided differences over the doubled nodes.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// The doubled node sequence `z`.
    pub fn nodes(&self) -> &[T] {
        &self.z
    }

    /// Number of data points (half the number of coefficients).
    pub fn len(&self) -> usize {
        self.z.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }
}
