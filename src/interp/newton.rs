use alloc::vec::Vec;
use core::fmt;

use crate::traits::{cast, FloatScalar};

use super::{Dataset, InterpError, Point, NODE_TOL};

/// Newton form of the interpolating polynomial.
///
/// The divided-difference table is built once in O(N²) at construction;
/// evaluation is an O(N) Horner pass and never mutates the table.
///
/// `P(x) = c_0 + c_1 (x - x_0) + c_2 (x - x_0)(x - x_1) + …`
///
/// # Example
///
/// ```
/// use numana::interp::{Dataset, NewtonInterp, Point};
///
/// let data = Dataset::new(&[Point::new(0.0_f64, 1.0), Point::new(1.0, 3.0)]).unwrap();
/// let p = NewtonInterp::new(&data).unwrap();
/// assert_eq!(p.coefficients(), &[1.0, 2.0]);
/// assert_eq!(p.eval(2.0), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonInterp<T> {
    coeffs: Vec<T>,
    nodes: Vec<T>,
}

impl<T: FloatScalar> NewtonInterp<T> {
    /// Build the divided-difference table for `data`.
    ///
    /// # Errors
    ///
    /// [`InterpError::DivideByZero`] if two nodes are within [`NODE_TOL`].
    pub fn new(data: &Dataset<T>) -> Result<Self, InterpError> {
        Self::build(data.points())
    }

    pub fn from_points(points: &[Point<T>]) -> Result<Self, InterpError> {
        if points.is_empty() {
            return Err(InterpError::Empty);
        }
        Self::build(points)
    }

    fn build(points: &[Point<T>]) -> Result<Self, InterpError> {
        let tol: T = cast(NODE_TOL);
        let n = points.len();
        let nodes: Vec<T> = points.iter().map(|p| p.x).collect();
        let mut coeffs: Vec<T> = points.iter().map(|p| p.y).collect();

        // In place, order j: c[i] = (c[i] - c[i-1]) / (x_i - x_{i-j}) for i = n-1 down to j.
        for j in 1..n {
            for i in (j..n).rev() {
                let denom = nodes[i] - nodes[i - j];
                if denom.abs() < tol {
                    return Err(InterpError::DivideByZero);
                }
                coeffs[i] = (coeffs[i] - coeffs[i - 1]) / denom;
            }
        }

        Ok(Self { coeffs, nodes })
    }

    /// Evaluate by Horner's scheme from the highest-order coefficient.
    pub fn eval(&self, x: T) -> T {
        let n = self.coeffs.len();
        let mut result = self.coeffs[n - 1];
        for i in (0..n - 1).rev() {
            result = result * (x - self.nodes[i]) + self.coeffs[i];
        }
        result
    }

    /// Divided differences `f[x_0], f[x_0, x_1], …`.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T: FloatScalar + fmt::Display> fmt::Display for NewtonInterp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Newton table (size: {}):", self.len())?;
        write!(f, "  nodes:       ")?;
        for x in &self.nodes {
            write!(f, " {:>10.4}", x)?;
        }
        writeln!(f)?;
        write!(f, "  differences: ")?;
        for c in &self.coeffs {
            write!(f, " {:>10.4}", c)?;
        }
        Ok(())
    }
}
