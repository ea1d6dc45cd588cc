use crate::traits::{cast, FloatScalar};

use super::{Dataset, InterpError, Point, NODE_TOL};

/// Lagrange interpolating polynomial in the classical product form.
///
/// Evaluation is O(N²): every call rebuilds each basis polynomial
/// `L_k(x) = Π_{j≠k} (x - x_j) / (x_k - x_j)`.
///
/// # Example
///
/// ```
/// use numana::interp::{LagrangeInterp, Point};
///
/// // Exact for polynomials of degree ≤ 2
/// let pts = [Point::new(1.0_f64, 1.0), Point::new(2.0, 4.0), Point::new(3.0, 9.0)];
/// let interp = LagrangeInterp::new(&pts).unwrap();
/// assert!((interp.eval(7.0).unwrap() - 49.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct LagrangeInterp<T> {
    data: Dataset<T>,
}

impl<T: FloatScalar> LagrangeInterp<T> {
    /// Copy `points` into a new interpolant. Fails only on empty input.
    pub fn new(points: &[Point<T>]) -> Result<Self, InterpError> {
        Ok(Self {
            data: Dataset::new(points)?,
        })
    }

    pub fn from_dataset(data: Dataset<T>) -> Self {
        Self { data }
    }

    pub fn dataset(&self) -> &Dataset<T> {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Basis polynomial `L_k(x)`.
    ///
    /// # Errors
    ///
    /// [`InterpError::DivideByZero`] if another node lies within
    /// [`NODE_TOL`] of `x_k`.
    ///
    /// # Panics
    ///
    /// If `k >= self.len()`.
    pub fn basis(&self, k: usize, x: T) -> Result<T, InterpError> {
        let tol: T = cast(NODE_TOL);
        let pts = self.data.points();
        let xk = pts[k].x;
        let mut product = T::one();
        for (i, p) in pts.iter().enumerate() {
            if i == k {
                continue;
            }
            let denom = xk - p.x;
            if denom.abs() < tol {
                return Err(InterpError::DivideByZero);
            }
            product = product * ((x - p.x) / denom);
        }
        Ok(product)
    }

    /// Evaluate `P(x) = Σ y_k L_k(x)`.
    ///
    /// A single point gives the constant polynomial. When a basis is
    /// undefined because of coincident nodes, a query that itself lands on
    /// a node (within [`NODE_TOL`]) returns that node's `y`.
    ///
    /// # Errors
    ///
    /// [`InterpError::DivideByZero`] if the nodes coincide and `x` is not one
    /// of them.
    pub fn eval(&self, x: T) -> Result<T, InterpError> {
        let pts = self.data.points();
        if pts.len() == 1 {
            return Ok(pts[0].y);
        }

        let mut sum = T::zero();
        for (k, p) in pts.iter().enumerate() {
            match self.basis(k, x) {
                Ok(lk) => sum = sum + p.y * lk,
                Err(e) => {
                    let tol: T = cast(NODE_TOL);
                    return pts
                        .iter()
                        .find(|q| (x - q.x).abs() < tol)
                        .map(|q| q.y)
                        .ok_or(e);
                }
            }
        }
        Ok(sum)
    }
}
