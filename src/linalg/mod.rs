//! Dense linear systems: Gaussian elimination, Gauss-Jordan, LU.
//!
//! Every solver uses partial pivoting on the column magnitude and stops with
//! [`LinalgError::Singular`] when the best pivot is below
//! [`PIVOT_THRESHOLD`]. Two API layers are provided:
//!
//! - `*_in_place` kernels on any `&mut impl MatrixMut<T>`;
//! - flat-buffer functions ([`gauss_solve`], [`gauss_jordan_solve`],
//!   [`lu_decompose`], [`lu_extract`], [`lu_solve`]) taking a row-major
//!   buffer and its row stride, which wrap the buffer in a
//!   [`StridedMut`](crate::strided::StridedMut) view.

pub(crate) mod gauss;
pub(crate) mod lu;


pub use gauss::{gauss_in_place, gauss_jordan_in_place, gauss_jordan_solve, gauss_solve};
#[cfg(feature = "alloc")]
pub use lu::LuDecomposition;
pub use lu::{lu_decompose, lu_extract, lu_in_place, lu_solve, lu_substitute};

/// Smallest pivot magnitude accepted before a matrix is declared singular.
///
/// The test is absolute, so badly scaled systems may need rescaling first.
pub const PIVOT_THRESHOLD: f64 = 1e-12;

/// Errors from linear system solvers.
///
/// ```
/// use numana::linalg::{gauss_solve, LinalgError};
///
/// let mut a = [1.0_f64, 2.0, 3.0, 2.0, 4.0, 6.0];
/// let mut x = [0.0; 2];
/// assert_eq!(gauss_solve(2, &mut a, 3, &mut x), Err(LinalgError::Singular));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Zero dimension, stride narrower than a row, or a buffer too short.
    InvalidInput,
    /// Matrix is singular or nearly singular.
    Singular,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::InvalidInput => write!(f, "invalid dimensions, stride or buffer length"),
            LinalgError::Singular => write!(f, "matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
