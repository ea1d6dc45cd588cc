//! # numana
//!
//! Classical numerical-analysis kernels, no-std compatible: dense linear
//! solvers, scalar root finders, polynomial interpolation, quadrature and
//! fixed-step ODE integration. Every kernel works on caller-supplied buffers
//! and closures and is generic over `f32` / `f64`.
//!
//! ## Quick start
//!
//! ```
//! use numana::linalg::gauss_solve;
//!
//! // Augmented 3x4 matrix [A | b], row-major, stride 4.
//! let mut a = [
//!     2.0_f64, 1.0, -1.0, 8.0,
//!     -3.0, -1.0, 2.0, -11.0,
//!     -2.0, 1.0, 2.0, -3.0,
//! ];
//! let mut x = [0.0; 3];
//! gauss_solve(3, &mut a, 4, &mut x).unwrap(); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`linalg`]: Gaussian elimination and Gauss-Jordan on an augmented
//!   matrix, Doolittle LU with partial pivoting, L/U extraction and LU
//!   solve. Flat-buffer functions take an explicit row stride; the
//!   `*_in_place` kernels take any `&mut impl MatrixMut<T>`.
//!
//! - [`roots`]: Scalar root finding: [`roots::Bisection`],
//!   [`roots::NewtonRaphson`] (finite-difference derivative),
//!   [`roots::Secant`] and [`roots::FixedPoint`] (successive approximation).
//!
//! - [`interp`]: Lagrange, Newton divided-difference and Hermite
//!   interpolating polynomials (requires `alloc`).
//!
//! - [`integrate`]: Composite trapezoid and Simpson rules, 2-D Simpson,
//!   forward Euler, classical RK4 and adaptive RK4 quadrature.
//!
//! - [`strided`]: [`Strided`] / [`StridedMut`] row-major views with a
//!   leading dimension.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all numeric elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by every kernel
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impls |
//! | `alloc`   | via std  | Interpolants, `LuDecomposition`, solver labels |
//! | `tracing` | no       | Implies `alloc`; `debug!` / `trace!` events from the iterative solvers |
//! | `all`     | no       | All features: `std` + `tracing` |
//!
//! Without `std`, float math goes through the pure-Rust `libm` backend of
//! `num-traits`, which is always enabled.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Diagnostics hooks. Expand to `tracing` events with the `tracing` feature,
// to nothing otherwise.
#[cfg(feature = "tracing")]
macro_rules! diag_debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! diag_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! diag_trace {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! diag_trace {
    ($($arg:tt)*) => {};
}

pub mod integrate;
#[cfg(feature = "alloc")]
pub mod interp;
pub mod linalg;
pub mod roots;
pub mod strided;
pub mod traits;

pub use strided::{Strided, StridedMut};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
