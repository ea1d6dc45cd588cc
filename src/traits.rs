use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Every kernel in this crate is generic over `FloatScalar`, so `f32` and
/// `f64` both work. Numeric thresholds are specified as `f64` and cast into
/// `T` at the use site.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Cast an `f64` constant into `T`.
///
/// Every finite `f64` is representable (possibly rounded, possibly
/// saturating to infinity) in `f32` and `f64`, so the conversion cannot fail
/// for the float types this crate supports.
#[inline]
pub(crate) fn cast<T: FloatScalar>(v: f64) -> T {
    T::from(v).unwrap()
}

/// Read-only access to a matrix-like type.
///
/// Kernels take `&impl MatrixRef<T>` so they work on any row-major view,
/// including [`Strided`](crate::strided::Strided) windows into a larger
/// buffer.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// Contiguous slice of row `row`, from `col_start` to the last logical column.
    fn row_as_slice(&self, row: usize, col_start: usize) -> &[T];
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms (Gaussian elimination, LU, etc.) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Mutable contiguous slice of row `row`, from `col_start` to the last
    /// logical column.
    fn row_as_mut_slice(&mut self, row: usize, col_start: usize) -> &mut [T];

    /// Mutable slices of two different rows at once. Requires `a != b`.
    fn two_rows_mut(&mut self, a: usize, b: usize, col_start: usize) -> (&mut [T], &mut [T]);
}
