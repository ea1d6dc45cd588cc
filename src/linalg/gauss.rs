use crate::linalg::{LinalgError, PIVOT_THRESHOLD};
use crate::strided::StridedMut;
use crate::traits::{cast, FloatScalar, MatrixMut, MatrixRef};

/// Row index in `k..n` holding the largest `|a[i, k]|`.
///
/// Ties keep the earliest row. Fails with `Singular` when the largest
/// magnitude is below [`PIVOT_THRESHOLD`].
pub(crate) fn select_pivot<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    k: usize,
    n: usize,
) -> Result<usize, LinalgError> {
    let mut piv = k;
    let mut max_val = a.get(k, k).abs();
    for i in (k + 1)..n {
        let v = a.get(i, k).abs();
        if v > max_val {
            max_val = v;
            piv = i;
        }
    }
    let threshold: T = cast(PIVOT_THRESHOLD);
    if max_val.is_nan() || max_val < threshold {
        diag_debug!(column = k, "singular pivot");
        return Err(LinalgError::Singular);
    }
    Ok(piv)
}

/// Divide row `k` (from `col_start`) by its diagonal entry.
fn normalize_row<T: FloatScalar>(a: &mut impl MatrixMut<T>, k: usize, col_start: usize) {
    let akk = *a.get(k, k);
    for v in a.row_as_mut_slice(k, col_start) {
        *v = *v / akk;
    }
}

/// `row_i -= factor * row_k`, from `col_start` onward.
fn subtract_row<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    i: usize,
    k: usize,
    factor: T,
    col_start: usize,
) {
    let (ri, rk) = a.two_rows_mut(i, k, col_start);
    for (dst, &src) in ri.iter_mut().zip(rk.iter()) {
        *dst = *dst - factor * src;
    }
}

fn check_augmented<T>(a: &impl MatrixRef<T>, x: &[T]) -> Result<usize, LinalgError> {
    let n = a.nrows();
    if n == 0 || a.ncols() != n + 1 || x.len() < n {
        return Err(LinalgError::InvalidInput);
    }
    Ok(n)
}

/// Gaussian elimination with partial pivoting on an `n x (n+1)` augmented
/// matrix `[A | b]`, in place.
///
/// Each pivot row is normalized so the diagonal becomes 1, entries below it
/// are eliminated (rows whose multiplier is already below the pivot
/// threshold are left alone), and `x` is recovered by back substitution.
/// On return `a` holds the reduced upper-triangular system.
pub fn gauss_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    x: &mut [T],
) -> Result<(), LinalgError> {
    let n = check_augmented(&*a, x)?;
    let eps: T = cast(PIVOT_THRESHOLD);

    for k in 0..n {
        let piv = select_pivot(&*a, k, n)?;
        if piv != k {
            let (rk, rp) = a.two_rows_mut(k, piv, k);
            rk.swap_with_slice(rp);
        }

        normalize_row(a, k, k);

        for i in (k + 1)..n {
            let lik = *a.get(i, k);
            if lik.abs() < eps {
                continue;
            }
            subtract_row(a, i, k, lik, k);
        }
    }

    // Back substitution, unit diagonal.
    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum = sum + *a.get(i, j) * x[j];
        }
        x[i] = *a.get(i, n) - sum;
    }

    diag_trace!(n, "gauss elimination done");
    Ok(())
}

/// Gauss-Jordan elimination with partial pivoting on an `n x (n+1)`
/// augmented matrix, in place.
///
/// Reduces `a` to `[I | x]` by eliminating above and below every pivot,
/// then copies the last column into `x`.
pub fn gauss_jordan_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    x: &mut [T],
) -> Result<(), LinalgError> {
    let n = check_augmented(&*a, x)?;

    for k in 0..n {
        let piv = select_pivot(&*a, k, n)?;
        if piv != k {
            let (rk, rp) = a.two_rows_mut(k, piv, 0);
            rk.swap_with_slice(rp);
        }

        normalize_row(a, k, 0);

        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = *a.get(i, k);
            if factor == T::zero() {
                continue;
            }
            subtract_row(a, i, k, factor, 0);
        }
    }

    for (i, xi) in x.iter_mut().take(n).enumerate() {
        *xi = *a.get(i, n);
    }

    diag_trace!(n, "gauss-jordan elimination done");
    Ok(())
}

fn augmented_view<T>(
    n: usize,
    a: &mut [T],
    stride: usize,
) -> Result<StridedMut<'_, T>, LinalgError> {
    if n == 0 {
        return Err(LinalgError::InvalidInput);
    }
    let ncols = n.checked_add(1).ok_or(LinalgError::InvalidInput)?;
    StridedMut::new(a, n, ncols, stride).ok_or(LinalgError::InvalidInput)
}

/// Solve `A x = b` by Gaussian elimination with partial pivoting.
///
/// `a` is the row-major augmented matrix `[A | b]` with `n` rows and row
/// stride `stride >= n + 1`; it is overwritten. The solution is written to
/// `x[..n]`.
///
/// # Errors
///
/// [`LinalgError::InvalidInput`] if `n == 0`, `stride < n + 1`, `a` is too
/// short for the layout, or `x.len() < n`.
/// [`LinalgError::Singular`] if no pivot reaches the threshold.
///
/// # Example
///
/// ```
/// use numana::linalg::gauss_solve;
///
/// // 2x2 system in a buffer with one padding column per row.
/// let mut a = [
///     1.0_f64, 1.0, 3.0, 0.0,
///     1.0, -1.0, 1.0, 0.0,
/// ];
/// let mut x = [0.0; 2];
/// gauss_solve(2, &mut a, 4, &mut x).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 1.0).abs() < 1e-12);
/// ```
pub fn gauss_solve<T: FloatScalar>(
    n: usize,
    a: &mut [T],
    stride: usize,
    x: &mut [T],
) -> Result<(), LinalgError> {
    let mut view = augmented_view(n, a, stride)?;
    gauss_in_place(&mut view, x)
}

/// Solve `A x = b` by Gauss-Jordan elimination with partial pivoting.
///
/// Same layout and errors as [`gauss_solve`]. On success the left block of
/// `a` has been reduced to the identity.
///
/// ```
/// use numana::linalg::gauss_jordan_solve;
///
/// let mut a = [
///     2.0_f64, 1.0, -1.0, 8.0,
///     -3.0, -1.0, 2.0, -11.0,
///     -2.0, 1.0, 2.0, -3.0,
/// ];
/// let mut x = [0.0; 3];
/// gauss_jordan_solve(3, &mut a, 4, &mut x).unwrap();
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// ```
pub fn gauss_jordan_solve<T: FloatScalar>(
    n: usize,
    a: &mut [T],
    stride: usize,
    x: &mut [T],
) -> Result<(), LinalgError> {
    let mut view = augmented_view(n, a, stride)?;
    gauss_jordan_in_place(&mut view, x)
}
