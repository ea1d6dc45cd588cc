#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::linalg::gauss::select_pivot;
use crate::linalg::LinalgError;
use crate::strided::{Strided, StridedMut};
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

/// Perform LU decomposition with partial pivoting, in place (Doolittle).
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm[..n]` is reset to the identity and then records every row swap, so
/// row `i` of `P·A` is row `perm[i]` of the original `A`.
/// Returns `true` if the number of row swaps was even.
pub fn lu_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    perm: &mut [usize],
) -> Result<bool, LinalgError> {
    let n = a.nrows();
    if n == 0 || a.ncols() != n || perm.len() < n {
        return Err(LinalgError::InvalidInput);
    }

    for (i, p) in perm.iter_mut().take(n).enumerate() {
        *p = i;
    }

    let mut even = true;

    for k in 0..n {
        let piv = select_pivot(&*a, k, n)?;

        if piv != k {
            let (rk, rp) = a.two_rows_mut(k, piv, 0);
            rk.swap_with_slice(rp);
            perm.swap(k, piv);
            even = !even;
        }

        let akk = *a.get(k, k);
        for i in (k + 1)..n {
            let lik = *a.get(i, k) / akk;
            *a.get_mut(i, k) = lik;

            // Trailing update: a[i, k+1..] -= l(i,k) * a[k, k+1..]
            let (ri, rk) = a.two_rows_mut(i, k, k + 1);
            for (dst, &src) in ri.iter_mut().zip(rk.iter()) {
                *dst = *dst - lik * src;
            }
        }
    }

    diag_trace!(n, even, "lu decomposition done");
    Ok(even)
}

/// Solve Ax = b given the packed LU decomposition and permutation.
///
/// `lu` is the packed L/U matrix from [`lu_in_place`], `perm` its row
/// permutation. `b` (input) and `x` (output) are separate slices of
/// length at least n. Forward substitution runs on `P·b`, back substitution
/// on `U`. [`lu_solve`] is the checked entry point over flat buffers.
///
/// # Panics
///
/// If `perm`, `b` or `x` is shorter than `n`, or `perm` holds an index
/// `>= b.len()`.
pub fn lu_substitute<T: FloatScalar>(
    lu: &impl MatrixRef<T>,
    perm: &[usize],
    b: &[T],
    x: &mut [T],
) {
    let n = lu.nrows();

    // Apply permutation and forward substitution (solve Ly = Pb)
    for i in 0..n {
        let mut sum = b[perm[i]];
        for j in 0..i {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum;
    }

    // Back substitution (solve Ux = y)
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum / *lu.get(i, i);
    }
}

/// LU decomposition with partial pivoting of the `n x n` matrix stored
/// row-major in `a` with row stride `stride >= n`.
///
/// `a` is overwritten with the packed factors (see [`lu_in_place`]) and
/// `piv[..n]` receives the permutation. Returns `Ok(true)` when the number
/// of row swaps is even, which fixes the sign of the determinant.
///
/// # Errors
///
/// [`LinalgError::InvalidInput`] if `n == 0`, `stride < n`, `a` is too short
/// or `piv.len() < n`. [`LinalgError::Singular`] if a pivot falls below the
/// threshold.
///
/// # Example
///
/// ```
/// use numana::linalg::{lu_decompose, lu_extract};
///
/// let mut a = [4.0_f64, 3.0, 6.0, 3.0];
/// let mut piv = [0usize; 2];
/// let even = lu_decompose(2, &mut a, 2, &mut piv).unwrap();
/// assert!(!even);
/// assert_eq!(piv, [1, 0]);
///
/// let (mut l, mut u) = ([0.0; 4], [0.0; 4]);
/// lu_extract(2, &a, 2, &mut l, 2, &mut u, 2).unwrap();
/// assert_eq!(l[0], 1.0);
/// assert_eq!(u[0], 6.0);
/// ```
pub fn lu_decompose<T: FloatScalar>(
    n: usize,
    a: &mut [T],
    stride: usize,
    piv: &mut [usize],
) -> Result<bool, LinalgError> {
    if n == 0 {
        return Err(LinalgError::InvalidInput);
    }
    let mut view = StridedMut::new(a, n, n, stride).ok_or(LinalgError::InvalidInput)?;
    lu_in_place(&mut view, piv)
}

/// Split packed LU factors into an explicit unit-lower `L` and upper `U`.
///
/// `lu` is read with stride `stride`; `l` and `u` are written with their own
/// strides `ldl` and `ldu`. Only the leading `n x n` block of each output is
/// touched.
///
/// # Errors
///
/// [`LinalgError::InvalidInput`] if any buffer is too short for its layout.
pub fn lu_extract<T: FloatScalar>(
    n: usize,
    lu: &[T],
    stride: usize,
    l: &mut [T],
    ldl: usize,
    u: &mut [T],
    ldu: usize,
) -> Result<(), LinalgError> {
    let lu = Strided::new(lu, n, n, stride).ok_or(LinalgError::InvalidInput)?;
    let mut l = StridedMut::new(l, n, n, ldl).ok_or(LinalgError::InvalidInput)?;
    let mut u = StridedMut::new(u, n, n, ldu).ok_or(LinalgError::InvalidInput)?;

    for i in 0..n {
        for j in 0..n {
            let v = lu[(i, j)];
            if i > j {
                l[(i, j)] = v;
                u[(i, j)] = T::zero();
            } else if i == j {
                l[(i, j)] = T::one();
                u[(i, j)] = v;
            } else {
                l[(i, j)] = T::zero();
                u[(i, j)] = v;
            }
        }
    }
    Ok(())
}

/// Solve `A x = b` from the packed factors produced by [`lu_decompose`].
///
/// # Errors
///
/// [`LinalgError::InvalidInput`] if `n == 0`, a buffer is too short for its
/// layout, or `piv` holds an index `>= n`.
///
/// ```
/// use numana::linalg::{lu_decompose, lu_solve};
///
/// let mut a = [2.0_f64, 1.0, 5.0, 3.0];
/// let mut piv = [0usize; 2];
/// lu_decompose(2, &mut a, 2, &mut piv).unwrap();
///
/// let mut x = [0.0; 2];
/// lu_solve(2, &a, 2, &piv, &[4.0, 11.0], &mut x).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
pub fn lu_solve<T: FloatScalar>(
    n: usize,
    lu: &[T],
    stride: usize,
    piv: &[usize],
    b: &[T],
    x: &mut [T],
) -> Result<(), LinalgError> {
    if n == 0 || piv.len() < n || b.len() < n || x.len() < n {
        return Err(LinalgError::InvalidInput);
    }
    if piv[..n].iter().any(|&p| p >= n) {
        return Err(LinalgError::InvalidInput);
    }
    let view = Strided::new(lu, n, n, stride).ok_or(LinalgError::InvalidInput)?;
    lu_substitute(&view, piv, b, x);
    Ok(())
}

/// Owned LU decomposition of an `n x n` matrix.
///
/// Stores the packed L/U factors (row-major, tight stride) and the
/// permutation vector. Use `solve()` or `det()` to work with the
/// decomposition, `l()` / `u()` to get explicit factors.
///
/// # Example
///
/// ```
/// use numana::linalg::LuDecomposition;
///
/// let a = [2.0_f64, 1.0, 5.0, 3.0];
/// let lu = LuDecomposition::new(2, &a, 2).unwrap();
///
/// let x = lu.solve(&[4.0, 11.0]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
///
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[cfg(feature = "alloc")]
#[derive(Debug, Clone)]
pub struct LuDecomposition<T> {
    lu: Vec<T>,
    perm: Vec<usize>,
    n: usize,
    even: bool,
}

#[cfg(feature = "alloc")]
impl<T: FloatScalar> LuDecomposition<T> {
    /// Decompose the `n x n` matrix stored in `a` with row stride `stride`.
    /// `a` itself is left untouched.
    pub fn new(n: usize, a: &[T], stride: usize) -> Result<Self, LinalgError> {
        if n == 0 {
            return Err(LinalgError::InvalidInput);
        }
        let src = Strided::new(a, n, n, stride).ok_or(LinalgError::InvalidInput)?;
        let mut lu = Vec::with_capacity(n * n);
        for i in 0..n {
            lu.extend_from_slice(src.row_as_slice(i, 0));
        }

        let mut perm = alloc::vec![0usize; n];
        let even = {
            let mut view = StridedMut::new(&mut lu, n, n, n).ok_or(LinalgError::InvalidInput)?;
            lu_in_place(&mut view, &mut perm)?
        };
        Ok(Self { lu, perm, n, even })
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Solve Ax = b for x.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, LinalgError> {
        if b.len() < self.n {
            return Err(LinalgError::InvalidInput);
        }
        let mut x = alloc::vec![T::zero(); self.n];
        lu_solve(self.n, &self.lu, self.n, &self.perm, b, &mut x)?;
        Ok(x)
    }

    /// Compute the determinant.
    pub fn det(&self) -> T {
        let mut d = if self.even { T::one() } else { T::zero() - T::one() };
        for i in 0..self.n {
            d = d * self.lu[i * self.n + i];
        }
        d
    }

    /// Unit lower-triangular factor, row-major `n x n`.
    pub fn l(&self) -> Vec<T> {
        let n = self.n;
        let mut l = alloc::vec![T::zero(); n * n];
        for i in 0..n {
            l[i * n..i * n + i].copy_from_slice(&self.lu[i * n..i * n + i]);
            l[i * n + i] = T::one();
        }
        l
    }

    /// Upper-triangular factor, row-major `n x n`.
    pub fn u(&self) -> Vec<T> {
        let n = self.n;
        let mut u = alloc::vec![T::zero(); n * n];
        for i in 0..n {
            u[i * n + i..(i + 1) * n].copy_from_slice(&self.lu[i * n + i..(i + 1) * n]);
        }
        u
    }

    /// Row permutation: row `i` of `P·A` is row `perm()[i]` of `A`.
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Packed factors with tight stride `n`.
    pub fn packed(&self) -> &[T] {
        &self.lu
    }
}
