//! Row-major views over flat buffers with an explicit row stride.
//!
//! Element `(row, col)` lives at `data[row * stride + col]`. The stride (the
//! leading dimension) may exceed the logical column count, so a view can
//! address a sub-matrix of a wider buffer.
//!
//! ```
//! use numana::strided::Strided;
//! use numana::MatrixRef;
//!
//! // 2x2 window into a buffer laid out with 3 columns per row.
//! let buf = [1.0_f64, 2.0, 99.0, 3.0, 4.0, 99.0];
//! let view = Strided::new(&buf, 2, 2, 3).unwrap();
//! assert_eq!(*view.get(1, 0), 3.0);
//! assert_eq!(view.row_as_slice(1, 0), &[3.0, 4.0]);
//! ```

use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef};

/// Check that a buffer of `len` elements can hold an `nrows x ncols` view
/// with the given stride.
fn fits(len: usize, nrows: usize, ncols: usize, stride: usize) -> bool {
    if stride < ncols {
        return false;
    }
    if nrows == 0 || ncols == 0 {
        return true;
    }
    (nrows - 1)
        .checked_mul(stride)
        .and_then(|off| off.checked_add(ncols))
        .is_some_and(|need| len >= need)
}

/// Read-only strided view.
#[derive(Debug, Clone, Copy)]
pub struct Strided<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
    stride: usize,
}

impl<'a, T> Strided<'a, T> {
    /// Wrap `data` as an `nrows x ncols` view.
    ///
    /// Returns `None` if `stride < ncols` or `data` is too short.
    pub fn new(data: &'a [T], nrows: usize, ncols: usize, stride: usize) -> Option<Self> {
        if !fits(data.len(), nrows, ncols, stride) {
            return None;
        }
        Some(Self {
            data,
            nrows,
            ncols,
            stride,
        })
    }

    /// Distance between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl<T> MatrixRef<T> for Strided<'_, T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.stride + col]
    }

    #[inline]
    fn row_as_slice(&self, row: usize, col_start: usize) -> &[T] {
        let base = row * self.stride;
        &self.data[base + col_start..base + self.ncols]
    }
}

impl<T> Index<(usize, usize)> for Strided<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
    }
}

/// Mutable strided view.
///
/// In-place kernels ([`gauss_in_place`](crate::linalg::gauss_in_place),
/// [`lu_in_place`](crate::linalg::lu_in_place)) write through this view.
#[derive(Debug)]
pub struct StridedMut<'a, T> {
    data: &'a mut [T],
    nrows: usize,
    ncols: usize,
    stride: usize,
}

impl<'a, T> StridedMut<'a, T> {
    /// Wrap `data` as a mutable `nrows x ncols` view.
    ///
    /// Returns `None` if `stride < ncols` or `data` is too short.
    pub fn new(data: &'a mut [T], nrows: usize, ncols: usize, stride: usize) -> Option<Self> {
        if !fits(data.len(), nrows, ncols, stride) {
            return None;
        }
        Some(Self {
            data,
            nrows,
            ncols,
            stride,
        })
    }

    /// Distance between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> Strided<'_, T> {
        Strided {
            data: &self.data[..],
            nrows: self.nrows,
            ncols: self.ncols,
            stride: self.stride,
        }
    }
}

impl<T> MatrixRef<T> for StridedMut<'_, T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.stride + col]
    }

    #[inline]
    fn row_as_slice(&self, row: usize, col_start: usize) -> &[T] {
        let base = row * self.stride;
        &self.data[base + col_start..base + self.ncols]
    }
}

impl<T> MatrixMut<T> for StridedMut<'_, T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.stride + col]
    }

    #[inline]
    fn row_as_mut_slice(&mut self, row: usize, col_start: usize) -> &mut [T] {
        let base = row * self.stride;
        &mut self.data[base + col_start..base + self.ncols]
    }

    fn two_rows_mut(&mut self, a: usize, b: usize, col_start: usize) -> (&mut [T], &mut [T]) {
        assert_ne!(a, b, "two_rows_mut requires distinct rows");
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * self.stride);
        let lo_row = &mut head[lo * self.stride + col_start..lo * self.stride + self.ncols];
        let hi_row = &mut tail[col_start..self.ncols];
        if a < b {
            (lo_row, hi_row)
        } else {
            (hi_row, lo_row)
        }
    }
}

impl<T> Index<(usize, usize)> for StridedMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for StridedMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.get_mut(row, col)
    }
}
