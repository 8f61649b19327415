//! Heap-allocated square matrices and vectors with runtime dimensions.
//!
//! Both types own a `Vec<T>`; checked accessors return
//! [`LinalgError`] while `Index`/`IndexMut` and the arithmetic operators
//! panic on bad indices or mismatched sizes.

mod classify;
mod norm;
mod ops;
mod util;
mod vector;

pub use vector::Vector;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::linalg::LinalgError;
use crate::traits::{check_index, FloatScalar, MatrixMut, MatrixRef, Scalar};

/// Dense square matrix with runtime dimension.
///
/// Column-major `Vec<T>` storage: entry `(row, col)` lives at
/// `col * dim + row`. The matrix owns its buffer; `clone` is a deep copy
/// and `clone_from` reuses the destination buffer when it can.
///
/// # Examples
///
/// ```
/// use lamina::{Matrix, MatrixMut, MatrixRef};
///
/// let mut a = Matrix::new(3, 0.0_f64);
/// a.set(1, 2, 42.0).unwrap();
/// assert_eq!(a.get(1, 2), Ok(42.0));
/// assert_eq!(a[(1, 2)], 42.0);
/// assert_eq!(a.dimension(), 3);
///
/// let b = Matrix::<f64>::eye(3);
/// assert_eq!(b.trace(), 3.0);
/// ```
#[derive(Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    dim: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create a `dim x dim` matrix with every entry set to `fill`.
    ///
    /// ```
    /// use lamina::Matrix;
    /// let m = Matrix::new(2, 7.0_f64);
    /// assert_eq!(m[(0, 0)], 7.0);
    /// assert_eq!(m[(1, 1)], 7.0);
    /// ```
    pub fn new(dim: usize, fill: T) -> Self {
        Self {
            data: vec![fill; dim * dim],
            dim,
        }
    }

    /// Create a `dim x dim` zero matrix.
    pub fn zeros(dim: usize) -> Self {
        Self::new(dim, T::zero())
    }

    /// Create a `dim x dim` identity matrix.
    ///
    /// ```
    /// use lamina::Matrix;
    /// let id = Matrix::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Transposes the data to column-major internal storage.
    /// Panics if `row_major.len() != dim * dim`.
    ///
    /// ```
    /// use lamina::Matrix;
    /// let m = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_rows(dim: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            dim * dim,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            dim,
            dim,
        );
        let mut data = vec![T::zero(); dim * dim];
        for i in 0..dim {
            for j in 0..dim {
                data[j * dim + i] = row_major[i * dim + j];
            }
        }
        Self { data, dim }
    }
}

impl<T> Matrix<T> {
    /// Create a matrix by calling `f(row, col)` for each entry.
    ///
    /// ```
    /// use lamina::Matrix;
    /// let m = Matrix::from_fn(3, |i, j| (i * 3 + j) as f64);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// assert_eq!(m[(2, 0)], 6.0);
    /// ```
    pub fn from_fn(dim: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(dim * dim);
        for j in 0..dim {
            for i in 0..dim {
                data.push(f(i, j));
            }
        }
        Self { data, dim }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Column-major view of the coefficient buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: FloatScalar + SampleUniform> Matrix<T> {
    /// Create a matrix with entries drawn uniformly from `[low, high)`.
    ///
    /// Fails with [`LinalgError::InvalidRange`] unless `low < high` and the
    /// width of the range is finite.
    ///
    /// ```
    /// use lamina::Matrix;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let m = Matrix::random(4, -1.0_f64, 1.0, &mut rng).unwrap();
    /// assert!(m.as_slice().iter().all(|&x| (-1.0..1.0).contains(&x)));
    /// ```
    pub fn random<R: Rng + ?Sized>(
        dim: usize,
        low: T,
        high: T,
        rng: &mut R,
    ) -> Result<Self, LinalgError> {
        if !(low < high) || !(high - low).is_finite() {
            return Err(LinalgError::InvalidRange);
        }
        let dist = Uniform::new(low, high);
        let data = (0..dim * dim).map(|_| dist.sample(rng)).collect();
        Ok(Self { data, dim })
    }

    /// [`Matrix::random`] using the thread-local generator.
    #[cfg(feature = "std")]
    pub fn random_uniform(dim: usize, low: T, high: T) -> Result<Self, LinalgError> {
        Self::random(dim, low, high, &mut rand::thread_rng())
    }
}

// ── Clone ───────────────────────────────────────────────────────────

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            dim: self.dim,
        }
    }

    /// Deep copy into `self`, keeping the existing allocation when the
    /// dimensions already agree.
    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.dim = source.dim;
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T: Scalar> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    fn entry(&self, row: usize, col: usize) -> T {
        self.data[col * self.dim + row]
    }
}

impl<T: Scalar> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, LinalgError> {
        check_index(row, col, self.dim)?;
        Ok(&mut self.data[col * self.dim + row])
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.dim && col < self.dim,
            "index out of bound: ({}, {}) in {}x{} matrix",
            row,
            col,
            self.dim,
            self.dim,
        );
        &self.data[col * self.dim + row]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.dim && col < self.dim,
            "index out of bound: ({}, {}) in {}x{} matrix",
            row,
            col,
            self.dim,
            self.dim,
        );
        &mut self.data[col * self.dim + row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn new_fills() {
        let m = Matrix::new(3, 2.5_f64);
        assert_eq!(m.dimension(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 2.5);
            }
        }
    }

    #[test]
    fn zero_dimension() {
        let m = Matrix::<f64>::zeros(0);
        assert_eq!(m.dimension(), 0);
        assert!(m.as_slice().is_empty());
        assert!(m.get(0, 0).is_err());
    }

    #[test]
    fn column_major_layout() {
        let m = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = Matrix::from_rows(2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn set_and_get() {
        let mut m = Matrix::zeros(3);
        m.set(1, 2, 42.0).unwrap();
        assert_eq!(m.get(1, 2), Ok(42.0));
        assert_eq!(m.get(2, 1), Ok(0.0));
    }

    #[test]
    fn set_out_of_bounds_leaves_matrix_untouched() {
        let mut m = Matrix::new(2, 1.0_f64);
        let before = m.clone();
        assert_eq!(
            m.set(0, 2, 9.0),
            Err(LinalgError::IndexOutOfBounds { row: 0, col: 2, dim: 2 })
        );
        assert_eq!(m, before);
    }

    #[test]
    #[should_panic(expected = "index out of bound")]
    fn index_row_out_of_bounds() {
        // (2, 0) would alias (0, 1) in the flat buffer without the check
        let m = Matrix::<f64>::zeros(2);
        let _ = m[(2, 0)];
    }

    #[test]
    fn clone_is_independent() {
        let a = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
        let mut b = a.clone();
        assert_eq!(a, b);
        b[(0, 0)] = 100.0;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn clone_from_resizes() {
        let src = Matrix::new(3, 5.0_f64);
        let mut dst = Matrix::new(2, 0.0_f64);
        dst.clone_from(&src);
        assert_eq!(dst.dimension(), 3);
        assert_eq!(dst, src);

        let mut same = Matrix::new(3, 1.0_f64);
        same.clone_from(&src);
        assert_eq!(same[(2, 2)], 5.0);
    }

    #[test]
    fn random_in_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let m = Matrix::random(5, 2.0_f64, 3.0, &mut rng).unwrap();
        assert_eq!(m.dimension(), 5);
        for &x in m.as_slice() {
            assert!((2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let a = Matrix::random(3, 0.0_f64, 1.0, &mut rand::rngs::StdRng::seed_from_u64(1)).unwrap();
        let b = Matrix::random(3, 0.0_f64, 1.0, &mut rand::rngs::StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_rejects_empty_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        assert_eq!(
            Matrix::random(2, 1.0_f64, 1.0, &mut rng),
            Err(LinalgError::InvalidRange)
        );
        assert_eq!(
            Matrix::random(2, 1.0_f64, -1.0, &mut rng),
            Err(LinalgError::InvalidRange)
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn random_uniform_thread_rng() {
        let m = Matrix::random_uniform(2, -5.0_f64, 5.0).unwrap();
        assert!(m.max_norm() < 5.0);
    }
}
