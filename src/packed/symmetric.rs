use core::ops::{Index, IndexMut};

use crate::dense::Matrix;
use crate::linalg::LinalgError;
use crate::traits::{check_index, MatrixMut, MatrixRef, Scalar};

use super::{PackedMatrix, PackedStorage};

/// Symmetric `n x n` matrix in packed storage.
///
/// `(row, col)` and `(col, row)` address the same stored cell, so a write
/// through either is visible through both.
///
/// ```
/// use lamina::SymmetricMatrix;
///
/// let mut s = SymmetricMatrix::<f64>::identity(3);
/// s[(2, 0)] = 0.5;
/// assert_eq!(s[(0, 2)], 0.5);
/// ```
#[derive(Debug, PartialEq)]
pub struct SymmetricMatrix<T> {
    storage: PackedStorage<T>,
}

impl<T: Scalar> SymmetricMatrix<T> {
    /// `n x n` matrix with every entry set to `value`.
    pub fn new(n: usize, value: T) -> Self {
        Self {
            storage: PackedStorage::new(n, value),
        }
    }

    /// `n x n` zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self::new(n, T::zero())
    }

    /// `n x n` identity.
    pub fn identity(n: usize) -> Self {
        Self {
            storage: PackedStorage::from_fn(n, |r, c| if r == c { T::one() } else { T::zero() }),
        }
    }

    /// Pack a dense symmetric matrix.
    ///
    /// Fails with [`LinalgError::NotSymmetric`] unless `m` equals its
    /// transpose exactly.
    ///
    /// ```
    /// use lamina::{Matrix, MatrixRef, SymmetricMatrix};
    ///
    /// let m = Matrix::from_rows(2, &[4.0_f64, 1.0, 1.0, 3.0]);
    /// let s = SymmetricMatrix::from_dense(&m).unwrap();
    /// assert_eq!(s.to_dense(), m);
    /// ```
    pub fn from_dense(m: &Matrix<T>) -> Result<Self, LinalgError> {
        if !m.is_symmetric() {
            return Err(LinalgError::NotSymmetric);
        }
        Ok(Self {
            storage: PackedStorage::from_fn(m.dimension(), |r, c| m[(r, c)]),
        })
    }

    /// Logical dimension `n`.
    #[inline]
    pub fn size(&self) -> usize {
        self.storage.dim()
    }

    pub(crate) fn from_storage(storage: PackedStorage<T>) -> Self {
        Self { storage }
    }
}

impl<T: Clone> Clone for SymmetricMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
    }
}

impl<T: Scalar> MatrixRef<T> for SymmetricMatrix<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.storage.dim()
    }

    #[inline]
    fn entry(&self, row: usize, col: usize) -> T {
        *self.storage.cell(row, col)
    }
}

impl<T: Scalar> MatrixMut<T> for SymmetricMatrix<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, LinalgError> {
        check_index(row, col, self.storage.dim())?;
        Ok(self.storage.cell_mut(row, col))
    }
}

impl<T: Scalar> PackedMatrix<T> for SymmetricMatrix<T> {
    fn storage(&self) -> &PackedStorage<T> {
        &self.storage
    }
}

impl<T> Index<(usize, usize)> for SymmetricMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        let n = self.storage.dim();
        assert!(
            row < n && col < n,
            "index out of bound: ({}, {}) in {}x{} matrix",
            row,
            col,
            n,
            n,
        );
        self.storage.cell(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for SymmetricMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let n = self.storage.dim();
        assert!(
            row < n && col < n,
            "index out of bound: ({}, {}) in {}x{} matrix",
            row,
            col,
            n,
            n,
        );
        self.storage.cell_mut(row, col)
    }
}
