use core::ops::{Index, IndexMut};

use crate::dense::Matrix;
use crate::linalg::LinalgError;
use crate::traits::{check_index, MatrixMut, MatrixRef, Scalar};

use super::{PackedMatrix, PackedStorage, SymmetricMatrix};

/// Lower-triangular `n x n` matrix in packed storage.
///
/// Entries on and below the diagonal are stored; entries above it read as
/// zero and refuse writes with [`LinalgError::OutsideTriangle`].
///
/// ```
/// use lamina::{LowerTriangularMatrix, MatrixMut, MatrixRef};
/// use lamina::linalg::LinalgError;
///
/// let mut l = LowerTriangularMatrix::zeros(3);
/// l.set(2, 1, 4.0_f64).unwrap();
/// assert_eq!(l.get(2, 1), Ok(4.0));
/// assert_eq!(l.get(1, 2), Ok(0.0));
/// assert_eq!(
///     l.set(1, 2, 1.0),
///     Err(LinalgError::OutsideTriangle { row: 1, col: 2 })
/// );
/// ```
#[derive(Debug, PartialEq)]
pub struct LowerTriangularMatrix<T> {
    storage: PackedStorage<T>,
    // target of `Index` above the diagonal; never handed out mutably
    zero: T,
}

impl<T: Scalar> LowerTriangularMatrix<T> {
    /// `n x n` matrix with every entry on and below the diagonal set to
    /// `value`.
    pub fn new(n: usize, value: T) -> Self {
        Self {
            storage: PackedStorage::new(n, value),
            zero: T::zero(),
        }
    }

    /// `n x n` zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self::new(n, T::zero())
    }

    /// Pack the lower triangle of a dense matrix.
    ///
    /// Fails with [`LinalgError::NotLowerTriangular`] if any entry above the
    /// diagonal is nonzero.
    pub fn from_dense(m: &Matrix<T>) -> Result<Self, LinalgError> {
        if !m.is_lower_triangular() {
            return Err(LinalgError::NotLowerTriangular);
        }
        Ok(Self {
            storage: PackedStorage::from_fn(m.dimension(), |r, c| m[(r, c)]),
            zero: T::zero(),
        })
    }

    /// Logical dimension `n`.
    #[inline]
    pub fn size(&self) -> usize {
        self.storage.dim()
    }

    /// `L * Lᵗ`, which is symmetric by construction.
    ///
    /// ```
    /// use lamina::{LowerTriangularMatrix, MatrixMut, MatrixRef};
    ///
    /// let mut l = LowerTriangularMatrix::zeros(2);
    /// l.set(0, 0, 2.0_f64).unwrap();
    /// l.set(1, 0, 1.0).unwrap();
    /// l.set(1, 1, 3.0).unwrap();
    /// let s = l.mul_transpose();
    /// assert_eq!(s.get(0, 0), Ok(4.0));
    /// assert_eq!(s.get(0, 1), Ok(2.0));
    /// assert_eq!(s.get(1, 1), Ok(10.0));
    /// ```
    pub fn mul_transpose(&self) -> SymmetricMatrix<T> {
        let storage = PackedStorage::from_fn(self.size(), |i, j| {
            // j <= i, so row j of L ends first
            let mut sum = T::zero();
            for k in 0..=j {
                sum = sum + *self.storage.cell(i, k) * *self.storage.cell(j, k);
            }
            sum
        });
        SymmetricMatrix::from_storage(storage)
    }

    pub(crate) fn from_storage(storage: PackedStorage<T>) -> Self {
        Self {
            storage,
            zero: T::zero(),
        }
    }
}

impl<T: Clone> Clone for LowerTriangularMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            zero: self.zero.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
    }
}

impl<T: Scalar> MatrixRef<T> for LowerTriangularMatrix<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.storage.dim()
    }

    #[inline]
    fn entry(&self, row: usize, col: usize) -> T {
        if col > row {
            T::zero()
        } else {
            *self.storage.cell(row, col)
        }
    }
}

impl<T: Scalar> MatrixMut<T> for LowerTriangularMatrix<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, LinalgError> {
        check_index(row, col, self.storage.dim())?;
        if col > row {
            return Err(LinalgError::OutsideTriangle { row, col });
        }
        Ok(self.storage.cell_mut(row, col))
    }
}

impl<T: Scalar> PackedMatrix<T> for LowerTriangularMatrix<T> {
    fn storage(&self) -> &PackedStorage<T> {
        &self.storage
    }
}

impl<T> Index<(usize, usize)> for LowerTriangularMatrix<T> {
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
        if col > row {
            &self.zero
        } else {
            self.storage.cell(row, col)
        }
    }
}

impl<T> IndexMut<(usize, usize)> for LowerTriangularMatrix<T> {
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
        assert!(
            col <= row,
            "entry ({}, {}) lies above the diagonal of a lower triangular matrix",
            row,
            col,
        );
        self.storage.cell_mut(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LowerTriangularMatrix<f64> {
        let mut l = LowerTriangularMatrix::zeros(3);
        let mut v = 1.0;
        for i in 0..3 {
            for j in 0..=i {
                l.set(i, j, v).unwrap();
                v += 1.0;
            }
        }
        l
    }

    #[test]
    fn reads_zero_above_diagonal() {
        let l = sample();
        for i in 0..3 {
            for j in 0..3 {
                let got = l.get(i, j).unwrap();
                if j > i {
                    assert_eq!(got, 0.0);
                    assert_eq!(l[(i, j)], 0.0);
                } else {
                    assert_eq!(got, *l.storage.cell(i, j));
                    assert!(got > 0.0);
                }
            }
        }
    }

    #[test]
    fn new_fills_lower_triangle_only() {
        let l = LowerTriangularMatrix::new(2, 3.0_f64);
        assert_eq!(l.get(1, 0), Ok(3.0));
        assert_eq!(l.get(0, 1), Ok(0.0));
        assert_eq!(l.packed_len(), 3);
    }

    #[test]
    fn write_above_diagonal_fails_without_mutation() {
        let mut l = sample();
        let before = l.clone();
        assert_eq!(
            l.set(0, 2, 9.0),
            Err(LinalgError::OutsideTriangle { row: 0, col: 2 })
        );
        assert_eq!(l, before);
    }

    #[test]
    fn out_of_bounds() {
        let mut l = sample();
        assert_eq!(
            l.get(3, 0),
            Err(LinalgError::IndexOutOfBounds { row: 3, col: 0, dim: 3 })
        );
        assert_eq!(
            l.set(0, 3, 1.0),
            Err(LinalgError::IndexOutOfBounds { row: 0, col: 3, dim: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "above the diagonal")]
    fn index_mut_above_diagonal_panics() {
        let mut l = sample();
        l[(0, 1)] = 1.0;
    }

    #[test]
    fn dense_round_trip() {
        let m = Matrix::from_rows(3, &[1.0, 0.0, 0.0, 2.0, 3.0, 0.0, 4.0, 5.0, 6.0]);
        let l = LowerTriangularMatrix::from_dense(&m).unwrap();
        assert_eq!(l.as_packed_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(l.to_dense(), m);
    }

    #[test]
    fn from_dense_rejects_upper_entries() {
        let m = Matrix::from_rows(2, &[1.0, 1.0, 0.0, 1.0]);
        assert_eq!(
            LowerTriangularMatrix::from_dense(&m),
            Err(LinalgError::NotLowerTriangular)
        );
    }

    #[test]
    fn mul_transpose_matches_dense_product() {
        let l = sample();
        let dense = l.to_dense();
        let expected = &dense * &dense.transpose();
        assert_eq!(l.mul_transpose().to_dense(), expected);
    }

    #[test]
    fn clone_is_independent() {
        let a = sample();
        let mut b = a.clone();
        b.set(1, 1, -1.0).unwrap();
        assert_eq!(a.get(1, 1), Ok(3.0));
    }
}
