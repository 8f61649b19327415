use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

use crate::dense::{Matrix, Vector};
use crate::linalg::LinalgError;

/// Trait for types that can be used as matrix and vector elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by everything that needs `sqrt`, `abs` or `powi`: norms,
/// solvers, power iteration, Cholesky and polynomials.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a square matrix-like type.
///
/// Implemented by the dense [`Matrix`] and by both packed variants, so the
/// algorithms that only read entries (matrix-vector products, dense
/// conversion) are written once.
pub trait MatrixRef<T: Scalar> {
    /// Logical dimension `n` of the `n x n` matrix.
    fn dim(&self) -> usize;

    /// Entry at `(row, col)` without bounds checking beyond what the
    /// backing storage does. Callers guarantee `row, col < dim()`.
    fn entry(&self, row: usize, col: usize) -> T;

    /// Bounds-checked entry at `(row, col)`.
    ///
    /// ```
    /// use lamina::{Matrix, MatrixRef};
    /// use lamina::linalg::LinalgError;
    ///
    /// let m = Matrix::new(2, 3.0_f64);
    /// assert_eq!(m.get(1, 1), Ok(3.0));
    /// assert_eq!(
    ///     m.get(2, 0),
    ///     Err(LinalgError::IndexOutOfBounds { row: 2, col: 0, dim: 2 })
    /// );
    /// ```
    fn get(&self, row: usize, col: usize) -> Result<T, LinalgError> {
        check_index(row, col, self.dim())?;
        Ok(self.entry(row, col))
    }

    /// Matrix-vector product `A x`.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] if `x.len() != dim()`.
    fn mul_vec(&self, x: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        let n = self.dim();
        if x.len() != n {
            return Err(LinalgError::DimensionMismatch {
                matrix: n,
                vector: x.len(),
            });
        }
        let mut out = Vector::zeros(n);
        for i in 0..n {
            let mut sum = T::zero();
            for j in 0..n {
                sum = sum + self.entry(i, j) * x[j];
            }
            out[i] = sum;
        }
        Ok(out)
    }

    /// Copy into a dense column-major [`Matrix`].
    fn to_dense(&self) -> Matrix<T> {
        Matrix::from_fn(self.dim(), |i, j| self.entry(i, j))
    }
}

/// Mutable access to a square matrix-like type.
///
/// Writes are always bounds-checked; types with an implicit triangle
/// (lower-triangular storage) refuse writes into it.
pub trait MatrixMut<T: Scalar>: MatrixRef<T> {
    /// Mutable reference to the storage cell behind `(row, col)`.
    fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, LinalgError>;

    /// Write `value` at `(row, col)`.
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), LinalgError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }
}

#[inline]
pub(crate) fn check_index(row: usize, col: usize, dim: usize) -> Result<(), LinalgError> {
    if row >= dim || col >= dim {
        return Err(LinalgError::IndexOutOfBounds { row, col, dim });
    }
    Ok(())
}
