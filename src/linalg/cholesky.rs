use crate::linalg::LinalgError;
use crate::packed::{LowerTriangularMatrix, PackedStorage, SymmetricMatrix};
use crate::traits::FloatScalar;

impl<T: FloatScalar> SymmetricMatrix<T> {
    /// Cholesky factorization `A = L * Lᵗ`.
    ///
    /// Row by row, each entry of `L` uses only entries computed before it:
    ///
    /// - `L[i][j] = (A[i][j] - Σ_{k<j} L[i][k] L[j][k]) / L[j][j]` for `j < i`
    /// - `L[i][i] = sqrt(A[i][i] - Σ_{k<i} L[i][k]²)`
    ///
    /// Returns [`LinalgError::NotPositiveDefinite`] as soon as a diagonal
    /// residual is not strictly positive.
    ///
    /// ```
    /// use lamina::{Matrix, MatrixRef, SymmetricMatrix};
    ///
    /// let a = Matrix::from_rows(3, &[
    ///     4.0_f64, 2.0, 2.0,
    ///     2.0, 5.0, 3.0,
    ///     2.0, 3.0, 6.0,
    /// ]);
    /// let s = SymmetricMatrix::from_dense(&a).unwrap();
    /// let l = s.compute_cholesky().unwrap();
    /// assert_eq!(l.get(0, 0), Ok(2.0));
    /// assert_eq!(l.get(1, 0), Ok(1.0));
    /// assert_eq!(l.get(1, 1), Ok(2.0));
    ///
    /// let back = l.mul_transpose().to_dense();
    /// for i in 0..3 {
    ///     for j in 0..3 {
    ///         assert!((back[(i, j)] - a[(i, j)]).abs() < 1e-12);
    ///     }
    /// }
    /// ```
    pub fn compute_cholesky(&self) -> Result<LowerTriangularMatrix<T>, LinalgError> {
        let n = self.size();
        let mut l = PackedStorage::new(n, T::zero());

        for i in 0..n {
            for j in 0..i {
                let mut sum = self[(i, j)];
                for k in 0..j {
                    sum = sum - *l.cell(i, k) * *l.cell(j, k);
                }
                *l.cell_mut(i, j) = sum / *l.cell(j, j);
            }

            let mut diag = self[(i, i)];
            for k in 0..i {
                let lik = *l.cell(i, k);
                diag = diag - lik * lik;
            }
            // also rejects NaN
            if !(diag > T::zero()) {
                log::debug!("cholesky: non-positive pivot {:?} at row {}", diag, i);
                return Err(LinalgError::NotPositiveDefinite);
            }
            *l.cell_mut(i, i) = diag.sqrt();
        }

        Ok(LowerTriangularMatrix::from_storage(l))
    }
}
