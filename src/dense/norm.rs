use crate::traits::FloatScalar;

use super::Matrix;

impl<T: FloatScalar> Matrix<T> {
    /// Maximum absolute column sum (the induced 1-norm).
    ///
    /// Every column, including the first, contributes its sum of
    /// absolute values. Returns zero for the empty matrix.
    ///
    /// ```
    /// use lamina::Matrix;
    /// let m = Matrix::from_rows(2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.max_abs_column_sum_norm() - 6.0).abs() < 1e-12);
    /// ```
    pub fn max_abs_column_sum_norm(&self) -> T {
        let mut max = T::zero();
        for j in 0..self.dim {
            let mut col_sum = T::zero();
            for i in 0..self.dim {
                col_sum = col_sum + self[(i, j)].abs();
            }
            if col_sum > max {
                max = col_sum;
            }
        }
        max
    }

    /// Maximum absolute row sum (the induced infinity-norm).
    ///
    /// ```
    /// use lamina::Matrix;
    /// let m = Matrix::from_rows(2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.max_abs_row_sum_norm() - 7.0).abs() < 1e-12);
    /// ```
    pub fn max_abs_row_sum_norm(&self) -> T {
        let mut max = T::zero();
        for i in 0..self.dim {
            let mut row_sum = T::zero();
            for j in 0..self.dim {
                row_sum = row_sum + self[(i, j)].abs();
            }
            if row_sum > max {
                max = row_sum;
            }
        }
        max
    }

    /// Frobenius norm (square root of the sum of squared entries).
    ///
    /// ```
    /// use lamina::Matrix;
    /// let m = Matrix::from_rows(2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum.sqrt()
    }

    /// Largest absolute entry.
    pub fn max_norm(&self) -> T {
        let mut max = T::zero();
        for &x in &self.data {
            if x.abs() > max {
                max = x.abs();
            }
        }
        max
    }
}
