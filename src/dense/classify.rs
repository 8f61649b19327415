use core::ops::Neg;

use crate::traits::Scalar;

use super::Matrix;

// Classifiers compare with exact `==`: a rounding error of one ulp is
// enough to flip the answer.

impl<T: Scalar> Matrix<T> {
    /// Sum of diagonal entries.
    ///
    /// ```
    /// use lamina::Matrix;
    /// let m = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..self.dim {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Whether every off-diagonal entry is exactly zero.
    pub fn is_diagonal(&self) -> bool {
        for j in 0..self.dim {
            for i in 0..self.dim {
                if i != j && self[(i, j)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Whether `a[i][j] == a[j][i]` for all `i, j`.
    ///
    /// ```
    /// use lamina::Matrix;
    /// let sym = Matrix::from_rows(2, &[1.0, 2.0, 2.0, 3.0]);
    /// assert!(sym.is_symmetric());
    /// ```
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.dim {
            for j in (i + 1)..self.dim {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    /// Whether every entry below the diagonal is exactly zero.
    pub fn is_upper_triangular(&self) -> bool {
        for j in 0..self.dim {
            for i in (j + 1)..self.dim {
                if self[(i, j)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Whether every entry above the diagonal is exactly zero.
    pub fn is_lower_triangular(&self) -> bool {
        for j in 0..self.dim {
            for i in 0..j {
                if self[(i, j)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Swap rows `a` and `b` in place.
    ///
    /// # Panics
    ///
    /// If either row is out of range. The matrix is left untouched.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(
            a < self.dim && b < self.dim,
            "index out of bound: rows ({}, {}) in {}x{} matrix",
            a,
            b,
            self.dim,
            self.dim,
        );
        if a == b {
            return;
        }
        for j in 0..self.dim {
            self.data.swap(j * self.dim + a, j * self.dim + b);
        }
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.dim, |i, j| self[(j, i)])
    }
}

impl<T: Scalar + Neg<Output = T>> Matrix<T> {
    /// Whether `a[i][j] == -a[j][i]` for all `i, j`, which forces a zero
    /// diagonal. Needs a signed element type.
    pub fn is_skew_symmetric(&self) -> bool {
        for i in 0..self.dim {
            for j in i..self.dim {
                if self[(i, j)] != -self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace() {
        assert_eq!(Matrix::<f64>::eye(4).trace(), 4.0);
        assert_eq!(Matrix::<f64>::zeros(0).trace(), 0.0);
    }

    #[test]
    fn diagonal() {
        assert!(Matrix::<f64>::eye(3).is_diagonal());
        let mut m = Matrix::<f64>::eye(3);
        m[(2, 0)] = 1.0;
        assert!(!m.is_diagonal());
    }

    #[test]
    fn symmetric() {
        let sym = Matrix::from_rows(3, &[1.0, 2.0, 3.0, 2.0, 4.0, 5.0, 3.0, 5.0, 6.0]);
        assert!(sym.is_symmetric());
        let asym = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
        assert!(!asym.is_symmetric());
    }

    #[test]
    fn symmetric_is_exact() {
        let mut m = Matrix::from_rows(2, &[1.0_f64, 0.3, 0.3, 1.0]);
        m[(1, 0)] = 0.1 + 0.2;
        // 0.1 + 0.2 != 0.3 in binary floating point
        assert!(!m.is_symmetric());
    }

    #[test]
    fn skew_symmetric() {
        let skew = Matrix::from_rows(3, &[0.0, 2.0, -1.0, -2.0, 0.0, 4.0, 1.0, -4.0, 0.0]);
        assert!(skew.is_skew_symmetric());

        // nonzero diagonal breaks skew symmetry
        let mut m = skew.clone();
        m[(1, 1)] = 1.0;
        assert!(!m.is_skew_symmetric());
    }

    #[test]
    fn triangular() {
        let upper = Matrix::from_rows(3, &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 0.0, 0.0, 6.0]);
        assert!(upper.is_upper_triangular());
        assert!(!upper.is_lower_triangular());

        let lower = upper.transpose();
        assert!(lower.is_lower_triangular());
        assert!(!lower.is_upper_triangular());

        let d = Matrix::<f64>::eye(3);
        assert!(d.is_upper_triangular() && d.is_lower_triangular());
    }

    #[test]
    fn swap_rows() {
        let mut m = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
        m.swap_rows(0, 1);
        assert_eq!(m, Matrix::from_rows(2, &[3.0, 4.0, 1.0, 2.0]));
        m.swap_rows(1, 1);
        assert_eq!(m[(1, 0)], 1.0);
    }

    #[test]
    #[should_panic(expected = "index out of bound")]
    fn swap_rows_out_of_range() {
        let mut m = Matrix::<f64>::eye(3);
        m.swap_rows(0, 3);
    }

    #[test]
    fn swap_rows_out_of_range_leaves_matrix_intact() {
        let before = Matrix::from_rows(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        for (a, b) in [(0, 3), (3, 0), (3, 3)] {
            let mut m = before.clone();
            let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| m.swap_rows(a, b)));
            assert!(res.is_err(), "swap_rows({}, {}) should panic", a, b);
            assert_eq!(m, before);
        }
    }

    #[test]
    fn skew_symmetric_integers() {
        let skew = Matrix::from_rows(2, &[0_i32, 3, -3, 0]);
        assert!(skew.is_skew_symmetric());
        assert!(!Matrix::from_rows(2, &[0_i32, 3, 3, 0]).is_skew_symmetric());
    }

    #[test]
    fn transpose() {
        let m = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
        let t = m.transpose();
        assert_eq!(t[(0, 1)], 3.0);
        assert_eq!(t[(1, 0)], 2.0);
        assert_eq!(t.transpose(), m);
    }
}
