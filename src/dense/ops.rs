use core::ops::{Add, Mul, Neg, Sub};

use crate::traits::{MatrixRef, Scalar};

use super::{Matrix, Vector};

// Operators panic on mismatched lengths; the `checked_*` methods on
// `Vector` and `MatrixRef::mul_vec` report the same condition as an error.

// ── Vector + Vector ─────────────────────────────────────────────────

impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "vector length mismatch: {} + {}",
            self.len(),
            rhs.len(),
        );
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: Vector<T>) -> Vector<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Vector<T>> for Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        &self + rhs
    }
}

// ── Vector - Vector ─────────────────────────────────────────────────

impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "vector length mismatch: {} - {}",
            self.len(),
            rhs.len(),
        );
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: Vector<T>) -> Vector<T> {
        &self - &rhs
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        let data = self.data.into_iter().map(|x| -x).collect();
        Vector { data }
    }
}

// ── Vector * scalar ─────────────────────────────────────────────────

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        let data = self.data.iter().map(|&x| x * rhs).collect();
        Vector { data }
    }
}

// ── Vector * Vector (dot product) ───────────────────────────────────

impl<T: Scalar> Mul<&Vector<T>> for &Vector<T> {
    type Output = T;

    fn mul(self, rhs: &Vector<T>) -> T {
        self.dot(rhs)
    }
}

impl<T: Scalar> Mul for Vector<T> {
    type Output = T;

    fn mul(self, rhs: Vector<T>) -> T {
        self.dot(&rhs)
    }
}

// ── scalar * vector / matrix (concrete impls) ───────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

// ── Matrix products ─────────────────────────────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        Matrix {
            data: self.data.iter().map(|&x| x * rhs).collect(),
            dim: self.dim,
        }
    }
}

impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.dim,
            rhs.len(),
            "matrix size does not match vector size: {}x{} * {}",
            self.dim,
            self.dim,
            rhs.len(),
        );
        let mut out = Vector::zeros(self.dim);
        // Column-major: accumulate x[j] * column j
        for j in 0..self.dim {
            let xj = rhs[j];
            let col = &self.data[j * self.dim..(j + 1) * self.dim];
            for (o, &a) in out.data.iter_mut().zip(col.iter()) {
                *o = *o + a * xj;
            }
        }
        out
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.dim, rhs.dim,
            "dimension mismatch: {}x{} * {}x{}",
            self.dim, self.dim, rhs.dim, rhs.dim,
        );
        let n = self.dim;
        Matrix::from_fn(n, |i, j| {
            let mut sum = T::zero();
            for k in 0..n {
                sum = sum + self.entry(i, k) * rhs.entry(k, j);
            }
            sum
        })
    }
}
