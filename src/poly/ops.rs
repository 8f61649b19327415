use alloc::vec;
use core::ops::{Add, Mul};

use crate::traits::FloatScalar;

use super::Polynomial;

// ── Polynomial + Polynomial ─────────────────────────────────────────

impl<T: FloatScalar> Add<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    /// Coefficient-wise sum; the result has the larger degree.
    fn add(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        let (long, short) = if self.coeffs.len() >= rhs.coeffs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut coeffs = long.coeffs.clone();
        for (c, &s) in coeffs.iter_mut().zip(short.coeffs.iter()) {
            *c = *c + s;
        }
        Polynomial { coeffs }
    }
}

impl<T: FloatScalar> Add for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self + &rhs
    }
}

// ── Polynomial + scalar ─────────────────────────────────────────────

impl<T: FloatScalar> Add<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    /// Shift the constant term.
    fn add(self, rhs: T) -> Polynomial<T> {
        let mut p = self.clone();
        p.coeffs[0] = p.coeffs[0] + rhs;
        p
    }
}

impl<T: FloatScalar> Add<T> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(mut self, rhs: T) -> Polynomial<T> {
        self.coeffs[0] = self.coeffs[0] + rhs;
        self
    }
}

// ── Polynomial * Polynomial ─────────────────────────────────────────

impl<T: FloatScalar> Mul<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    /// Product by coefficient convolution; degree `deg p + deg q`.
    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        let mut coeffs = vec![T::zero(); self.degree() + rhs.degree() + 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        Polynomial { coeffs }
    }
}

impl<T: FloatScalar> Mul for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self * &rhs
    }
}

// ── Polynomial * scalar ─────────────────────────────────────────────

impl<T: FloatScalar> Mul<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: T) -> Polynomial<T> {
        Polynomial {
            coeffs: self.coeffs.iter().map(|&c| c * rhs).collect(),
        }
    }
}

impl<T: FloatScalar> Mul<T> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: T) -> Polynomial<T> {
        &self * rhs
    }
}

// ── scalar + / * polynomial ─────────────────────────────────────────

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;
                fn add(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                    rhs + self
                }
            }

            impl Add<&Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;
                fn add(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                    rhs + self
                }
            }

            impl Mul<Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;
                fn mul(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                    rhs * self
                }
            }

            impl Mul<&Polynomial<$t>> for $t {
                type Output = Polynomial<$t>;
                fn mul(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);
