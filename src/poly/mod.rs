//! Dense real polynomials.
//!
//! A [`Polynomial`] of degree `n` owns `n + 1` coefficients, constant term
//! first. Besides evaluation and the arithmetic operators it provides
//! differentiation, definite integration, Newton root finding and Taylor
//! expansions of `sin`, `cos` and `exp` around zero.
//!
//! ```
//! use lamina::Polynomial;
//!
//! // 1 + x^2
//! let p = Polynomial::from_coefficients(&[1.0_f64, 0.0, 1.0]);
//! assert_eq!(p.eval(2.0), 5.0);
//! assert_eq!(p.derivative(1).coefficients(), &[0.0, 2.0]);
//! assert!((p.integral(0.0, 3.0).unwrap() - 12.0).abs() < 1e-12);
//! ```

mod calculus;
mod ops;
mod util;

pub use calculus::RootResult;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use core::str::FromStr;

use crate::traits::FloatScalar;

/// Coefficient tolerance used by `==` on polynomials.
pub const EQ_TOLERANCE: f64 = 0.01;

/// Errors from polynomial access and calculus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    /// Coefficient `index` does not exist in a polynomial with `len`
    /// coefficients.
    OutOfBounds { index: usize, len: usize },
    /// Integration bounds with `beta <= alpha`.
    InvalidInterval,
    /// Newton tolerance is not strictly positive.
    InvalidTolerance,
    /// Taylor series requested for a function other than sin, cos, exp.
    UnknownFunction,
    /// Newton step met a zero derivative.
    ZeroDerivative,
    /// Iteration cap reached before convergence.
    MaxIterations { iterations: usize },
}

impl core::fmt::Display for PolyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PolyError::OutOfBounds { index, len } => {
                write!(f, "index out of bound: {} in polynomial with {} coefficients", index, len)
            }
            PolyError::InvalidInterval => write!(f, "beta may not be smaller than alpha"),
            PolyError::InvalidTolerance => write!(f, "tau must be greater than 0"),
            PolyError::UnknownFunction => write!(f, "function must be either sin, cos or exp"),
            PolyError::ZeroDerivative => write!(f, "derivative vanished during Newton iteration"),
            PolyError::MaxIterations { iterations } => {
                write!(f, "no convergence after {} iterations", iterations)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PolyError {}

/// Functions with a built-in Taylor expansion around zero.
///
/// ```
/// use lamina::TaylorSeries;
///
/// assert_eq!("cos".parse::<TaylorSeries>(), Ok(TaylorSeries::Cos));
/// assert!("tan".parse::<TaylorSeries>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaylorSeries {
    Sin,
    Cos,
    Exp,
}

impl TaylorSeries {
    /// `f^(k)(0)` for the k-th derivative.
    fn derivative_at_zero<T: FloatScalar>(self, k: usize) -> T {
        match self {
            TaylorSeries::Exp => T::one(),
            // sin, cos, -sin, -cos
            TaylorSeries::Sin | TaylorSeries::Cos => {
                let phase = if self == TaylorSeries::Sin { k } else { k + 1 };
                match phase % 4 {
                    1 => T::one(),
                    3 => -T::one(),
                    _ => T::zero(),
                }
            }
        }
    }
}

impl FromStr for TaylorSeries {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(TaylorSeries::Sin),
            "cos" => Ok(TaylorSeries::Cos),
            "exp" => Ok(TaylorSeries::Exp),
            _ => Err(PolyError::UnknownFunction),
        }
    }
}

/// Real polynomial `c0 + c1 x + ... + cn x^n`.
///
/// Always holds exactly `degree() + 1` coefficients; the leading one may be
/// zero. `==` compares coefficients with tolerance [`EQ_TOLERANCE`].
#[derive(Debug)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

impl<T: FloatScalar> Polynomial<T> {
    /// Degree-`degree` polynomial with every coefficient set to `fill`.
    ///
    /// ```
    /// use lamina::Polynomial;
    /// let p = Polynomial::new(2, 1.0_f64);
    /// assert_eq!(p.eval(2.0), 7.0);
    /// ```
    pub fn new(degree: usize, fill: T) -> Self {
        Self {
            coeffs: vec![fill; degree + 1],
        }
    }

    /// Polynomial with the given coefficients, constant term first.
    ///
    /// Panics if `coeffs` is empty.
    pub fn from_coefficients(coeffs: &[T]) -> Self {
        assert!(
            !coeffs.is_empty(),
            "a polynomial needs at least one coefficient"
        );
        Self {
            coeffs: coeffs.to_vec(),
        }
    }

    /// Degree-`degree` Taylor polynomial of `f` around zero.
    ///
    /// ```
    /// use lamina::{Polynomial, TaylorSeries};
    ///
    /// let e = Polynomial::<f64>::taylor(12, TaylorSeries::Exp);
    /// assert!((e.eval(1.0) - core::f64::consts::E).abs() < 1e-8);
    /// let s = Polynomial::<f64>::taylor(3, TaylorSeries::Sin);
    /// assert_eq!(s.coefficients()[3], -1.0 / 6.0);
    /// ```
    pub fn taylor(degree: usize, f: TaylorSeries) -> Self {
        let mut coeffs = Vec::with_capacity(degree + 1);
        let mut factorial = T::one();
        let mut k = T::zero();
        for i in 0..=degree {
            if i > 0 {
                k = k + T::one();
                factorial = factorial * k;
            }
            coeffs.push(f.derivative_at_zero::<T>(i) / factorial);
        }
        Self { coeffs }
    }

    /// [`taylor`](Self::taylor) with the function given by name
    /// (`"sin"`, `"cos"` or `"exp"`).
    pub fn from_function(degree: usize, name: &str) -> Result<Self, PolyError> {
        let f: TaylorSeries = name.parse()?;
        Ok(Self::taylor(degree, f))
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficients, constant term first.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    pub fn get(&self, index: usize) -> Result<T, PolyError> {
        self.check(index)?;
        Ok(self.coeffs[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, PolyError> {
        self.check(index)?;
        Ok(&mut self.coeffs[index])
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<(), PolyError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    fn check(&self, index: usize) -> Result<(), PolyError> {
        if index >= self.coeffs.len() {
            return Err(PolyError::OutOfBounds {
                index,
                len: self.coeffs.len(),
            });
        }
        Ok(())
    }

    /// Same degree and every coefficient within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        self.coeffs.len() == other.coeffs.len()
            && self
                .coeffs
                .iter()
                .zip(other.coeffs.iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

impl<T: FloatScalar> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        T::from(EQ_TOLERANCE).map_or(false, |tol| self.approx_eq(other, tol))
    }
}

impl<T: Clone> Clone for Polynomial<T> {
    fn clone(&self) -> Self {
        Self {
            coeffs: self.coeffs.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.coeffs.clone_from(&source.coeffs);
    }
}

impl<T> Index<usize> for Polynomial<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.coeffs.len(),
            "index out of bound: {} in polynomial with {} coefficients",
            index,
            self.coeffs.len(),
        );
        &self.coeffs[index]
    }
}

impl<T> IndexMut<usize> for Polynomial<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.coeffs.len(),
            "index out of bound: {} in polynomial with {} coefficients",
            index,
            self.coeffs.len(),
        );
        &mut self.coeffs[index]
    }
}
