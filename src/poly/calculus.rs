use alloc::vec::Vec;

use crate::convergence::Convergence;
use crate::traits::FloatScalar;

use super::{PolyError, Polynomial};

/// Result of a Newton root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult<T> {
    /// Approximate root.
    pub x: T,
    /// Polynomial value at the root: `p(x)`.
    pub fx: T,
    /// Number of Newton steps taken.
    pub iterations: usize,
}

impl<T: FloatScalar> Polynomial<T> {
    /// Value at `x` (Horner's scheme).
    pub fn eval(&self, x: T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// `k`-th derivative as a new polynomial.
    ///
    /// `k == 0` returns a copy. Each differentiation step produces degree
    /// `max(degree - 1, 1)`, so the result never drops below degree one; the
    /// derivative of a constant is the degree-one zero polynomial.
    ///
    /// ```
    /// use lamina::Polynomial;
    ///
    /// let p = Polynomial::from_coefficients(&[5.0_f64, 3.0, 0.0, 2.0]);
    /// assert_eq!(p.derivative(1).coefficients(), &[3.0, 0.0, 6.0]);
    /// assert_eq!(p.derivative(2).coefficients(), &[0.0, 12.0]);
    /// assert_eq!(p.derivative(3).coefficients(), &[12.0, 0.0]);
    /// ```
    pub fn derivative(&self, k: usize) -> Self {
        let mut p = self.clone();
        for _ in 0..k {
            p = p.differentiate_once();
        }
        p
    }

    fn differentiate_once(&self) -> Self {
        let degree = self.degree().saturating_sub(1).max(1);
        let mut coeffs = Vec::with_capacity(degree + 1);
        let mut i = T::zero();
        for &c in self.coeffs.iter().skip(1) {
            i = i + T::one();
            coeffs.push(c * i);
        }
        coeffs.resize(degree + 1, T::zero());
        Self { coeffs }
    }

    /// Value of the `k`-th derivative at `x`.
    pub fn eval_derivative(&self, k: usize, x: T) -> T {
        self.derivative(k).eval(x)
    }

    /// Definite integral over `[alpha, beta]`.
    ///
    /// Fails with [`PolyError::InvalidInterval`] unless `alpha < beta`.
    ///
    /// ```
    /// use lamina::Polynomial;
    /// use lamina::poly::PolyError;
    ///
    /// let p = Polynomial::from_coefficients(&[0.0_f64, 2.0]);
    /// assert_eq!(p.integral(1.0, 3.0), Ok(8.0));
    /// assert_eq!(p.integral(3.0, 1.0), Err(PolyError::InvalidInterval));
    /// ```
    pub fn integral(&self, alpha: T, beta: T) -> Result<T, PolyError> {
        if !(beta > alpha) {
            return Err(PolyError::InvalidInterval);
        }
        Ok(self.antiderivative_at(beta) - self.antiderivative_at(alpha))
    }

    /// `Σ c_i x^(i+1) / (i+1)`, the antiderivative vanishing at zero.
    fn antiderivative_at(&self, x: T) -> T {
        let mut scaled = Vec::with_capacity(self.coeffs.len());
        let mut n = T::zero();
        for &c in &self.coeffs {
            n = n + T::one();
            scaled.push(c / n);
        }
        scaled.iter().rev().fold(T::zero(), |acc, &c| acc * x + c) * x
    }

    /// Root near `x0` by Newton's method, without an iteration cap.
    ///
    /// ```
    /// use lamina::Polynomial;
    ///
    /// // x^2 - 2
    /// let p = Polynomial::from_coefficients(&[-2.0_f64, 0.0, 1.0]);
    /// let root = p.compute_zero(1.0, 1e-12).unwrap();
    /// assert!((root - 2.0_f64.sqrt()).abs() < 1e-10);
    /// ```
    pub fn compute_zero(&self, x0: T, tau: T) -> Result<T, PolyError> {
        self.compute_zero_with(x0, &Convergence::new(tau))
            .map(|r| r.x)
    }

    /// Newton iteration `x ← x - p(x) / p'(x)` from `x0`.
    ///
    /// Stops after the first step with `|p(x)| <= tau` or a step size of at
    /// most `tau`. Fails with [`PolyError::InvalidTolerance`] if `tau` is not
    /// positive, [`PolyError::ZeroDerivative`] if `p'` vanishes at an
    /// iterate where `|p(x)| > tau`, and [`PolyError::MaxIterations`] once the cap is reached.
    pub fn compute_zero_with(
        &self,
        x0: T,
        conv: &Convergence<T>,
    ) -> Result<RootResult<T>, PolyError> {
        if !conv.tau_is_valid() {
            return Err(PolyError::InvalidTolerance);
        }
        let tau = conv.tau;
        let dp = self.derivative(1);

        let mut x = x0;
        let mut iterations = 0;
        loop {
            if conv.exhausted(iterations) {
                return Err(PolyError::MaxIterations { iterations });
            }

            let slope = dp.eval(x);
            if slope == T::zero() {
                let fx = self.eval(x);
                if fx.abs() <= tau {
                    log::debug!("newton: flat root at x = {:?} after {} iterations", x, iterations);
                    return Ok(RootResult { x, fx, iterations });
                }
                log::debug!("newton: zero derivative at x = {:?}", x);
                return Err(PolyError::ZeroDerivative);
            }
            let last = x;
            x = last - self.eval(last) / slope;
            iterations += 1;

            let fx = self.eval(x);
            log::trace!("newton iteration {}: x = {:?}, p(x) = {:?}", iterations, x, fx);

            if fx.abs() <= tau || (x - last).abs() <= tau {
                log::debug!("newton converged after {} iterations: x = {:?}", iterations, x);
                return Ok(RootResult { x, fx, iterations });
            }
        }
    }
}
