use crate::convergence::Convergence;
use crate::dense::Vector;
use crate::linalg::LinalgError;
use crate::packed::SymmetricMatrix;
use crate::traits::{FloatScalar, MatrixRef};

/// Dominant eigenvalue estimate from power iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenPair<T> {
    /// Rayleigh quotient of the final iterate.
    pub value: T,
    /// Final normalized iterate.
    pub vector: Vector<T>,
    /// Iterations performed.
    pub iterations: usize,
}

impl<T: FloatScalar> SymmetricMatrix<T> {
    /// Eigenvalue of largest magnitude by power iteration.
    ///
    /// Runs until the residual `‖A x - λ x‖` and the change in `λ` both fall
    /// within `tau` (relative to `|λ|` when `|λ| > tau`). There is no
    /// iteration cap; use [`power_iteration_with`](Self::power_iteration_with)
    /// to set one.
    ///
    /// ```
    /// use lamina::{Matrix, SymmetricMatrix};
    ///
    /// let a = Matrix::from_rows(2, &[2.0_f64, 1.0, 1.0, 2.0]);
    /// let s = SymmetricMatrix::from_dense(&a).unwrap();
    /// let lambda = s.power_iteration(1e-10).unwrap();
    /// assert!((lambda - 3.0).abs() < 1e-8);
    /// ```
    pub fn power_iteration(&self, tau: T) -> Result<T, LinalgError> {
        self.power_iteration_with(&Convergence::new(tau))
            .map(|pair| pair.value)
    }

    /// Power iteration with explicit stopping rule, returning the eigenvector
    /// estimate and iteration count alongside the eigenvalue.
    ///
    /// Starts from the all-ones vector. Fails with
    /// [`LinalgError::InvalidTolerance`] if `tau` is not positive,
    /// [`LinalgError::ZeroIterate`] if the iterate collapses to zero, and
    /// [`LinalgError::ConvergenceFailure`] when the cap is reached.
    ///
    /// ```
    /// use lamina::{Convergence, SymmetricMatrix};
    ///
    /// let s = SymmetricMatrix::<f64>::identity(3);
    /// let pair = s.power_iteration_with(&Convergence::new(1e-12)).unwrap();
    /// assert!((pair.value - 1.0).abs() < 1e-12);
    /// assert!((pair.vector.norm() - 1.0).abs() < 1e-12);
    /// ```
    pub fn power_iteration_with(
        &self,
        conv: &Convergence<T>,
    ) -> Result<EigenPair<T>, LinalgError> {
        if !conv.tau_is_valid() {
            return Err(LinalgError::InvalidTolerance);
        }
        let tau = conv.tau;
        let n = self.size();

        let start = Vector::new(n, T::one());
        let norm = start.norm();
        if norm == T::zero() {
            return Err(LinalgError::ZeroIterate);
        }
        let mut q = &start * (T::one() / norm);
        let mut lambda_prev = T::zero();
        let mut iterations = 0;

        loop {
            if conv.exhausted(iterations) {
                return Err(LinalgError::ConvergenceFailure { iterations });
            }

            let y = self.mul_vec(&q)?;
            let y_norm = y.norm();
            if y_norm == T::zero() {
                return Err(LinalgError::ZeroIterate);
            }
            let lambda = q.dot(&y);
            let residual = (&y - &(&q * lambda)).norm();
            iterations += 1;

            let change = (lambda - lambda_prev).abs();
            let settled = if lambda.abs() > tau {
                change <= tau * lambda.abs()
            } else {
                change <= tau
            };

            log::trace!(
                "power iteration {}: lambda = {:?}, residual = {:?}",
                iterations,
                lambda,
                residual
            );

            if residual <= tau && settled {
                log::debug!(
                    "power iteration converged after {} iterations: lambda = {:?}",
                    iterations,
                    lambda
                );
                return Ok(EigenPair {
                    value: lambda,
                    vector: q,
                    iterations,
                });
            }

            q = &y * (T::one() / y_norm);
            lambda_prev = lambda;
        }
    }
}
