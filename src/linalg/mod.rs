//! Linear systems, power iteration and Cholesky factorization.
//!
//! - [`solve_upper_triangular`]: back-substitution on an upper-triangular
//!   dense matrix.
//! - [`solve`]: Gaussian elimination without pivoting.
//! - [`solve_with_pivoting`]: elimination that swaps in the largest
//!   remaining candidate whenever a zero pivot stops it.
//! - [`SymmetricMatrix::power_iteration`](crate::SymmetricMatrix::power_iteration)
//!   and [`SymmetricMatrix::compute_cholesky`](crate::SymmetricMatrix::compute_cholesky)
//!   work on packed symmetric storage.

pub(crate) mod cholesky;
pub(crate) mod power;
mod solve;

pub use power::EigenPair;
pub use solve::{solve, solve_upper_triangular, solve_with_pivoting};

/// Errors from matrix access and linear algebra operations.
///
/// Every check runs before any write, so a failed call leaves its
/// receiver unchanged.
///
/// ```
/// use lamina::{Matrix, Vector};
/// use lamina::linalg::{solve, LinalgError};
///
/// let a = Matrix::from_rows(2, &[0.0_f64, 1.0, 1.0, 1.0]);
/// let b = Vector::from_slice(&[1.0, 3.0]);
/// assert_eq!(solve(&a, &b).unwrap_err(), LinalgError::ZeroPivot { col: 0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// `(row, col)` lies outside a `dim x dim` matrix.
    IndexOutOfBounds { row: usize, col: usize, dim: usize },
    /// `index` lies outside a vector of length `len`.
    OutOfBounds { index: usize, len: usize },
    /// Write above the diagonal of a lower-triangular matrix.
    OutsideTriangle { row: usize, col: usize },
    /// Matrix dimension and vector length differ.
    DimensionMismatch { matrix: usize, vector: usize },
    /// Vector lengths differ.
    LengthMismatch { left: usize, right: usize },
    /// Matrix has a nonzero entry below the diagonal.
    NotUpperTriangular,
    /// Matrix has a nonzero entry above the diagonal.
    NotLowerTriangular,
    /// Matrix differs from its transpose.
    NotSymmetric,
    /// Back-substitution met a zero on the diagonal.
    ZeroDiagonal { index: usize },
    /// Elimination without pivoting met a zero pivot.
    ZeroPivot { col: usize },
    /// Every pivot candidate in a column is zero.
    Singular { col: usize },
    /// Matrix is not positive definite (required for Cholesky).
    NotPositiveDefinite,
    /// Convergence tolerance is not strictly positive.
    InvalidTolerance,
    /// Sampling range is empty or unbounded.
    InvalidRange,
    /// Power iteration reached the zero vector.
    ZeroIterate,
    /// Iteration cap reached before the convergence criteria held.
    ConvergenceFailure { iterations: usize },
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::IndexOutOfBounds { row, col, dim } => {
                write!(f, "index out of bound: ({}, {}) in {}x{} matrix", row, col, dim, dim)
            }
            LinalgError::OutOfBounds { index, len } => {
                write!(f, "index out of bound: {} in vector of length {}", index, len)
            }
            LinalgError::OutsideTriangle { row, col } => write!(
                f,
                "entry ({}, {}) lies above the diagonal of a lower triangular matrix",
                row, col
            ),
            LinalgError::DimensionMismatch { matrix, vector } => write!(
                f,
                "matrix size does not match vector size: {} vs {}",
                matrix, vector
            ),
            LinalgError::LengthMismatch { left, right } => {
                write!(f, "vector length mismatch: {} vs {}", left, right)
            }
            LinalgError::NotUpperTriangular => write!(f, "matrix has to be upper triangular"),
            LinalgError::NotLowerTriangular => write!(f, "matrix has to be lower triangular"),
            LinalgError::NotSymmetric => write!(f, "matrix has to be symmetric"),
            LinalgError::ZeroDiagonal { index } => {
                write!(f, "the diagonal can't have 0 entries (index {})", index)
            }
            LinalgError::ZeroPivot { col } => write!(f, "zero pivot in column {}", col),
            LinalgError::Singular { col } => {
                write!(f, "matrix is singular: no nonzero pivot in column {}", col)
            }
            LinalgError::NotPositiveDefinite => write!(f, "matrix is not positive definite"),
            LinalgError::InvalidTolerance => write!(f, "tau must be greater than 0"),
            LinalgError::InvalidRange => write!(f, "lower bound must be below upper bound"),
            LinalgError::ZeroIterate => write!(f, "power iteration reached the zero vector"),
            LinalgError::ConvergenceFailure { iterations } => {
                write!(f, "no convergence after {} iterations", iterations)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_precondition() {
        assert!(LinalgError::IndexOutOfBounds { row: 3, col: 0, dim: 2 }
            .to_string()
            .starts_with("index out of bound"));
        assert!(LinalgError::DimensionMismatch { matrix: 3, vector: 2 }
            .to_string()
            .starts_with("matrix size does not match vector size"));
        assert_eq!(
            LinalgError::InvalidTolerance.to_string(),
            "tau must be greater than 0"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn boxes_as_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(LinalgError::NotPositiveDefinite);
        assert_eq!(e.to_string(), "matrix is not positive definite");
    }
}
