//! # lamina
//!
//! Square dense and packed-triangular matrices, linear solvers, and real
//! polynomials in pure Rust. `no_std` compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use lamina::{Matrix, Vector};
//! use lamina::linalg::solve_with_pivoting;
//!
//! let a = Matrix::from_rows(3, &[
//!     0.0_f64, 1.0, 2.0,
//!     1.0, 0.0, 3.0,
//!     4.0, -3.0, 8.0,
//! ]);
//! let b = Vector::from_slice(&[1.0, 2.0, 3.0]);
//! let x = solve_with_pivoting(&a, &b).unwrap();
//! let r = &(&a * &x) - &b;
//! assert!(r.norm() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`dense`]: `Matrix<T>` (column-major `Vec<T>`, runtime dimension) and
//!   `Vector<T>`. Arithmetic operators, four matrix norms, structural
//!   classifiers (diagonal, symmetric, skew-symmetric, triangular), random
//!   construction through [`rand`].
//!
//! - [`packed`]: [`LowerTriangularMatrix`] and [`SymmetricMatrix`] storing
//!   only the `n*(n+1)/2` lower-triangle entries. Symmetric matrices provide
//!   power iteration and Cholesky factorization.
//!
//! - [`linalg`]: back-substitution, Gaussian elimination with and without
//!   pivoting, and the [`LinalgError`](linalg::LinalgError) type shared by the
//!   matrix modules.
//!
//! - [`poly`]: [`Polynomial`] with evaluation, derivatives, definite
//!   integrals, Newton root finding, Taylor series of `sin`, `cos`, `exp`.
//!
//! - [`traits`]: element traits and shared matrix access:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used by every algorithm
//!   - [`MatrixRef`] / [`MatrixMut`]: checked access implemented by all
//!     three matrix types
//!
//! Iterative methods take a [`Convergence`] (tolerance plus optional
//! iteration cap) and report progress through the [`log`] facade.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` impls, thread-local RNG |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod convergence;
pub mod dense;
pub mod linalg;
pub mod packed;
pub mod poly;
pub mod traits;

pub use convergence::Convergence;
pub use dense::{Matrix, Vector};
pub use packed::{LowerTriangularMatrix, PackedMatrix, SymmetricMatrix};
pub use poly::{Polynomial, TaylorSeries};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
