//! Packed storage for square matrices that only need one triangle.
//!
//! An `n x n` matrix is stored as the `n*(n+1)/2` entries of its lower
//! triangle, row by row: `(0,0), (1,0), (1,1), (2,0), ...`. Two variants
//! share the layout:
//!
//! - [`LowerTriangularMatrix`]: entries above the diagonal are zero and
//!   cannot be written.
//! - [`SymmetricMatrix`]: `(row, col)` and `(col, row)` name the same cell.
//!
//! ```
//! use lamina::{MatrixMut, MatrixRef, PackedMatrix, SymmetricMatrix};
//!
//! let mut s = SymmetricMatrix::zeros(3);
//! s.set(0, 2, 5.0_f64).unwrap();
//! assert_eq!(s.get(2, 0), Ok(5.0));
//! assert_eq!(s.packed_len(), 6);
//! ```

mod lower;
mod symmetric;

pub use lower::LowerTriangularMatrix;
pub use symmetric::SymmetricMatrix;

use alloc::vec;
use alloc::vec::Vec;

use crate::traits::{MatrixRef, Scalar};

/// Number of stored entries for an `n x n` packed matrix.
#[inline]
pub(crate) const fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Position of `(row, col)` in the packed buffer. Symmetric in its
/// arguments: the lower-triangle cell is always addressed.
#[inline]
pub(crate) fn packed_index(row: usize, col: usize) -> usize {
    let (r, c) = if row >= col { (row, col) } else { (col, row) };
    r * (r + 1) / 2 + c
}

/// Lower-triangle buffer shared by the packed matrix variants.
///
/// Only obtainable through a variant (see [`PackedMatrix::storage`]).
#[derive(Debug, PartialEq)]
pub struct PackedStorage<T> {
    data: Vec<T>,
    dim: usize,
}

impl<T: Clone> PackedStorage<T> {
    pub(crate) fn new(dim: usize, fill: T) -> Self {
        Self {
            data: vec![fill; packed_len(dim)],
            dim,
        }
    }
}

impl<T> PackedStorage<T> {
    pub(crate) fn from_fn(dim: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(packed_len(dim));
        for r in 0..dim {
            for c in 0..=r {
                data.push(f(r, c));
            }
        }
        Self { data, dim }
    }

    /// Logical dimension `n`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored entries, `n*(n+1)/2`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the storage holds no entries (`n == 0`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Packed buffer in row-major triangular order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> &T {
        &self.data[packed_index(row, col)]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[packed_index(row, col)]
    }
}

impl<T: Clone> Clone for PackedStorage<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            dim: self.dim,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.dim = source.dim;
    }
}

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for super::LowerTriangularMatrix<T> {}
    impl<T> Sealed for super::SymmetricMatrix<T> {}
}

/// Common view of the packed variants.
///
/// Sealed: implemented only by [`LowerTriangularMatrix`] and
/// [`SymmetricMatrix`].
pub trait PackedMatrix<T: Scalar>: MatrixRef<T> + sealed::Sealed {
    /// Underlying packed buffer.
    fn storage(&self) -> &PackedStorage<T>;

    /// Number of stored entries, `n*(n+1)/2`.
    fn packed_len(&self) -> usize {
        self.storage().len()
    }

    /// Stored entries in row-major triangular order.
    fn as_packed_slice(&self) -> &[T] {
        self.storage().as_slice()
    }
}
