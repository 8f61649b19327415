use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, Scalar};

/// Dense vector of fixed length, owning its buffer.
///
/// Length is chosen at construction and only changes through
/// [`Vector::resize`]. `clone` produces an independent buffer.
///
/// # Examples
///
/// ```
/// use lamina::Vector;
///
/// let v = Vector::from_slice(&[3.0_f64, 4.0]);
/// assert_eq!(v.size(), 2);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// assert_eq!(v.dot(&v), 25.0);
/// ```
#[derive(Debug, PartialEq)]
pub struct Vector<T> {
    pub(crate) data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create a vector of length `len` with every entry set to `init`.
    ///
    /// ```
    /// use lamina::Vector;
    /// let v = Vector::new(3, 1.5_f64);
    /// assert_eq!(v.as_slice(), &[1.5, 1.5, 1.5]);
    /// ```
    pub fn new(len: usize, init: T) -> Self {
        Self {
            data: vec![init; len],
        }
    }

    /// Create a zero vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self::new(len, T::zero())
    }

    /// Create a vector from a slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Create a vector from an owned `Vec`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Bounds-checked read.
    pub fn get(&self, index: usize) -> Result<T, LinalgError> {
        self.data
            .get(index)
            .copied()
            .ok_or(LinalgError::OutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    /// Bounds-checked mutable access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, LinalgError> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(LinalgError::OutOfBounds { index, len })
    }

    /// Bounds-checked write.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), LinalgError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Change the length to `new_len`, zero-filling new entries and
    /// truncating extra ones.
    ///
    /// ```
    /// use lamina::Vector;
    /// let mut v = Vector::from_slice(&[1.0, 2.0]);
    /// v.resize(4);
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 0.0, 0.0]);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        self.data.resize(new_len, T::zero());
    }

    /// Dot product.
    ///
    /// Panics if the lengths differ; see [`Vector::checked_dot`].
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.dot_unchecked(rhs)
    }

    /// Dot product, failing on a length mismatch.
    pub fn checked_dot(&self, rhs: &Self) -> Result<T, LinalgError> {
        self.check_len(rhs)?;
        Ok(self.dot_unchecked(rhs))
    }

    /// Element-wise sum, failing on a length mismatch.
    ///
    /// ```
    /// use lamina::Vector;
    /// use lamina::linalg::LinalgError;
    ///
    /// let a = Vector::from_slice(&[1.0, 2.0]);
    /// let b = Vector::from_slice(&[3.0]);
    /// assert_eq!(
    ///     a.checked_add(&b),
    ///     Err(LinalgError::LengthMismatch { left: 2, right: 1 })
    /// );
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, LinalgError> {
        self.check_len(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    pub(crate) fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Self { data }
    }

    fn dot_unchecked(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for (&a, &b) in self.data.iter().zip(rhs.data.iter()) {
            sum = sum + a * b;
        }
        sum
    }

    fn check_len(&self, rhs: &Self) -> Result<(), LinalgError> {
        if self.len() != rhs.len() {
            return Err(LinalgError::LengthMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        Ok(())
    }
}

impl<T> Vector<T> {
    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of entries (alias of [`Vector::len`]).
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the entries as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the entries as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Euclidean (L2) norm.
    pub fn norm(&self) -> T {
        self.dot_unchecked(self).sqrt()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        assert!(
            i < self.data.len(),
            "index out of bound: {} in vector of length {}",
            i,
            self.data.len()
        );
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        assert!(
            i < self.data.len(),
            "index out of bound: {} in vector of length {}",
            i,
            self.data.len()
        );
        &mut self.data[i]
    }
}
