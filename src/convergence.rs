use crate::traits::FloatScalar;

/// Stopping rule for the iterative methods (power iteration, Newton).
///
/// `tau` is the convergence tolerance. `max_iter` caps the number of
/// iterations; it is `None` by default, in which case a method keeps
/// iterating until its convergence criteria hold, however long that takes.
///
/// # Example
///
/// ```
/// use lamina::Convergence;
///
/// let c = Convergence::new(1e-8_f64).with_max_iter(500);
/// assert_eq!(c.max_iter, Some(500));
/// assert!(Convergence::<f64>::default().max_iter.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence<T> {
    /// Convergence tolerance; must be strictly positive.
    pub tau: T,
    /// Optional iteration cap.
    pub max_iter: Option<usize>,
}

impl<T> Convergence<T> {
    /// Unbounded iteration with tolerance `tau`.
    pub fn new(tau: T) -> Self {
        Self {
            tau,
            max_iter: None,
        }
    }

    /// Stop with an error after `max_iter` iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }
}

impl<T: FloatScalar> Convergence<T> {
    /// `tau > 0` (false for NaN).
    pub(crate) fn tau_is_valid(&self) -> bool {
        self.tau > T::zero()
    }

    /// Whether `iterations` completed iterations exhaust the cap.
    pub(crate) fn exhausted(&self, iterations: usize) -> bool {
        matches!(self.max_iter, Some(cap) if iterations >= cap)
    }
}

impl Default for Convergence<f64> {
    fn default() -> Self {
        Self::new(1e-10)
    }
}

impl Default for Convergence<f32> {
    fn default() -> Self {
        Self::new(1e-5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tau_validation() {
        assert!(Convergence::new(1e-3_f64).tau_is_valid());
        assert!(!Convergence::new(0.0_f64).tau_is_valid());
        assert!(!Convergence::new(-1.0_f64).tau_is_valid());
        assert!(!Convergence::new(f64::NAN).tau_is_valid());
    }

    #[test]
    fn cap() {
        let unbounded = Convergence::new(1e-3_f64);
        assert!(!unbounded.exhausted(usize::MAX));

        let capped = unbounded.with_max_iter(3);
        assert!(!capped.exhausted(2));
        assert!(capped.exhausted(3));
    }

    #[test]
    fn defaults() {
        assert_eq!(Convergence::<f64>::default().tau, 1e-10);
        assert_eq!(Convergence::<f32>::default().tau, 1e-5);
    }
}
