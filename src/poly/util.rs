use core::fmt;

use crate::traits::FloatScalar;

use super::Polynomial;

impl<T: FloatScalar + fmt::Display> fmt::Display for Polynomial<T> {
    /// `c0 + c1x^1 - c2x^2 ...`, signs written apart from the magnitudes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c0 = self.coeffs[0];
        if c0 < T::zero() {
            write!(f, "- ")?;
        }
        write!(f, "{}", c0.abs())?;
        for (i, &c) in self.coeffs.iter().enumerate().skip(1) {
            let sign = if c < T::zero() { " - " } else { " + " };
            write!(f, "{}{}x^{}", sign, c.abs(), i)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display_signs() {
        let p = Polynomial::from_coefficients(&[1.0, -2.5, 0.0, 4.0]);
        assert_eq!(format!("{}", p), "1 - 2.5x^1 + 0x^2 + 4x^3");
    }

    #[test]
    fn display_leading_minus() {
        let p = Polynomial::from_coefficients(&[-3.0, 1.0]);
        assert_eq!(format!("{}", p), "- 3 + 1x^1");
    }

    #[test]
    fn display_constant() {
        assert_eq!(format!("{}", Polynomial::new(0, -0.5_f64)), "- 0.5");
    }
}
