//! Polynomials over a [`GaloisField`]
//!
//! Coefficients are stored highest degree first and trimmed so the leading
//! coefficient is nonzero; the zero polynomial is the single coefficient 0.
//! Values are immutable and every operation returns a new polynomial, so
//! coefficient storage is shared between clones.

use std::fmt;
use std::sync::Arc;

use super::field::{Element, GaloisField};
use crate::GfError;

/// Polynomial with coefficients in one field
///
/// Borrows its field; polynomials over catalog fields are `GfPoly<'static>`.
#[derive(Clone)]
pub struct GfPoly<'f> {
    field: &'f GaloisField,
    coefficients: Arc<[Element]>,
}

impl<'f> GfPoly<'f> {
    /// Build from coefficients, highest degree first
    ///
    /// Leading zeros are stripped. An all-zero input gives the field's
    /// canonical zero.
    pub fn new(field: &'f GaloisField, coefficients: Vec<Element>) -> Result<Self, GfError> {
        if coefficients.is_empty() {
            return Err(GfError::EmptyCoefficients);
        }
        if let Some(&value) = coefficients.iter().find(|&&c| c as usize >= field.size()) {
            return Err(GfError::ElementOutOfRange {
                value,
                size: field.size(),
            });
        }
        Ok(Self::from_unchecked(field, coefficients))
    }

    /// Trim and wrap coefficients already known to lie in the field
    fn from_unchecked(field: &'f GaloisField, mut coefficients: Vec<Element>) -> Self {
        match coefficients.iter().position(|&c| c != 0) {
            None => field.zero(),
            Some(first_nonzero) => {
                coefficients.drain(..first_nonzero);
                Self::from_trimmed(field, coefficients.into())
            }
        }
    }

    pub(crate) fn from_trimmed(field: &'f GaloisField, coefficients: Arc<[Element]>) -> Self {
        debug_assert!(!coefficients.is_empty());
        Self {
            field,
            coefficients,
        }
    }

    /// Owning field
    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[Element] {
        &self.coefficients
    }

    /// Degree; 0 for the zero polynomial
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// True only for the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coefficients[0] == 0
    }

    /// True when this shares storage with the field's canonical zero
    pub fn is_canonical_zero(&self) -> bool {
        self.field.is_canonical_zero(&self.coefficients)
    }

    /// Coefficient of x^degree (0 above the polynomial's degree)
    pub fn coefficient(&self, degree: usize) -> Element {
        let len = self.coefficients.len();
        if degree >= len {
            return 0;
        }
        self.coefficients[len - 1 - degree]
    }

    /// Value of the polynomial at `a`
    pub fn evaluate_at(&self, a: Element) -> Element {
        if a == 0 {
            return self.coefficient(0);
        }
        if a == 1 {
            // Sum of the coefficients
            return self.coefficients.iter().fold(0, |acc, &c| acc ^ c);
        }
        // Horner
        self.coefficients
            .iter()
            .fold(0, |acc, &c| self.field.multiply(a, acc) ^ c)
    }

    fn check_same_field(&self, other: &GfPoly<'_>) -> Result<(), GfError> {
        if std::ptr::eq(self.field, other.field) {
            Ok(())
        } else {
            Err(GfError::FieldMismatch)
        }
    }

    /// Sum (equivalently difference) of two polynomials
    pub fn add_or_subtract(&self, other: &GfPoly<'f>) -> Result<GfPoly<'f>, GfError> {
        self.check_same_field(other)?;
        if self.is_zero() {
            return Ok(other.clone());
        }
        if other.is_zero() {
            return Ok(self.clone());
        }

        let (longer, shorter) = if self.coefficients.len() >= other.coefficients.len() {
            (&self.coefficients, &other.coefficients)
        } else {
            (&other.coefficients, &self.coefficients)
        };
        let offset = longer.len() - shorter.len();

        let mut sum = longer.to_vec();
        for (slot, &c) in sum[offset..].iter_mut().zip(shorter.iter()) {
            *slot ^= c;
        }
        Ok(Self::from_unchecked(self.field, sum))
    }

    /// Product of two polynomials
    pub fn multiply(&self, other: &GfPoly<'f>) -> Result<GfPoly<'f>, GfError> {
        self.check_same_field(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(self.field.zero());
        }

        let a = &self.coefficients;
        let b = &other.coefficients;
        let mut product = vec![0; a.len() + b.len() - 1];
        for (i, &ac) in a.iter().enumerate() {
            for (j, &bc) in b.iter().enumerate() {
                product[i + j] ^= self.field.multiply(ac, bc);
            }
        }
        Ok(Self::from_unchecked(self.field, product))
    }

    /// Multiply every coefficient by `scalar`
    pub fn multiply_scalar(&self, scalar: Element) -> GfPoly<'f> {
        match scalar {
            0 => self.field.zero(),
            1 => self.clone(),
            _ => {
                let scaled = self
                    .coefficients
                    .iter()
                    .map(|&c| self.field.multiply(c, scalar))
                    .collect();
                Self::from_unchecked(self.field, scaled)
            }
        }
    }

    /// Multiply by `coefficient · x^degree`
    pub fn multiply_by_monomial(&self, degree: usize, coefficient: Element) -> GfPoly<'f> {
        if coefficient == 0 || self.is_zero() {
            return self.field.zero();
        }
        let mut product = Vec::with_capacity(self.coefficients.len() + degree);
        product.extend(
            self.coefficients
                .iter()
                .map(|&c| self.field.multiply(c, coefficient)),
        );
        product.resize(self.coefficients.len() + degree, 0);
        Self::from_unchecked(self.field, product)
    }

    /// Long division, returning `(quotient, remainder)`
    ///
    /// `self == quotient * other + remainder` with the remainder either zero
    /// or of lower degree than `other`.
    pub fn divide(&self, other: &GfPoly<'f>) -> Result<(GfPoly<'f>, GfPoly<'f>), GfError> {
        self.check_same_field(other)?;
        if other.is_zero() {
            return Err(GfError::DivideByZero);
        }

        let field = self.field;
        let divisor = &other.coefficients;
        if self.coefficients.len() < divisor.len() || self.is_zero() {
            return Ok((field.zero(), self.clone()));
        }

        let inverse_leading = field.inverse(divisor[0])?;
        let quotient_len = self.coefficients.len() - divisor.len() + 1;

        // Synthetic division: the first quotient_len slots end up holding the
        // quotient, the rest the remainder.
        let mut work = self.coefficients.to_vec();
        for i in 0..quotient_len {
            let lead = work[i];
            if lead == 0 {
                continue;
            }
            let scale = field.multiply(lead, inverse_leading);
            work[i] = scale;
            for (j, &d) in divisor.iter().enumerate().skip(1) {
                work[i + j] ^= field.multiply(d, scale);
            }
        }

        let remainder = work.split_off(quotient_len);
        let quotient = Self::from_unchecked(field, work);
        let remainder = if remainder.is_empty() {
            field.zero()
        } else {
            Self::from_unchecked(field, remainder)
        };
        Ok((quotient, remainder))
    }
}

impl PartialEq for GfPoly<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.field, other.field) && self.coefficients == other.coefficients
    }
}

impl Eq for GfPoly<'_> {}

impl fmt::Debug for GfPoly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GfPoly")
            .field("field", &format_args!("{}", self.field))
            .field("coefficients", &self.coefficients)
            .finish()
    }
}

/// Renders terms as powers of α, e.g. `a^25x^2 + ax + 1`.
impl fmt::Display for GfPoly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut first = true;
        for degree in (0..=self.degree()).rev() {
            let coefficient = self.coefficient(degree);
            if coefficient == 0 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;

            if degree == 0 || coefficient != 1 {
                // Nonzero, so the log exists
                match self.field.log(coefficient).unwrap_or(0) {
                    0 => f.write_str("1")?,
                    1 => f.write_str("a")?,
                    power => write!(f, "a^{power}")?,
                }
            }
            match degree {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{degree}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldKind;

    fn qr() -> &'static GaloisField {
        FieldKind::QrCodeField256.field()
    }

    #[test]
    fn test_trims_leading_zeros() {
        let p = qr().poly(vec![0, 0, 5, 0, 1]).unwrap();
        assert_eq!(p.coefficients(), &[5, 0, 1]);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.coefficient(2), 5);
        assert_eq!(p.coefficient(1), 0);
        assert_eq!(p.coefficient(7), 0);
    }

    #[test]
    fn test_zero_is_canonical() {
        let p = qr().poly(vec![0, 0, 0]).unwrap();
        assert!(p.is_zero());
        assert!(p.is_canonical_zero());
        assert_eq!(p.degree(), 0);

        let constant = qr().poly(vec![7]).unwrap();
        assert!(!constant.is_zero());
        assert_eq!(constant.degree(), 0);
    }

    #[test]
    fn test_rejects_bad_coefficients() {
        assert_eq!(qr().poly(Vec::new()), Err(GfError::EmptyCoefficients));
        assert_eq!(
            qr().poly(vec![1, 256]),
            Err(GfError::ElementOutOfRange {
                value: 256,
                size: 256
            })
        );
    }

    #[test]
    fn test_add_cancels() {
        let p = qr().poly(vec![3, 4, 5]).unwrap();
        let q = qr().poly(vec![3, 1, 1]).unwrap();
        let sum = p.add_or_subtract(&q).unwrap();
        assert_eq!(sum.coefficients(), &[5, 4]);
        assert!(p.add_or_subtract(&p).unwrap().is_zero());
    }

    #[test]
    fn test_multiply_by_linear_factors() {
        let field = qr();
        // (x + 1)(x + 2) = x^2 + 3x + 2
        let a = field.poly(vec![1, 1]).unwrap();
        let b = field.poly(vec![1, 2]).unwrap();
        assert_eq!(a.multiply(&b).unwrap().coefficients(), &[1, 3, 2]);
        assert!(a.multiply(&field.zero()).unwrap().is_zero());
    }

    #[test]
    fn test_monomial_shift() {
        let p = qr().poly(vec![1, 2]).unwrap();
        let shifted = p.multiply_by_monomial(2, 2);
        assert_eq!(shifted.coefficients(), &[2, 4, 0, 0]);
        assert!(p.multiply_by_monomial(3, 0).is_zero());
    }

    #[test]
    fn test_divide_exact() {
        let field = qr();
        let a = field.poly(vec![1, 1]).unwrap();
        let b = field.poly(vec![1, 2]).unwrap();
        let product = a.multiply(&b).unwrap();

        let (quotient, remainder) = product.divide(&b).unwrap();
        assert_eq!(quotient, a);
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_divide_by_zero() {
        let p = qr().poly(vec![1, 2]).unwrap();
        assert_eq!(p.divide(&qr().zero()), Err(GfError::DivideByZero));
    }

    #[test]
    fn test_divide_lower_degree_dividend() {
        let p = qr().poly(vec![9]).unwrap();
        let d = qr().poly(vec![1, 0, 3]).unwrap();
        let (quotient, remainder) = p.divide(&d).unwrap();
        assert!(quotient.is_zero());
        assert_eq!(remainder, p);
    }

    #[test]
    fn test_evaluate() {
        let field = qr();
        // x^2 + 3x + 2 has roots 1 and 2
        let p = field.poly(vec![1, 3, 2]).unwrap();
        assert_eq!(p.evaluate_at(0), 2);
        assert_eq!(p.evaluate_at(1), 0);
        assert_eq!(p.evaluate_at(2), 0);
        assert_eq!(field.zero().evaluate_at(77), 0);
    }

    #[test]
    fn test_field_mismatch() {
        let p = qr().poly(vec![1, 2]).unwrap();
        let other = FieldKind::DataMatrixField256.field().poly(vec![1, 2]).unwrap();
        assert_eq!(p.add_or_subtract(&other), Err(GfError::FieldMismatch));
        assert_eq!(p.multiply(&other), Err(GfError::FieldMismatch));
        assert!(matches!(p.divide(&other), Err(GfError::FieldMismatch)));
        assert_ne!(p, other);
    }

    #[test]
    fn test_display() {
        let field = qr();
        let p = field.poly(vec![1, 2, 0, 1]).unwrap();
        assert_eq!(p.to_string(), "x^3 + ax^2 + 1");
        assert_eq!(field.zero().to_string(), "0");
        assert_eq!(field.poly(vec![4]).unwrap().to_string(), "a^2");
    }
}
