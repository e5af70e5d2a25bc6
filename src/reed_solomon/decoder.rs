//! Syndrome decoder: Euclidean error locator, Chien search, Forney values

use tracing::{debug, trace};

use crate::algebra::{Element, GaloisField, GfPoly};
use crate::DecodeError;

/// Reed-Solomon decoder over one field
///
/// Holds no state besides the field, so one decoder can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct ReedSolomonDecoder<'f> {
    field: &'f GaloisField,
}

impl<'f> ReedSolomonDecoder<'f> {
    /// Create decoder for `field`
    pub fn new(field: &'f GaloisField) -> Self {
        Self { field }
    }

    /// Field the decoder works in
    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    /// Syndrome polynomial of `received` for `two_s` error-correction codewords
    ///
    /// Syndrome i is the received polynomial evaluated at α^(i + base),
    /// stored as the coefficient of x^i. A zero polynomial means no error
    /// was detected.
    pub fn syndromes(&self, received: &[Element], two_s: usize) -> Result<GfPoly<'f>, DecodeError> {
        let field = self.field;
        if let Some((index, &value)) = received
            .iter()
            .enumerate()
            .find(|&(_, &v)| v as usize >= field.size())
        {
            return Err(DecodeError::ElementOutOfRange {
                index,
                value,
                size: field.size(),
            });
        }
        if received.is_empty() || two_s == 0 {
            return Ok(field.zero());
        }

        let poly = GfPoly::new(field, received.to_vec())?;
        let base = field.generator_base() as usize;
        let mut syndromes = vec![0; two_s];
        for i in 0..two_s {
            let point = field.exp((i + base) % (field.size() - 1));
            syndromes[two_s - 1 - i] = poly.evaluate_at(point);
        }
        trace!(?syndromes, "computed syndromes");
        Ok(GfPoly::new(field, syndromes)?)
    }

    /// Correct `received` in place, returning the number of codewords fixed
    ///
    /// `received` is left untouched unless the whole correction succeeds and
    /// the corrected word checks out.
    pub fn decode(&self, received: &mut [Element], two_s: usize) -> Result<usize, DecodeError> {
        let field = self.field;
        let syndromes = self.syndromes(received, two_s)?;
        if syndromes.is_zero() {
            return Ok(0);
        }

        let monomial = field.build_monomial(two_s as isize, 1)?;
        let (sigma, omega) = self.run_euclidean(monomial, syndromes, two_s)?;
        trace!(%sigma, %omega, "error locator and evaluator");

        let locations = self.find_error_locations(&sigma)?;
        let magnitudes = self.find_error_magnitudes(&omega, &locations)?;

        let mut corrected = received.to_vec();
        for (&location, &magnitude) in locations.iter().zip(magnitudes.iter()) {
            let log = field.log(location)? as usize;
            if log >= corrected.len() {
                debug!(location, len = corrected.len(), "error located outside codeword");
                return Err(DecodeError::Uncorrectable("error location outside the codeword"));
            }
            let position = corrected.len() - 1 - log;
            corrected[position] ^= magnitude;
        }

        if !self.syndromes(&corrected, two_s)?.is_zero() {
            debug!("corrected word still has nonzero syndromes");
            return Err(DecodeError::Uncorrectable("correction did not yield a codeword"));
        }

        received.copy_from_slice(&corrected);
        debug!(errors = locations.len(), "corrected codewords");
        Ok(locations.len())
    }

    /// Extended Euclid on `a` and `b` until the remainder degree drops below `r / 2`
    ///
    /// Returns `(sigma, omega)`, the error locator and error evaluator, scaled
    /// so that sigma(0) = 1.
    pub fn run_euclidean(
        &self,
        a: GfPoly<'f>,
        b: GfPoly<'f>,
        r: usize,
    ) -> Result<(GfPoly<'f>, GfPoly<'f>), DecodeError> {
        let field = self.field;
        let (mut r_last, mut r_cur) = if a.degree() < b.degree() { (b, a) } else { (a, b) };
        let mut t_last = field.zero();
        let mut t_cur = field.one();

        while 2 * r_cur.degree() >= r {
            let r_last_last = std::mem::replace(&mut r_last, r_cur.clone());
            let t_last_last = std::mem::replace(&mut t_last, t_cur.clone());

            if r_last.is_zero() {
                return Err(DecodeError::Uncorrectable("euclidean algorithm terminated early"));
            }
            let (quotient, remainder) = r_last_last.divide(&r_last)?;
            t_cur = quotient.multiply(&t_last)?.add_or_subtract(&t_last_last)?;
            r_cur = remainder;

            if !r_cur.is_zero() && r_cur.degree() >= r_last.degree() {
                return Err(DecodeError::Uncorrectable("division failed to reduce the remainder"));
            }
        }

        let sigma_tilde_at_zero = t_cur.coefficient(0);
        if sigma_tilde_at_zero == 0 {
            return Err(DecodeError::Uncorrectable("error locator vanishes at zero"));
        }
        let inverse = field.inverse(sigma_tilde_at_zero)?;
        Ok((t_cur.multiply_scalar(inverse), r_cur.multiply_scalar(inverse)))
    }

    /// Chien search: the error locators X_k such that sigma(1 / X_k) = 0
    pub fn find_error_locations(&self, sigma: &GfPoly<'f>) -> Result<Vec<Element>, DecodeError> {
        let field = self.field;
        let num_errors = sigma.degree();
        if num_errors == 0 {
            return Err(DecodeError::Uncorrectable("nonzero syndromes but no errors located"));
        }
        if num_errors == 1 {
            return Ok(vec![sigma.coefficient(1)]);
        }

        let mut locations = Vec::with_capacity(num_errors);
        for i in 1..field.size() as Element {
            if locations.len() == num_errors {
                break;
            }
            if sigma.evaluate_at(i) == 0 {
                locations.push(field.inverse(i)?);
            }
        }
        if locations.len() != num_errors {
            debug!(found = locations.len(), expected = num_errors, "error locator degree does not match its roots");
            return Err(DecodeError::Uncorrectable("error locator degree does not match its roots"));
        }
        Ok(locations)
    }

    /// Forney: error values at each location from the evaluator polynomial
    pub fn find_error_magnitudes(
        &self,
        omega: &GfPoly<'f>,
        locations: &[Element],
    ) -> Result<Vec<Element>, DecodeError> {
        let field = self.field;
        let mut magnitudes = Vec::with_capacity(locations.len());
        for (i, &location) in locations.iter().enumerate() {
            let xi_inverse = field.inverse(location)?;
            let denominator = locations
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(1, |acc, (_, &other)| {
                    field.multiply(acc, 1 ^ field.multiply(other, xi_inverse))
                });
            if denominator == 0 {
                return Err(DecodeError::Uncorrectable("repeated error location"));
            }
            let mut magnitude =
                field.multiply(omega.evaluate_at(xi_inverse), field.inverse(denominator)?);
            if field.generator_base() != 0 {
                magnitude = field.multiply(magnitude, xi_inverse);
            }
            magnitudes.push(magnitude);
        }
        Ok(magnitudes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldKind;

    /// Systematic codeword: data followed by the remainder of data·x^ec mod g
    fn encode(field: &'static GaloisField, data: &[Element], ec: usize) -> Vec<Element> {
        let base = field.generator_base() as usize;
        let mut generator = field.one();
        for i in 0..ec {
            let root = field.poly(vec![1, field.exp(i + base)]).unwrap();
            generator = generator.multiply(&root).unwrap();
        }
        let info = field.poly(data.to_vec()).unwrap().multiply_by_monomial(ec, 1);
        let (_, remainder) = info.divide(&generator).unwrap();

        let mut codeword = data.to_vec();
        codeword.extend((0..ec).rev().map(|degree| remainder.coefficient(degree)));
        codeword
    }

    #[test]
    fn test_clean_codeword_has_zero_syndromes() {
        let field = FieldKind::QrCodeField256.field();
        let codeword = encode(field, &[32, 91, 11, 120, 209, 114, 220, 77], 10);
        let decoder = ReedSolomonDecoder::new(field);
        assert!(decoder.syndromes(&codeword, 10).unwrap().is_zero());
    }

    #[test]
    fn test_corrects_single_error() {
        let field = FieldKind::DataMatrixField256.field();
        let codeword = encode(field, &[142, 164, 186], 5);
        let mut received = codeword.clone();
        received[1] ^= 0x5a;

        let decoder = ReedSolomonDecoder::new(field);
        assert_eq!(decoder.decode(&mut received, 5), Ok(1));
        assert_eq!(received, codeword);
    }

    #[test]
    fn test_rejects_out_of_range_codeword() {
        let field = FieldKind::AztecParam.field();
        let decoder = ReedSolomonDecoder::new(field);
        let mut received = vec![1, 2, 16, 3];
        assert_eq!(
            decoder.decode(&mut received, 2),
            Err(DecodeError::ElementOutOfRange {
                index: 2,
                value: 16,
                size: 16
            })
        );
    }

    #[test]
    fn test_locator_without_roots_is_uncorrectable() {
        let field = FieldKind::AztecParam.field();
        let decoder = ReedSolomonDecoder::new(field);
        // Some x^2 + x + c is irreducible over GF(16)
        let sigma = (1..16)
            .map(|c| field.poly(vec![1, 1, c]).unwrap())
            .find(|p| (0..16).all(|x| p.evaluate_at(x) != 0))
            .unwrap();
        assert!(matches!(
            decoder.find_error_locations(&sigma),
            Err(DecodeError::Uncorrectable(_))
        ));
    }
}
