//! # GF(2^n) arithmetic and Reed-Solomon correction for 2D barcodes
//!
//! QR Code, Aztec, Data Matrix and MaxiCode protect their payload with
//! Reed-Solomon codes over small binary fields. This crate provides the
//! field arithmetic, the polynomial algebra on top of it, and the syndrome
//! decoder the symbology readers hand their codewords to.
//!
//! ## Layers
//!
//! 1. **Field**: exp/log tables for O(1) multiply and inverse
//! 2. **Catalog**: one shared field per symbology configuration
//! 3. **Polynomials**: immutable values borrowing their field
//! 4. **Decoder**: syndromes, Euclidean locator, Chien search, Forney
//!
//! ## Usage Example
//!
//! ```
//! use barcode_ecc::{CorrectionConfig, FieldKind, correct};
//!
//! let field = FieldKind::QrCodeField256.field();
//! assert_eq!(field.multiply(field.exp(3), field.exp(5)), field.exp(8));
//!
//! // A block of zeros is a valid codeword of any Reed-Solomon code
//! let mut block = vec![0u32; 26];
//! block[4] = 0x3c;
//! let config = CorrectionConfig::for_qr_code(10);
//! assert_eq!(correct(&config, &mut block), Ok(1));
//! assert!(block.iter().all(|&c| c == 0));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod algebra; // Fields, catalog and polynomials
pub mod reed_solomon; // Syndrome decoder

pub use algebra::{Element, FieldKind, GaloisField, GfPoly};
pub use reed_solomon::ReedSolomonDecoder;

use thiserror::Error;

/// Contract violations in field and polynomial arithmetic
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GfError {
    /// log(0) is undefined
    #[error("logarithm of zero is undefined")]
    LogOfZero,

    /// 0 has no multiplicative inverse
    #[error("zero has no multiplicative inverse")]
    InverseOfZero,

    /// Monomial requested with a negative degree
    #[error("monomial degree cannot be negative: {0}")]
    NegativeDegree(isize),

    /// Polynomial division by the zero polynomial
    #[error("division by the zero polynomial")]
    DivideByZero,

    /// Operands built over different field instances
    #[error("polynomials belong to different fields")]
    FieldMismatch,

    /// Polynomial built from no coefficients
    #[error("polynomial needs at least one coefficient")]
    EmptyCoefficients,

    /// Coefficient not an element of the field
    #[error("{value} is not an element of a field of size {size}")]
    ElementOutOfRange {
        /// Offending value
        value: Element,
        /// Field order
        size: usize,
    },
}

/// Errors from Reed-Solomon decoding
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Too many errors for the code's capacity; the scan must be rejected
    #[error("uncorrectable codeword: {0}")]
    Uncorrectable(&'static str),

    /// Received codeword outside the field
    #[error("codeword {index} has value {value}, outside a field of size {size}")]
    ElementOutOfRange {
        /// Position in the received block
        index: usize,
        /// Offending value
        value: Element,
        /// Field order
        size: usize,
    },

    /// Arithmetic contract violation
    #[error(transparent)]
    Field(#[from] GfError),
}

/// Parameters for correcting one block of codewords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrectionConfig {
    /// Field the block's codewords live in
    pub field: FieldKind,

    /// Number of error-correction codewords in the block
    pub ec_codewords: usize,
}

impl CorrectionConfig {
    /// Configuration for an arbitrary catalog field
    pub fn new(field: FieldKind, ec_codewords: usize) -> Self {
        Self {
            field,
            ec_codewords,
        }
    }

    /// QR Code block with `ec_codewords` check symbols
    pub fn for_qr_code(ec_codewords: usize) -> Self {
        Self::new(FieldKind::QrCodeField256, ec_codewords)
    }

    /// Data Matrix block with `ec_codewords` check symbols
    pub fn for_data_matrix(ec_codewords: usize) -> Self {
        Self::new(FieldKind::DataMatrixField256, ec_codewords)
    }

    /// Number of unknown codeword errors the block can absorb
    pub fn correction_capacity(&self) -> usize {
        self.ec_codewords / 2
    }
}

/// Correct `codewords` in place using the catalog field in `config`
///
/// Returns the number of corrected codewords.
pub fn correct(config: &CorrectionConfig, codewords: &mut [Element]) -> Result<usize, DecodeError> {
    ReedSolomonDecoder::new(config.field.field()).decode(codewords, config.ec_codewords)
}
