//! Table-driven finite field 𝔽_{2^n}
//!
//! Elements are the integers `0..size`, bit i being the coefficient of x^i.
//! Addition is XOR; multiplication goes through the exp/log tables, which
//! are built once from the generator α = 2.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::GfPoly;
use crate::GfError;

/// A field element. Always in `0..field.size()`.
pub type Element = u32;

/// Finite field GF(2^n) with precomputed exp/log tables
///
/// Construct named fields through [`FieldKind`](super::FieldKind); direct
/// construction is for tests and tooling.
pub struct GaloisField {
    size: usize,
    primitive: u32,
    generator_base: u32,
    /// exp_table[i] = α^i
    exp_table: Vec<Element>,
    /// log_table[α^i] = i, log_table[0] is never read
    log_table: Vec<u32>,
    /// Canonical coefficient storage for the zero and one polynomials
    zero: Arc<[Element]>,
    one: Arc<[Element]>,
}

impl GaloisField {
    /// Build GF(`size`) reduced by `primitive`
    ///
    /// `primitive` must be irreducible with 2 as a primitive root, otherwise
    /// the tables come out incomplete. This is not checked.
    pub fn new(primitive: u32, size: usize, generator_base: u32) -> Self {
        debug_assert!(size.is_power_of_two() && size >= 2, "field size must be a power of two");

        let mut exp_table = vec![0; size];
        let mut log_table = vec![0; size];

        let mut x: usize = 1;
        for entry in exp_table.iter_mut() {
            *entry = x as Element;
            x <<= 1;
            if x >= size {
                x ^= primitive as usize;
                x &= size - 1;
            }
        }
        for (i, &value) in exp_table.iter().take(size - 1).enumerate() {
            log_table[value as usize] = i as u32;
        }

        debug!(primitive = format_args!("{primitive:#x}"), size, generator_base, "built field tables");

        Self {
            size,
            primitive,
            generator_base,
            exp_table,
            log_table,
            zero: vec![0].into(),
            one: vec![1].into(),
        }
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reduction polynomial as a bitmask
    pub fn primitive(&self) -> u32 {
        self.primitive
    }

    /// First exponent of the Reed-Solomon generator roots (0 or 1)
    pub fn generator_base(&self) -> u32 {
        self.generator_base
    }

    /// Add (equivalently subtract) two elements
    #[inline]
    pub fn add(&self, a: Element, b: Element) -> Element {
        a ^ b
    }

    /// α^power
    ///
    /// # Panics
    ///
    /// If `power >= size`.
    #[inline]
    pub fn exp(&self, power: usize) -> Element {
        self.exp_table[power]
    }

    /// Discrete logarithm base α
    pub fn log(&self, a: Element) -> Result<u32, GfError> {
        if a == 0 {
            return Err(GfError::LogOfZero);
        }
        Ok(self.log_table[a as usize])
    }

    /// Multiplicative inverse, using a^(size-1) = 1
    pub fn inverse(&self, a: Element) -> Result<Element, GfError> {
        if a == 0 {
            return Err(GfError::InverseOfZero);
        }
        Ok(self.exp_table[self.size - self.log_table[a as usize] as usize - 1])
    }

    /// Multiply two elements
    #[inline]
    pub fn multiply(&self, a: Element, b: Element) -> Element {
        if a == 0 || b == 0 {
            return 0;
        }
        let sum = self.log_table[a as usize] as usize + self.log_table[b as usize] as usize;
        self.exp_table[sum % (self.size - 1)]
    }

    /// `coefficient · x^degree` over this field
    ///
    /// A zero coefficient yields the canonical zero polynomial whatever the
    /// degree.
    pub fn build_monomial(&self, degree: isize, coefficient: Element) -> Result<GfPoly<'_>, GfError> {
        if degree < 0 {
            return Err(GfError::NegativeDegree(degree));
        }
        if coefficient == 0 {
            return Ok(self.zero());
        }
        let mut coefficients = vec![0; degree as usize + 1];
        coefficients[0] = coefficient;
        GfPoly::new(self, coefficients)
    }

    /// The canonical zero polynomial
    pub fn zero(&self) -> GfPoly<'_> {
        GfPoly::from_trimmed(self, Arc::clone(&self.zero))
    }

    /// The canonical one polynomial
    pub fn one(&self) -> GfPoly<'_> {
        GfPoly::from_trimmed(self, Arc::clone(&self.one))
    }

    /// Wrap raw coefficients (highest degree first) into a polynomial
    pub fn poly(&self, coefficients: Vec<Element>) -> Result<GfPoly<'_>, GfError> {
        GfPoly::new(self, coefficients)
    }

    /// True when `coefficients` is this field's canonical zero storage
    pub(crate) fn is_canonical_zero(&self, coefficients: &Arc<[Element]>) -> bool {
        Arc::ptr_eq(&self.zero, coefficients)
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("primitive", &format_args!("{:#x}", self.primitive))
            .field("size", &self.size)
            .field("generator_base", &self.generator_base)
            .finish()
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({:#06x}, {}, {})", self.primitive, self.size, self.generator_base)
    }
}
