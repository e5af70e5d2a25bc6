//! Finite field algebra
//!
//! - Table-driven GF(2^n) with generator α = 2
//! - Catalog of the fields the barcode symbologies use
//! - Polynomials over a field

mod catalog;
mod field;
mod polynomial;

pub use catalog::{FieldKind, UnknownFieldKind};
pub use field::{Element, GaloisField};
pub use polynomial::GfPoly;
