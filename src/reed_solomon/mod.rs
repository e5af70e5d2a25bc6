//! Reed-Solomon error correction
//!
//! A received block is read as a polynomial, highest degree first. Decoding
//! runs the classic four steps:
//!
//! 1. Syndromes: the block evaluated at the code's roots α^base..α^(base+2s-1)
//! 2. Error locator and evaluator from the extended Euclidean algorithm
//! 3. Error locations by Chien search
//! 4. Error values by Forney's formula
//!
//! Encoding is left to the symbology layers.

mod decoder;

pub use decoder::ReedSolomonDecoder;
