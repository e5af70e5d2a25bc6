use barcode_ecc::{Element, GaloisField, GfPoly};

/// Generator polynomial (x - α^b)(x - α^(b+1))...(x - α^(b+ec-1)).
pub fn generator(field: &GaloisField, ec: usize) -> GfPoly<'_> {
    let base = field.generator_base() as usize;
    (0..ec).fold(field.one(), |acc, i| {
        let root = field
            .poly(vec![1, field.exp((i + base) % (field.size() - 1))])
            .expect("root factor");
        acc.multiply(&root).expect("same field")
    })
}

/// Systematic codeword: data followed by data·x^ec mod generator.
pub fn encode(field: &GaloisField, data: &[Element], ec: usize) -> Vec<Element> {
    let message = field
        .poly(data.to_vec())
        .expect("data in field")
        .multiply_by_monomial(ec, 1);
    let (_, remainder) = message.divide(&generator(field, ec)).expect("nonzero generator");

    let mut codeword = data.to_vec();
    codeword.extend((0..ec).rev().map(|degree| remainder.coefficient(degree)));
    codeword
}

/// Deterministic data block of `len` elements below `size`.
pub fn sample_data(len: usize, size: usize, seed: u32) -> Vec<Element> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state % size as u32
        })
        .collect()
}
