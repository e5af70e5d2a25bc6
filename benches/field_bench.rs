//! Field arithmetic and decoding benchmarks

use barcode_ecc::{FieldKind, ReedSolomonDecoder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_field(c: &mut Criterion) {
    let field = FieldKind::QrCodeField256.field();

    c.bench_function("gf256_multiply_all_pairs", |b| {
        b.iter(|| {
            let mut acc = 0;
            for x in 0..256 {
                for y in 0..256 {
                    acc ^= field.multiply(black_box(x), black_box(y));
                }
            }
            acc
        });
    });

    c.bench_function("gf4096_build_tables", |b| {
        b.iter(|| barcode_ecc::GaloisField::new(black_box(0x1069), 4096, 1));
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let field = FieldKind::QrCodeField256.field();
    let decoder = ReedSolomonDecoder::new(field);

    // 26-codeword block with every symbol zero except two damaged ones
    let mut damaged = vec![0u32; 26];
    damaged[3] = 0x41;
    damaged[20] = 0x9c;

    c.bench_function("qr_decode_two_errors", |b| {
        b.iter(|| {
            let mut block = damaged.clone();
            decoder.decode(black_box(&mut block), 10)
        });
    });

    let clean = vec![0u32; 26];
    c.bench_function("qr_syndromes_clean", |b| {
        b.iter(|| decoder.syndromes(black_box(&clean), 10));
    });
}

criterion_group!(benches, benchmark_field, benchmark_decode);
criterion_main!(benches);
