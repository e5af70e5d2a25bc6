//! Damage a Data Matrix block and correct it again.

use barcode_ecc::{correct, CorrectionConfig, FieldKind};

fn main() -> anyhow::Result<()> {
    let field = FieldKind::DataMatrixField256.field();

    // 10x10 symbol: 3 data codewords ("123456" in ASCII digit-pair mode)
    // followed by 5 check codewords
    let original = [142u32, 164, 186, 114, 25, 5, 88, 102];
    let config = CorrectionConfig::for_data_matrix(5);

    let mut block = original.to_vec();
    block[1] ^= 0x0f;
    block[6] ^= 0xa0;

    println!("field:     {field}");
    println!("received:  {block:?}");
    let fixed = correct(&config, &mut block)?;
    println!("corrected: {block:?} ({fixed} codewords)");
    println!("matches original: {}", block == original);

    Ok(())
}
