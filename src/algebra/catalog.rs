//! Named fields used by the barcode symbologies
//!
//! Each distinct (primitive, size, generator base) definition is built at
//! most once, on first request, and shared for the life of the process.
//! Kinds with identical definitions resolve to the same instance.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::GaloisField;

/// One field definition backing one or more [`FieldKind`]s.
struct FieldSlot {
    primitive: u32,
    size: usize,
    generator_base: u32,
    cell: OnceLock<GaloisField>,
}

impl FieldSlot {
    const fn new(primitive: u32, size: usize, generator_base: u32) -> Self {
        Self {
            primitive,
            size,
            generator_base,
            cell: OnceLock::new(),
        }
    }

    fn get(&'static self) -> &'static GaloisField {
        self.cell
            .get_or_init(|| GaloisField::new(self.primitive, self.size, self.generator_base))
    }
}

// x^12 + x^6 + x^5 + x^3 + 1
static AZTEC_DATA_12: FieldSlot = FieldSlot::new(0x1069, 4096, 1);
// x^10 + x^3 + 1
static AZTEC_DATA_10: FieldSlot = FieldSlot::new(0x409, 1024, 1);
// x^6 + x + 1, shared with MaxiCode
static FIELD_64: FieldSlot = FieldSlot::new(0x43, 64, 1);
// x^4 + x + 1
static AZTEC_PARAM: FieldSlot = FieldSlot::new(0x13, 16, 1);
// x^8 + x^4 + x^3 + x^2 + 1
static QR_CODE_256: FieldSlot = FieldSlot::new(0x011D, 256, 0);
// x^8 + x^5 + x^3 + x^2 + 1, shared with Aztec 8-bit data
static DATA_MATRIX_256: FieldSlot = FieldSlot::new(0x012D, 256, 1);

/// The supported field configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// Aztec 12-bit data codewords, GF(4096)
    AztecData12,
    /// Aztec 10-bit data codewords, GF(1024)
    AztecData10,
    /// Aztec 6-bit data codewords, GF(64)
    AztecData6,
    /// Aztec mode message, GF(16)
    AztecParam,
    /// QR Code, GF(256) with generator base 0
    QrCodeField256,
    /// Data Matrix, GF(256)
    DataMatrixField256,
    /// Aztec 8-bit data codewords, same field as Data Matrix
    AztecData8,
    /// MaxiCode, same field as Aztec 6-bit data
    MaxiCodeField64,
}

impl FieldKind {
    /// Every kind in the catalog
    pub const ALL: [FieldKind; 8] = [
        FieldKind::AztecData12,
        FieldKind::AztecData10,
        FieldKind::AztecData6,
        FieldKind::AztecParam,
        FieldKind::QrCodeField256,
        FieldKind::DataMatrixField256,
        FieldKind::AztecData8,
        FieldKind::MaxiCodeField64,
    ];

    fn slot(self) -> &'static FieldSlot {
        match self {
            FieldKind::AztecData12 => &AZTEC_DATA_12,
            FieldKind::AztecData10 => &AZTEC_DATA_10,
            FieldKind::AztecData6 | FieldKind::MaxiCodeField64 => &FIELD_64,
            FieldKind::AztecParam => &AZTEC_PARAM,
            FieldKind::QrCodeField256 => &QR_CODE_256,
            FieldKind::DataMatrixField256 | FieldKind::AztecData8 => &DATA_MATRIX_256,
        }
    }

    /// The shared field instance, built on first use
    pub fn field(self) -> &'static GaloisField {
        self.slot().get()
    }

    /// Reduction polynomial, without building the field
    pub fn primitive(self) -> u32 {
        self.slot().primitive
    }

    /// Field order, without building the field
    pub fn size(self) -> usize {
        self.slot().size
    }

    /// Generator base, without building the field
    pub fn generator_base(self) -> u32 {
        self.slot().generator_base
    }

    /// Stable lower-case name
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::AztecData12 => "aztec-data-12",
            FieldKind::AztecData10 => "aztec-data-10",
            FieldKind::AztecData6 => "aztec-data-6",
            FieldKind::AztecParam => "aztec-param",
            FieldKind::QrCodeField256 => "qr-code",
            FieldKind::DataMatrixField256 => "data-matrix",
            FieldKind::AztecData8 => "aztec-data-8",
            FieldKind::MaxiCodeField64 => "maxicode",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any [`FieldKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field `{0}`")]
pub struct UnknownFieldKind(
    /// Name that failed to parse
    pub String,
);

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFieldKind(s.to_string()))
    }
}
