//! Catalog of standard prime-field curves.
//!
//! Parameters are stored as little-endian 32-bit words and expanded into
//! [`DomainParams`] on request.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::errors::{EcError, Result};

/// Domain parameters of a short Weierstrass curve y² = x³ + ax + b over GF(p).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParams {
    pub p: BigUint,
    pub a: BigUint,
    pub b: BigUint,
    pub gx: BigUint,
    pub gy: BigUint,
    pub order: BigUint,
    pub cofactor: BigUint,
}

impl DomainParams {
    pub fn b_is_zero(&self) -> bool {
        self.b == BigUint::from(0u32)
    }
}

/// Identifier of a curve in the built-in catalog.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    Secp112r1,
    Secp112r2,
    Secp128r1,
    Secp128r2,
    Secp160r1,
    Secp160r2,
    Secp192r1,
    Secp224r1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
    Sm2P256,
    TpmBnP256,
}

struct Words {
    p: &'static [u32],
    a: &'static [u32],
    b: &'static [u32],
    gx: &'static [u32],
    gy: &'static [u32],
    order: &'static [u32],
    cofactor: u32,
}

macro_rules! words {
    ($p:ident, $a:ident, $b:ident, $gx:ident, $gy:ident, $order:ident, $cofactor:expr) => {
        Words {
            p: &$p,
            a: &$a,
            b: &$b,
            gx: &$gx,
            gy: &$gy,
            order: &$order,
            cofactor: $cofactor,
        }
    };
}

impl CurveId {
    pub const ALL: [CurveId; 13] = [
        CurveId::Secp112r1,
        CurveId::Secp112r2,
        CurveId::Secp128r1,
        CurveId::Secp128r2,
        CurveId::Secp160r1,
        CurveId::Secp160r2,
        CurveId::Secp192r1,
        CurveId::Secp224r1,
        CurveId::Secp256r1,
        CurveId::Secp384r1,
        CurveId::Secp521r1,
        CurveId::Sm2P256,
        CurveId::TpmBnP256,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            CurveId::Secp112r1 => "secp112r1",
            CurveId::Secp112r2 => "secp112r2",
            CurveId::Secp128r1 => "secp128r1",
            CurveId::Secp128r2 => "secp128r2",
            CurveId::Secp160r1 => "secp160r1",
            CurveId::Secp160r2 => "secp160r2",
            CurveId::Secp192r1 => "secp192r1",
            CurveId::Secp224r1 => "secp224r1",
            CurveId::Secp256r1 => "secp256r1",
            CurveId::Secp384r1 => "secp384r1",
            CurveId::Secp521r1 => "secp521r1",
            CurveId::Sm2P256 => "sm2p256",
            CurveId::TpmBnP256 => "tpm-bn-p256",
        }
    }

    /// Look a curve up by its canonical name or a common alias
    /// (`P-256`, `sm2`, `bn256`, ...). Matching ignores ASCII case.
    pub fn from_name(name: &str) -> Result<Self> {
        const ALIASES: [(&str, CurveId); 9] = [
            ("p-192", CurveId::Secp192r1),
            ("p-224", CurveId::Secp224r1),
            ("p-256", CurveId::Secp256r1),
            ("prime256v1", CurveId::Secp256r1),
            ("p-384", CurveId::Secp384r1),
            ("p-521", CurveId::Secp521r1),
            ("sm2", CurveId::Sm2P256),
            ("bn256", CurveId::TpmBnP256),
            ("bnp256", CurveId::TpmBnP256),
        ];
        Self::ALL
            .into_iter()
            .map(|id| (id.name(), id))
            .chain(ALIASES)
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, id)| id)
            .ok_or(EcError::InvalidCurveId)
    }

    /// Bit length of the field prime.
    pub fn field_bits(self) -> usize {
        match self {
            CurveId::Secp112r1 | CurveId::Secp112r2 => 112,
            CurveId::Secp128r1 | CurveId::Secp128r2 => 128,
            CurveId::Secp160r1 | CurveId::Secp160r2 => 160,
            CurveId::Secp192r1 => 192,
            CurveId::Secp224r1 => 224,
            CurveId::Secp256r1 | CurveId::Sm2P256 | CurveId::TpmBnP256 => 256,
            CurveId::Secp384r1 => 384,
            CurveId::Secp521r1 => 521,
        }
    }

    pub fn params(self) -> DomainParams {
        let words = self.words();
        DomainParams {
            p: BigUint::from_slice(words.p),
            a: BigUint::from_slice(words.a),
            b: BigUint::from_slice(words.b),
            gx: BigUint::from_slice(words.gx),
            gy: BigUint::from_slice(words.gy),
            order: BigUint::from_slice(words.order),
            cofactor: BigUint::from(words.cofactor),
        }
    }

    fn words(self) -> Words {
        match self {
            CurveId::Secp112r1 => words!(
                SECP112R1_P, SECP112R1_A, SECP112R1_B, SECP112R1_GX, SECP112R1_GY, SECP112R1_R, 1
            ),
            CurveId::Secp112r2 => words!(
                SECP112R2_P, SECP112R2_A, SECP112R2_B, SECP112R2_GX, SECP112R2_GY, SECP112R2_R, 4
            ),
            CurveId::Secp128r1 => words!(
                SECP128R1_P, SECP128R1_A, SECP128R1_B, SECP128R1_GX, SECP128R1_GY, SECP128R1_R, 1
            ),
            CurveId::Secp128r2 => words!(
                SECP128R2_P, SECP128R2_A, SECP128R2_B, SECP128R2_GX, SECP128R2_GY, SECP128R2_R, 4
            ),
            CurveId::Secp160r1 => words!(
                SECP160R1_P, SECP160R1_A, SECP160R1_B, SECP160R1_GX, SECP160R1_GY, SECP160R1_R, 1
            ),
            CurveId::Secp160r2 => words!(
                SECP160R2_P, SECP160R2_A, SECP160R2_B, SECP160R2_GX, SECP160R2_GY, SECP160R2_R, 1
            ),
            CurveId::Secp192r1 => words!(
                SECP192R1_P, SECP192R1_A, SECP192R1_B, SECP192R1_GX, SECP192R1_GY, SECP192R1_R, 1
            ),
            CurveId::Secp224r1 => words!(
                SECP224R1_P, SECP224R1_A, SECP224R1_B, SECP224R1_GX, SECP224R1_GY, SECP224R1_R, 1
            ),
            CurveId::Secp256r1 => words!(
                SECP256R1_P, SECP256R1_A, SECP256R1_B, SECP256R1_GX, SECP256R1_GY, SECP256R1_R, 1
            ),
            CurveId::Secp384r1 => words!(
                SECP384R1_P, SECP384R1_A, SECP384R1_B, SECP384R1_GX, SECP384R1_GY, SECP384R1_R, 1
            ),
            CurveId::Secp521r1 => words!(
                SECP521R1_P, SECP521R1_A, SECP521R1_B, SECP521R1_GX, SECP521R1_GY, SECP521R1_R, 1
            ),
            CurveId::Sm2P256 => words!(
                SM2_P256_P, SM2_P256_A, SM2_P256_B, SM2_P256_GX, SM2_P256_GY, SM2_P256_R, 1
            ),
            CurveId::TpmBnP256 => words!(
                TPM_BN_P256_P, TPM_BN_P256_A, TPM_BN_P256_B, TPM_BN_P256_GX, TPM_BN_P256_GY, TPM_BN_P256_R, 1
            ),
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = EcError;

    fn from_str(s: &str) -> Result<Self> {
        CurveId::from_name(s)
    }
}

// secp112r1
const SECP112R1_P: [u32; 4] = [
    0xBEAD208B, 0x5E668076, 0x2ABF62E3, 0x0000DB7C,
];
const SECP112R1_A: [u32; 4] = [
    0xBEAD2088, 0x5E668076, 0x2ABF62E3, 0x0000DB7C,
];
const SECP112R1_B: [u32; 4] = [
    0x11702B22, 0x16EEDE89, 0xF8BA0439, 0x0000659E,
];
const SECP112R1_GX: [u32; 4] = [
    0xF9C2F098, 0x5EE76B55, 0x7239995A, 0x00000948,
];
const SECP112R1_GY: [u32; 4] = [
    0x0FF77500, 0xC0A23E0E, 0xE5AF8724, 0x0000A89C,
];
const SECP112R1_R: [u32; 4] = [
    0xAC6561C5, 0x5E7628DF, 0x2ABF62E3, 0x0000DB7C,
];

// secp112r2
const SECP112R2_P: [u32; 4] = [
    0xBEAD208B, 0x5E668076, 0x2ABF62E3, 0x0000DB7C,
];
const SECP112R2_A: [u32; 4] = [
    0x5C0EF02C, 0x8A0AAAF6, 0xC24C05F3, 0x00006127,
];
const SECP112R2_B: [u32; 4] = [
    0x4C85D709, 0xED74FCC3, 0xF1815DB5, 0x000051DE,
];
const SECP112R2_GX: [u32; 4] = [
    0xD0928643, 0xB4E1649D, 0x0AB5E892, 0x00004BA3,
];
const SECP112R2_GY: [u32; 4] = [
    0x6E956E97, 0x3747DEF3, 0x46F5882E, 0x0000ADCD,
];
const SECP112R2_R: [u32; 4] = [
    0x0520D04B, 0xD7597CA1, 0x0AAFD8B8, 0x000036DF,
];

// secp128r1
const SECP128R1_P: [u32; 4] = [
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFD,
];
const SECP128R1_A: [u32; 4] = [
    0xFFFFFFFC, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFD,
];
const SECP128R1_B: [u32; 4] = [
    0x2CEE5ED3, 0xD824993C, 0x1079F43D, 0xE87579C1,
];
const SECP128R1_GX: [u32; 4] = [
    0xA52C5B86, 0x0C28607C, 0x8B899B2D, 0x161FF752,
];
const SECP128R1_GY: [u32; 4] = [
    0xDDED7A83, 0xC02DA292, 0x5BAFEB13, 0xCF5AC839,
];
const SECP128R1_R: [u32; 4] = [
    0x9038A115, 0x75A30D1B, 0x00000000, 0xFFFFFFFE,
];

// secp128r2
const SECP128R2_P: [u32; 4] = [
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFD,
];
const SECP128R2_A: [u32; 4] = [
    0xBFF9AEE1, 0xBF59CC9B, 0xD1B3BBFE, 0xD6031998,
];
const SECP128R2_B: [u32; 4] = [
    0xBB6D8A5D, 0xDC2C6558, 0x80D02919, 0x5EEEFCA3,
];
const SECP128R2_GX: [u32; 4] = [
    0xCDEBC140, 0xE6FB32A7, 0x5E572983, 0x7B6AA5D8,
];
const SECP128R2_GY: [u32; 4] = [
    0x5FC34B44, 0x7106FE80, 0x894D3AEE, 0x27B6916A,
];
const SECP128R2_R: [u32; 4] = [
    0x0613B5A3, 0xBE002472, 0x7FFFFFFF, 0x3FFFFFFF,
];

// secp160r1
const SECP160R1_P: [u32; 5] = [
    0x7FFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];
const SECP160R1_A: [u32; 5] = [
    0x7FFFFFFC, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];
const SECP160R1_B: [u32; 5] = [
    0xC565FA45, 0x81D4D4AD, 0x65ACF89F, 0x54BD7A8B, 0x1C97BEFC,
];
const SECP160R1_GX: [u32; 5] = [
    0x13CBFC82, 0x68C38BB9, 0x46646989, 0x8EF57328, 0x4A96B568,
];
const SECP160R1_GY: [u32; 5] = [
    0x7AC5FB32, 0x04235137, 0x59DCC912, 0x3168947D, 0x23A62855,
];
const SECP160R1_R: [u32; 6] = [
    0xCA752257, 0xF927AED3, 0x0001F4C8, 0x00000000, 0x00000000, 0x00000001,
];

// secp160r2
const SECP160R2_P: [u32; 5] = [
    0xFFFFAC73, 0xFFFFFFFE, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];
const SECP160R2_A: [u32; 5] = [
    0xFFFFAC70, 0xFFFFFFFE, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];
const SECP160R2_B: [u32; 5] = [
    0xF50388BA, 0x04664D5A, 0xAB572749, 0xFB59EB8B, 0xB4E134D3,
];
const SECP160R2_GX: [u32; 5] = [
    0x3144CE6D, 0x30F7199D, 0x1F4FF11B, 0x293A117E, 0x52DCB034,
];
const SECP160R2_GY: [u32; 5] = [
    0xA7D43F2E, 0xF9982CFE, 0xE071FA0D, 0xE331F296, 0xFEAFFEF2,
];
const SECP160R2_R: [u32; 6] = [
    0xF3A1A16B, 0xE786A818, 0x0000351E, 0x00000000, 0x00000000, 0x00000001,
];

// secp192r1
const SECP192R1_P: [u32; 6] = [
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFE, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];
const SECP192R1_A: [u32; 6] = [
    0xFFFFFFFC, 0xFFFFFFFF, 0xFFFFFFFE, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];
const SECP192R1_B: [u32; 6] = [
    0xC146B9B1, 0xFEB8DEEC, 0x72243049, 0x0FA7E9AB, 0xE59C80E7, 0x64210519,
];
const SECP192R1_GX: [u32; 6] = [
    0x82FF1012, 0xF4FF0AFD, 0x43A18800, 0x7CBF20EB, 0xB03090F6, 0x188DA80E,
];
const SECP192R1_GY: [u32; 6] = [
    0x1E794811, 0x73F977A1, 0x6B24CDD5, 0x631011ED, 0xFFC8DA78, 0x07192B95,
];
const SECP192R1_R: [u32; 6] = [
    0xB4D22831, 0x146BC9B1, 0x99DEF836, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];

// secp224r1
const SECP224R1_P: [u32; 7] = [
    0x00000001, 0x00000000, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF,
];
const SECP224R1_A: [u32; 7] = [
    0xFFFFFFFE, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFE, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF,
];
const SECP224R1_B: [u32; 7] = [
    0x2355FFB4, 0x270B3943, 0xD7BFD8BA, 0x5044B0B7, 0xF5413256, 0x0C04B3AB,
    0xB4050A85,
];
const SECP224R1_GX: [u32; 7] = [
    0x115C1D21, 0x343280D6, 0x56C21122, 0x4A03C1D3, 0x321390B9, 0x6BB4BF7F,
    0xB70E0CBD,
];
const SECP224R1_GY: [u32; 7] = [
    0x85007E34, 0x44D58199, 0x5A074764, 0xCD4375A0, 0x4C22DFE6, 0xB5F723FB,
    0xBD376388,
];
const SECP224R1_R: [u32; 7] = [
    0x5C5C2A3D, 0x13DD2945, 0xE0B8F03E, 0xFFFF16A2, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF,
];

// secp256r1
const SECP256R1_P: [u32; 8] = [
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0x00000000, 0x00000000, 0x00000000,
    0x00000001, 0xFFFFFFFF,
];
const SECP256R1_A: [u32; 8] = [
    0xFFFFFFFC, 0xFFFFFFFF, 0xFFFFFFFF, 0x00000000, 0x00000000, 0x00000000,
    0x00000001, 0xFFFFFFFF,
];
const SECP256R1_B: [u32; 8] = [
    0x27D2604B, 0x3BCE3C3E, 0xCC53B0F6, 0x651D06B0, 0x769886BC, 0xB3EBBD55,
    0xAA3A93E7, 0x5AC635D8,
];
const SECP256R1_GX: [u32; 8] = [
    0xD898C296, 0xF4A13945, 0x2DEB33A0, 0x77037D81, 0x63A440F2, 0xF8BCE6E5,
    0xE12C4247, 0x6B17D1F2,
];
const SECP256R1_GY: [u32; 8] = [
    0x37BF51F5, 0xCBB64068, 0x6B315ECE, 0x2BCE3357, 0x7C0F9E16, 0x8EE7EB4A,
    0xFE1A7F9B, 0x4FE342E2,
];
const SECP256R1_R: [u32; 8] = [
    0xFC632551, 0xF3B9CAC2, 0xA7179E84, 0xBCE6FAAD, 0xFFFFFFFF, 0xFFFFFFFF,
    0x00000000, 0xFFFFFFFF,
];

// secp384r1
const SECP384R1_P: [u32; 12] = [
    0xFFFFFFFF, 0x00000000, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFE, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];
const SECP384R1_A: [u32; 12] = [
    0xFFFFFFFC, 0x00000000, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFE, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];
const SECP384R1_B: [u32; 12] = [
    0xD3EC2AEF, 0x2A85C8ED, 0x8A2ED19D, 0xC656398D, 0x5013875A, 0x0314088F,
    0xFE814112, 0x181D9C6E, 0xE3F82D19, 0x988E056B, 0xE23EE7E4, 0xB3312FA7,
];
const SECP384R1_GX: [u32; 12] = [
    0x72760AB7, 0x3A545E38, 0xBF55296C, 0x5502F25D, 0x82542A38, 0x59F741E0,
    0x8BA79B98, 0x6E1D3B62, 0xF320AD74, 0x8EB1C71E, 0xBE8B0537, 0xAA87CA22,
];
const SECP384R1_GY: [u32; 12] = [
    0x90EA0E5F, 0x7A431D7C, 0x1D7E819D, 0x0A60B1CE, 0xB5F0B8C0, 0xE9DA3113,
    0x289A147C, 0xF8F41DBD, 0x9292DC29, 0x5D9E98BF, 0x96262C6F, 0x3617DE4A,
];
const SECP384R1_R: [u32; 12] = [
    0xCCC52973, 0xECEC196A, 0x48B0A77A, 0x581A0DB2, 0xF4372DDF, 0xC7634D81,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];

// secp521r1
const SECP521R1_P: [u32; 17] = [
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0x000001FF,
];
const SECP521R1_A: [u32; 17] = [
    0xFFFFFFFC, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0x000001FF,
];
const SECP521R1_B: [u32; 17] = [
    0x6B503F00, 0xEF451FD4, 0x3D2C34F1, 0x3573DF88, 0x3BB1BF07, 0x1652C0BD,
    0xEC7E937B, 0x56193951, 0x8EF109E1, 0xB8B48991, 0x99B315F3, 0xA2DA725B,
    0xB68540EE, 0x929A21A0, 0x8E1C9A1F, 0x953EB961, 0x00000051,
];
const SECP521R1_GX: [u32; 17] = [
    0xC2E5BD66, 0xF97E7E31, 0x856A429B, 0x3348B3C1, 0xA2FFA8DE, 0xFE1DC127,
    0xEFE75928, 0xA14B5E77, 0x6B4D3DBA, 0xF828AF60, 0x053FB521, 0x9C648139,
    0x2395B442, 0x9E3ECB66, 0x0404E9CD, 0x858E06B7, 0x000000C6,
];
const SECP521R1_GY: [u32; 17] = [
    0x9FD16650, 0x88BE9476, 0xA272C240, 0x353C7086, 0x3FAD0761, 0xC550B901,
    0x5EF42640, 0x97EE7299, 0x273E662C, 0x17AFBD17, 0x579B4468, 0x98F54449,
    0x2C7D1BD9, 0x5C8A5FB4, 0x9A3BC004, 0x39296A78, 0x00000118,
];
const SECP521R1_R: [u32; 17] = [
    0x91386409, 0xBB6FB71E, 0x899C47AE, 0x3BB5C9B8, 0xF709A5D0, 0x7FCC0148,
    0xBF2F966B, 0x51868783, 0xFFFFFFFA, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0x000001FF,
];

// SM2 P-256
const SM2_P256_P: [u32; 8] = [
    0xFFFFFFFF, 0xFFFFFFFF, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFE,
];
const SM2_P256_A: [u32; 8] = [
    0xFFFFFFFC, 0xFFFFFFFF, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFE,
];
const SM2_P256_B: [u32; 8] = [
    0x4D940E93, 0xDDBCBD41, 0x15AB8F92, 0xF39789F5, 0xCF6509A7, 0x4D5A9E4B,
    0x9D9F5E34, 0x28E9FA9E,
];
const SM2_P256_GX: [u32; 8] = [
    0x334C74C7, 0x715A4589, 0xF2660BE1, 0x8FE30BBF, 0x6A39C994, 0x5F990446,
    0x1F198119, 0x32C4AE2C,
];
const SM2_P256_GY: [u32; 8] = [
    0x2139F0A0, 0x02DF32E5, 0xC62A4740, 0xD0A9877C, 0x6B692153, 0x59BDCEE3,
    0xF4F6779C, 0xBC3736A2,
];
const SM2_P256_R: [u32; 8] = [
    0x39D54123, 0x53BBF409, 0x21C6052B, 0x7203DF6B, 0xFFFFFFFF, 0xFFFFFFFF,
    0xFFFFFFFF, 0xFFFFFFFE,
];

// TPM BN P-256
const TPM_BN_P256_P: [u32; 8] = [
    0xAED33013, 0xD3292DDB, 0x12980A82, 0x0CDC65FB, 0xEE71A49F, 0x46E5F25E,
    0xFFFCF0CD, 0xFFFFFFFF,
];
const TPM_BN_P256_A: [u32; 8] = [
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000,
];
const TPM_BN_P256_B: [u32; 8] = [
    0x00000003, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000,
];
const TPM_BN_P256_GX: [u32; 8] = [
    0x00000001, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000,
];
const TPM_BN_P256_GY: [u32; 8] = [
    0x00000002, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000,
];
const TPM_BN_P256_R: [u32; 8] = [
    0xD10B500D, 0xF62D536C, 0x1299921A, 0x0CDC65FB, 0xEE71A49E, 0x46E5F25E,
    0xFFFCF0CD, 0xFFFFFFFF,
];
