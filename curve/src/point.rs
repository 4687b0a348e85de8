use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConditionallySelectable};

use crate::arith::Fe;

/// Point in Jacobian projective coordinates (X:Y:Z) where (x,y) = (X/Z², Y/Z³).
///
/// Coordinates are held in the representation of the owning domain's field
/// engine. `affine` marks points whose Z is known to encode 1, letting the
/// group law skip Z arithmetic. The point at infinity has Z = 0.
///
/// A point remembers which domain created it; using it with another domain
/// is rejected.
#[derive(Copy, Clone, Debug)]
pub struct EcPoint {
    pub(crate) x: Fe,
    pub(crate) y: Fe,
    pub(crate) z: Fe,
    pub(crate) affine: bool,
    pub(crate) domain: u64,
}

impl EcPoint {
    /// Whether this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        bool::from(self.z.is_zero_ct())
    }

    /// Whether Z is known to be 1.
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.affine
    }

    /// Identity of the domain that created this point.
    #[inline]
    pub fn domain_id(&self) -> u64 {
        self.domain
    }
}

impl ConditionallySelectable for EcPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let affine = u8::conditional_select(&(a.affine as u8), &(b.affine as u8), choice);
        EcPoint {
            x: Fe::conditional_select(&a.x, &b.x, choice),
            y: Fe::conditional_select(&a.y, &b.y, choice),
            z: Fe::conditional_select(&a.z, &b.z, choice),
            affine: affine != 0,
            domain: u64::conditional_select(&a.domain, &b.domain, choice),
        }
    }
}

/// Affine point with plain integer coordinates, as exchanged with callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinePoint {
    /// The x-coordinate of the point
    pub x: BigUint,
    /// The y-coordinate of the point
    pub y: BigUint,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl AffinePoint {
    /// Create a new affine point.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        AffinePoint {
            x,
            y,
            is_infinity: false,
        }
    }

    /// The point at infinity, carrying the affine encoding used for curves
    /// with the given `b` coefficient.
    pub fn infinity(b_is_zero: bool) -> Self {
        let (x, y) = infinity_encoding(b_is_zero);
        AffinePoint {
            x,
            y,
            is_infinity: true,
        }
    }
}

/// Affine stand-in for the point at infinity: (0, 0) when b ≠ 0 and (0, 1)
/// when b = 0. Neither pair satisfies the respective curve equation.
pub fn infinity_encoding(b_is_zero: bool) -> (BigUint, BigUint) {
    let y = if b_is_zero { 1u32 } else { 0u32 };
    (BigUint::from(0u32), BigUint::from(y))
}

/// Whether `(x, y)` is the affine stand-in for infinity.
pub fn is_infinity_encoding(x: &BigUint, y: &BigUint, b_is_zero: bool) -> bool {
    let (ix, iy) = infinity_encoding(b_is_zero);
    *x == ix && *y == iy
}
