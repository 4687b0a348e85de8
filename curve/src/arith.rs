//! Fixed-width modular arithmetic over a runtime modulus.
//!
//! Elements are stored as [`MAX_LIMBS`] little-endian 64-bit limbs. An engine
//! only ever touches the low `n` limbs, where `n` is the limb count of its
//! modulus; the remaining limbs stay zero. Every operation returns a fully
//! reduced value, so two elements of the same engine are equal exactly when
//! their limbs are equal.

use core::fmt::{self, Debug, Formatter};

use num_bigint::BigUint;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::errors::{EcError, Result};

/// Limb capacity of a field element: 576 bits, enough for 521-bit curves.
pub const MAX_LIMBS: usize = 9;

/// Widest modulus an engine accepts, in bits.
pub const MAX_MODULUS_BITS: usize = MAX_LIMBS * 64;

/// Field element in the representation of whichever engine produced it.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fe {
    limbs: [u64; MAX_LIMBS],
}

impl Fe {
    pub const ZERO: Self = Fe {
        limbs: [0; MAX_LIMBS],
    };

    #[inline]
    pub fn from_u64(val: u64) -> Self {
        let mut limbs = [0; MAX_LIMBS];
        limbs[0] = val;
        Fe { limbs }
    }

    #[inline]
    pub(crate) const fn from_limbs(limbs: [u64; MAX_LIMBS]) -> Self {
        Fe { limbs }
    }

    /// Copy the digits of `x` into limbs. The caller guarantees `x` fits.
    pub(crate) fn from_biguint(x: &BigUint) -> Self {
        let mut limbs = [0; MAX_LIMBS];
        for (limb, digit) in limbs.iter_mut().zip(x.iter_u64_digits()) {
            *limb = digit;
        }
        Fe { limbs }
    }

    pub(crate) fn to_biguint(self) -> BigUint {
        let mut words = Vec::with_capacity(MAX_LIMBS * 2);
        for limb in self.limbs {
            words.push(limb as u32);
            words.push((limb >> 32) as u32);
        }
        BigUint::new(words)
    }

    #[inline]
    pub fn limbs(&self) -> &[u64; MAX_LIMBS] {
        &self.limbs
    }

    #[inline]
    pub fn is_zero_ct(&self) -> Choice {
        let acc = self.limbs.iter().fold(0u64, |acc, limb| acc | limb);
        acc.ct_eq(&0)
    }

    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        let limb = index / 64;
        limb < MAX_LIMBS && (self.limbs[limb] >> (index % 64)) & 1 == 1
    }
}

impl Debug for Fe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fe(0x")?;
        for limb in self.limbs.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        write!(f, ")")
    }
}

impl ConditionallySelectable for Fe {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0; MAX_LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Fe { limbs }
    }
}

impl ConstantTimeEq for Fe {
    fn ct_eq(&self, other: &Self) -> Choice {
        let diff = self
            .limbs
            .iter()
            .zip(other.limbs.iter())
            .fold(0u64, |acc, (a, b)| acc | (a ^ b));
        diff.ct_eq(&0)
    }
}

/// Carrying addition
#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Borrowing subtraction
#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

fn add_limbs(a: &Fe, b: &Fe, n: usize) -> (Fe, bool) {
    let mut out = Fe::ZERO;
    let mut carry = false;
    for i in 0..n {
        let (sum, c) = carrying_add(a.limbs[i], b.limbs[i], carry);
        out.limbs[i] = sum;
        carry = c;
    }
    (out, carry)
}

fn sub_limbs(a: &Fe, b: &Fe, n: usize) -> (Fe, bool) {
    let mut out = Fe::ZERO;
    let mut borrow = false;
    for i in 0..n {
        let (diff, b) = borrowing_sub(a.limbs[i], b.limbs[i], borrow);
        out.limbs[i] = diff;
        borrow = b;
    }
    (out, borrow)
}

/// Subtract `m` once if `overflow` is set or `value >= m`.
#[inline]
pub(crate) fn reduce_once(value: &Fe, overflow: bool, m: &Fe, n: usize) -> Fe {
    let (diff, borrow) = sub_limbs(value, m, n);
    Fe::conditional_select(value, &diff, Choice::from((overflow | !borrow) as u8))
}

/// Add two reduced values mod `m`.
#[inline]
pub(crate) fn add_mod(a: &Fe, b: &Fe, m: &Fe, n: usize) -> Fe {
    let (sum, carry) = add_limbs(a, b, n);
    reduce_once(&sum, carry, m, n)
}

/// Subtract two reduced values mod `m`.
#[inline]
pub(crate) fn sub_mod(a: &Fe, b: &Fe, m: &Fe, n: usize) -> Fe {
    let (diff, borrow) = sub_limbs(a, b, n);
    let (wrapped, _) = add_limbs(&diff, m, n);
    Fe::conditional_select(&diff, &wrapped, Choice::from(borrow as u8))
}

/// Modular arithmetic bound to one modulus.
///
/// Implementations pick their own internal representation (Montgomery or
/// plain); values only cross the boundary through [`FieldArith::encode`] and
/// [`FieldArith::decode`].
pub trait FieldArith: Debug + Send + Sync {
    fn modulus(&self) -> &BigUint;

    /// The modulus as limbs, in plain form.
    fn modulus_fe(&self) -> &Fe;

    /// Number of 64-bit limbs in use.
    fn limbs(&self) -> usize;

    /// `modulus - 2`, the exponent used for inversion.
    fn inversion_exponent(&self) -> &Fe;

    /// Convert an integer into the engine representation (reducing it first).
    fn encode(&self, x: &BigUint) -> Fe;

    fn decode(&self, x: &Fe) -> BigUint;

    /// The representation of 1.
    fn one(&self) -> Fe;

    fn mul(&self, a: &Fe, b: &Fe) -> Fe;

    #[inline]
    fn sqr(&self, a: &Fe) -> Fe {
        self.mul(a, a)
    }

    #[inline]
    fn add(&self, a: &Fe, b: &Fe) -> Fe {
        add_mod(a, b, self.modulus_fe(), self.limbs())
    }

    #[inline]
    fn sub(&self, a: &Fe, b: &Fe) -> Fe {
        sub_mod(a, b, self.modulus_fe(), self.limbs())
    }

    #[inline]
    fn neg(&self, a: &Fe) -> Fe {
        sub_mod(&Fe::ZERO, a, self.modulus_fe(), self.limbs())
    }

    #[inline]
    fn double(&self, a: &Fe) -> Fe {
        self.add(a, a)
    }

    #[inline]
    fn is_zero(&self, a: &Fe) -> bool {
        bool::from(a.is_zero_ct())
    }

    /// Multiplicative inverse by Fermat's little theorem; the modulus must be
    /// prime. The inverse of zero is zero.
    fn inv(&self, a: &Fe) -> Fe {
        let exp = self.inversion_exponent();
        let mut acc = self.one();
        for i in (0..self.limbs() * 64).rev() {
            acc = self.sqr(&acc);
            if exp.bit(i) {
                acc = self.mul(&acc, a);
            }
        }
        acc
    }
}

/// Validate an odd modulus and return its limb count.
pub(crate) fn modulus_limbs(modulus: &BigUint) -> Result<usize> {
    let bits = modulus.bits() as usize;
    if bits < 2 || !modulus.bit(0) || bits > MAX_MODULUS_BITS {
        return Err(EcError::RangeError);
    }
    Ok(bits.div_ceil(64))
}

/// `-m^{-1} mod 2^64` by Newton iteration; each step doubles the correct bits.
fn neg_inverse_u64(m0: u64) -> u64 {
    let mut inv: u64 = 1;
    for _ in 0..6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(inv)));
    }
    inv.wrapping_neg()
}

/// Montgomery engine for an odd modulus `m` with `R = 2^(64n)`.
///
/// Elements are held as `x·R mod m`.
#[derive(Clone, Debug)]
pub struct MontEngine {
    modulus: BigUint,
    m: Fe,
    n: usize,
    /// -m^{-1} mod 2^64
    mu: u64,
    /// R^2 mod m, for conversion into Montgomery form
    r2: Fe,
    /// R mod m
    one: Fe,
    inv_exp: Fe,
}

impl MontEngine {
    /// Bind an engine to `modulus`. Fails with `RangeError` on an even
    /// modulus, one below 3, or one wider than [`MAX_MODULUS_BITS`].
    pub fn new(modulus: &BigUint) -> Result<Self> {
        let n = modulus_limbs(modulus)?;
        let r = BigUint::from(1u32) << (64 * n);
        let one = Fe::from_biguint(&(&r % modulus));
        let r2 = Fe::from_biguint(&((&r * &r) % modulus));
        let m = Fe::from_biguint(modulus);

        Ok(MontEngine {
            modulus: modulus.clone(),
            m,
            n,
            mu: neg_inverse_u64(m.limbs[0]),
            r2,
            one,
            inv_exp: Fe::from_biguint(&(modulus - 2u32)),
        })
    }

    /// Montgomery multiplication: (a * b * R^{-1}) mod m
    fn montgomery_mul(&self, a: &Fe, b: &Fe) -> Fe {
        let n = self.n;
        let mut t = [0u64; 2 * MAX_LIMBS + 1];

        for i in 0..n {
            let mut carry = 0u128;
            for j in 0..n {
                let product =
                    (a.limbs[i] as u128) * (b.limbs[j] as u128) + (t[i + j] as u128) + carry;
                t[i + j] = product as u64;
                carry = product >> 64;
            }
            t[i + n] = carry as u64;
        }

        // Montgomery reduction
        for i in 0..n {
            let k = t[i].wrapping_mul(self.mu);
            let mut carry = 0u128;

            for j in 0..n {
                let product =
                    (k as u128) * (self.m.limbs[j] as u128) + (t[i + j] as u128) + carry;
                t[i + j] = product as u64;
                carry = product >> 64;
            }

            for slot in t.iter_mut().take(2 * n + 1).skip(i + n) {
                let sum = (*slot as u128) + carry;
                *slot = sum as u64;
                carry = sum >> 64;
            }
        }

        // High half is below 2m; one conditional subtraction finishes it.
        let mut result = Fe::ZERO;
        result.limbs[..n].copy_from_slice(&t[n..2 * n]);
        reduce_once(&result, t[2 * n] != 0, &self.m, n)
    }
}

impl FieldArith for MontEngine {
    fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn modulus_fe(&self) -> &Fe {
        &self.m
    }

    fn limbs(&self) -> usize {
        self.n
    }

    fn inversion_exponent(&self) -> &Fe {
        &self.inv_exp
    }

    fn encode(&self, x: &BigUint) -> Fe {
        let reduced = Fe::from_biguint(&(x % &self.modulus));
        self.montgomery_mul(&reduced, &self.r2)
    }

    fn decode(&self, x: &Fe) -> BigUint {
        self.montgomery_mul(x, &Fe::from_u64(1)).to_biguint()
    }

    fn one(&self) -> Fe {
        self.one
    }

    #[inline]
    fn mul(&self, a: &Fe, b: &Fe) -> Fe {
        self.montgomery_mul(a, b)
    }
}
