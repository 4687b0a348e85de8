//! Plain-domain arithmetic for the standard secp*r1 primes.
//!
//! Each of these primes has the form `p = 2^k - d` with `d < 2^(k-1)`, so a
//! double-width product `t = hi·2^k + lo` is congruent to `lo + hi·d`.
//! Folding a fixed number of times brings any product below `2^k < 2p`, and
//! one conditional subtraction finishes the reduction. The fold count depends
//! only on `k` and the size of `d`, never on the operands.

use core::fmt;

use num_bigint::BigUint;
use tracing::trace;

use crate::arith::{modulus_limbs, reduce_once, Fe, FieldArith, MontEngine, MAX_LIMBS};
use crate::errors::{EcError, Result};

const WIDE: usize = 2 * MAX_LIMBS + 2;

/// Group-law implementation selected for a domain.
///
/// The specialized variants keep field elements in plain form and reduce
/// with the curve's prime shape; `Generic` works in the Montgomery domain
/// for any odd prime. Results are identical, only the representation differs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Generic,
    Curve128,
    Curve192,
    Curve224,
    Curve256,
    Curve384,
    Curve521,
}

impl Method {
    const SPECIALIZED: [Method; 6] = [
        Method::Curve128,
        Method::Curve192,
        Method::Curve224,
        Method::Curve256,
        Method::Curve384,
        Method::Curve521,
    ];

    /// `(k, d)` such that the method's prime is `2^k - d`.
    fn prime_shape(self) -> Option<(usize, BigUint)> {
        let one = || BigUint::from(1u32);
        let shape = match self {
            Method::Generic => return None,
            // 2^128 - 2^97 - 1
            Method::Curve128 => (128, (one() << 97) + 1u32),
            // 2^192 - 2^64 - 1
            Method::Curve192 => (192, (one() << 64) + 1u32),
            // 2^224 - 2^96 + 1
            Method::Curve224 => (224, (one() << 96) - 1u32),
            // 2^256 - 2^224 + 2^192 + 2^96 - 1
            Method::Curve256 => (256, (one() << 224) - (one() << 192) - (one() << 96) + 1u32),
            // 2^384 - 2^128 - 2^96 + 2^32 - 1
            Method::Curve384 => (384, (one() << 128) + (one() << 96) - (one() << 32) + 1u32),
            // 2^521 - 1
            Method::Curve521 => (521, one()),
        };
        Some(shape)
    }

    /// Pick the specialized method whose prime equals `p`, or `Generic`.
    pub fn for_prime(p: &BigUint) -> Method {
        Self::SPECIALIZED
            .into_iter()
            .find(|method| {
                method
                    .prime_shape()
                    .is_some_and(|(k, d)| (BigUint::from(1u32) << k) - d == *p)
            })
            .unwrap_or(Method::Generic)
    }

    /// Build the field engine this method runs on.
    pub fn engine(self, p: &BigUint) -> Result<Box<dyn FieldArith>> {
        match self.prime_shape() {
            None => Ok(Box::new(MontEngine::new(p)?)),
            Some((k, d)) => {
                let engine = SpecialEngine::new(k, &d)?;
                if engine.modulus() != p {
                    return Err(EcError::RangeError);
                }
                Ok(Box::new(engine))
            }
        }
    }
}

/// Plain-representation engine for `p = 2^k - d`.
#[derive(Clone)]
pub struct SpecialEngine {
    modulus: BigUint,
    p: Fe,
    d: Fe,
    k: usize,
    n: usize,
    folds: usize,
    inv_exp: Fe,
}

impl SpecialEngine {
    pub fn new(k: usize, d: &BigUint) -> Result<Self> {
        let d_bits = d.bits() as usize;
        if k < 3 || d_bits + 1 >= k {
            return Err(EcError::RangeError);
        }
        let modulus = (BigUint::from(1u32) << k) - d;
        let n = modulus_limbs(&modulus)?;

        // A product is below 2^(2k); each fold trims k - bits(d) bits of
        // excess until one bit remains, then two more folds land below 2^k.
        let mut excess = k;
        let mut folds = 0;
        while excess > 1 {
            excess = excess.saturating_sub(k - d_bits) + 1;
            folds += 1;
        }
        folds += 2;
        trace!(k, d_bits, folds, "special reduction configured");

        Ok(SpecialEngine {
            p: Fe::from_biguint(&modulus),
            d: Fe::from_biguint(d),
            inv_exp: Fe::from_biguint(&(&modulus - 2u32)),
            modulus,
            k,
            n,
            folds,
        })
    }

    /// `t -> (t mod 2^k) + (t >> k)·d`
    fn fold(&self, t: &[u64; WIDE]) -> [u64; WIDE] {
        let n = self.n;
        let word = self.k / 64;
        let shift = self.k % 64;

        let mut hi = [0u64; MAX_LIMBS];
        for (i, limb) in hi.iter_mut().enumerate().take(n) {
            let low = t[word + i] >> shift;
            let high = if shift == 0 {
                0
            } else {
                t[word + i + 1] << (64 - shift)
            };
            *limb = low | high;
        }

        let mut out = [0u64; WIDE];
        out[..word].copy_from_slice(&t[..word]);
        if shift != 0 {
            out[word] = t[word] & ((1u64 << shift) - 1);
        }

        for i in 0..n {
            let mut carry = 0u128;
            for j in 0..n {
                let product =
                    (hi[i] as u128) * (self.d.limbs()[j] as u128) + (out[i + j] as u128) + carry;
                out[i + j] = product as u64;
                carry = product >> 64;
            }
            for slot in out.iter_mut().take(2 * n + 1).skip(i + n) {
                let sum = (*slot as u128) + carry;
                *slot = sum as u64;
                carry = sum >> 64;
            }
        }
        out
    }
}

impl fmt::Debug for SpecialEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecialEngine")
            .field("k", &self.k)
            .field("folds", &self.folds)
            .finish()
    }
}

impl FieldArith for SpecialEngine {
    fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn modulus_fe(&self) -> &Fe {
        &self.p
    }

    fn limbs(&self) -> usize {
        self.n
    }

    fn inversion_exponent(&self) -> &Fe {
        &self.inv_exp
    }

    fn encode(&self, x: &BigUint) -> Fe {
        Fe::from_biguint(&(x % &self.modulus))
    }

    fn decode(&self, x: &Fe) -> BigUint {
        x.to_biguint()
    }

    fn one(&self) -> Fe {
        Fe::from_u64(1)
    }

    fn mul(&self, a: &Fe, b: &Fe) -> Fe {
        let n = self.n;
        let mut t = [0u64; WIDE];
        for i in 0..n {
            let mut carry = 0u128;
            for j in 0..n {
                let product = (a.limbs()[i] as u128) * (b.limbs()[j] as u128)
                    + (t[i + j] as u128)
                    + carry;
                t[i + j] = product as u64;
                carry = product >> 64;
            }
            t[i + n] = carry as u64;
        }

        for _ in 0..self.folds {
            t = self.fold(&t);
        }

        let mut limbs = [0u64; MAX_LIMBS];
        limbs[..n].copy_from_slice(&t[..n]);
        reduce_once(&Fe::from_limbs(limbs), false, &self.p, n)
    }
}
