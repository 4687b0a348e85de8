use num_bigint::BigUint;
use rand::Rng;
use tracing::trace;

use crate::errors::{EcError, Result};

/// Helper trait for sampling scalars from a caller-supplied generator.
pub trait RandomScalar: Sized {
    /// Uniform value in `[1, bound)` by rejection sampling.
    fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> Result<Self>;
}

impl RandomScalar for BigUint {
    fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> Result<Self> {
        if *bound < BigUint::from(2u32) {
            return Err(EcError::RangeError);
        }
        let bits = bound.bits() as usize;
        let mut bytes = vec![0u8; bits.div_ceil(8)];
        let top_mask = match bits % 8 {
            0 => 0xff,
            r => (1u8 << r) - 1,
        };

        let mut attempts = 0u32;
        loop {
            rng.fill(bytes.as_mut_slice());
            bytes[0] &= top_mask;
            let candidate = BigUint::from_bytes_be(&bytes);
            if candidate.bits() != 0 && candidate < *bound {
                if attempts > 0 {
                    trace!(attempts, "scalar sampling retried");
                }
                return Ok(candidate);
            }
            attempts += 1;
        }
    }
}
