//! Key management, DSA-style signatures and Diffie-Hellman over prime-field
//! elliptic curves.
//!
//! This library builds on the `curve` crate:
//! - An [`EcContext`] is sized for a field length and configured with one
//!   domain, either from the standard catalog or from explicit parameters
//! - The context holds a regular and an ephemeral key pair
//! - Scalar multiplication follows the context's [`ScalarMulPolicy`]
//!
//! # Example
//!
//! ```
//! use ecc::{CurveId, EcContext, ScalarMulPolicy, Verification};
//! use num_bigint::BigUint;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut ctx = EcContext::new(256, ScalarMulPolicy::default())?;
//! ctx.set_standard_domain(CurveId::Secp256r1)?;
//!
//! let signer = ctx.generate_key_pair(&mut rng)?;
//! let digest = BigUint::from(0x1234_5678u32);
//!
//! // Every signature needs its own ephemeral key pair.
//! ctx.generate_ephemeral_key_pair(&mut rng)?;
//! let signature = ctx.sign_dsa(&digest, signer.private_key())?;
//!
//! let verdict = ctx.verify_dsa(&digest, &signature, signer.public_key())?;
//! assert_eq!(verdict, Verification::Valid);
//! # Ok::<(), ecc::EcError>(())
//! ```
//!
//! # Security Considerations
//!
//! - Use a cryptographically secure random number generator
//! - Never reuse an ephemeral key pair across signatures
//! - [`ScalarMulPolicy::Fast`] branches on scalar bits; use it only when the
//!   scalars are public

mod context;
mod ecdh;
mod keys;
mod signatures;

#[cfg(test)]
mod tests;

pub use context::{EcContext, KeyPair, KeySlot, MAX_FIELD_BITS, MIN_FIELD_BITS};
pub use curve::{
    AffinePoint, CurveDomain, CurveId, DomainParams, DomainStatus, EcError, EcPoint, PointStatus,
    PointsEquality, Result, ScalarMulPolicy,
};
pub use keys::KeyStatus;
pub use signatures::{Signature, Verification};
