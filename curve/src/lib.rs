//! Elliptic curve arithmetic over prime fields GF(p).
//!
//! This crate provides the modular arithmetic engines, a catalog of standard
//! short Weierstrass curves, Jacobian point arithmetic, and scalar
//! multiplication in both a fast and a constant-time form. Key management
//! and protocols live in the `ecc` crate.
//!
//! A [`CurveDomain`] owns two independent engines: one for the field prime,
//! selected per curve through [`Method`], and a Montgomery engine for the
//! group order.

mod arith;
mod catalog;
mod domain;
mod errors;
mod group;
mod mul;
mod point;
mod random;
mod special;

pub use arith::{Fe, FieldArith, MontEngine, MAX_LIMBS, MAX_MODULUS_BITS};
pub use catalog::{CurveId, DomainParams};
pub use domain::{CurveDomain, DomainStatus, PointStatus, PointsEquality};
pub use errors::{EcError, Result};
pub use group::GroupLaw;
pub use mul::{optimal_window_size, ScalarMulPolicy, WindowTable};
pub use point::{infinity_encoding, is_infinity_encoding, AffinePoint, EcPoint};
pub use random::RandomScalar;
pub use special::{Method, SpecialEngine};
