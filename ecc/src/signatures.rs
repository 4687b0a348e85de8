//! DSA-style signatures over the configured domain.

use curve::{EcError, EcPoint, PointStatus, Result};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::EcContext;
use crate::keys::check_private;

/// A DSA-style signature `(r, s)`.
///
/// `r` is the affine x-coordinate of the ephemeral public key reduced mod
/// the order, and `s = k⁻¹·(e + d·r) mod order` for digest `e`, private key
/// `d` and ephemeral private key `k`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
}

/// Outcome of [`EcContext::verify_dsa`].
///
/// A signature that does not verify is an ordinary outcome, not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verification {
    Valid,
    Invalid,
}

impl EcContext {
    /// Sign `digest` with `private` using the ephemeral key pair stored in
    /// the context.
    ///
    /// The caller must generate a fresh ephemeral pair for every signature
    /// (see [`EcContext::generate_ephemeral_key_pair`]) and must not reuse
    /// it; reuse reveals the private key. This is not enforced here.
    pub fn sign_dsa(&self, digest: &BigUint, private: &BigUint) -> Result<Signature> {
        let state = self.configured()?;
        let domain = &state.domain;
        if digest >= domain.order() {
            return Err(EcError::MessageError);
        }
        check_private(domain, private)?;

        let ephemeral = &state.ephemeral;
        if !ephemeral.has_private() {
            return Err(EcError::EphemeralKeyError);
        }
        let r = match domain.affine_x(&ephemeral.public)? {
            Some(x) => x % domain.order(),
            None => return Err(EcError::EphemeralKeyError),
        };
        if r.bits() == 0 {
            return Err(EcError::EphemeralKeyError);
        }

        // s = k⁻¹·(e + d·r) in the order's Montgomery domain
        let f = domain.order_arith();
        let k_inv = f.inv(&f.encode(&ephemeral.private));
        let dr = f.mul(&f.encode(private), &f.encode(&r));
        let s = f.decode(&f.mul(&k_inv, &f.add(&f.encode(digest), &dr)));
        if s.bits() == 0 {
            return Err(EcError::EphemeralKeyError);
        }

        debug!(domain = domain.id(), "digest signed");
        Ok(Signature { r, s })
    }

    /// Verify `signature` on `digest` against `public`.
    ///
    /// Fails with [`EcError::MessageError`] when the digest is not below the
    /// order. A signature component outside `(0, order)`, a public key that
    /// is infinite or off the curve, and a failed equation all yield
    /// [`Verification::Invalid`]. Zero is outside that range: `r = 0` or
    /// `s = 0` is always rejected, even though either fits below the order.
    pub fn verify_dsa(
        &self,
        digest: &BigUint,
        signature: &Signature,
        public: &EcPoint,
    ) -> Result<Verification> {
        let domain = self.domain()?;
        if digest >= domain.order() {
            return Err(EcError::MessageError);
        }
        if domain.check_point(public)? != PointStatus::Valid {
            debug!("public key rejected");
            return Ok(Verification::Invalid);
        }
        let Signature { r, s } = signature;
        let in_range = |v: &BigUint| v.bits() != 0 && v < domain.order();
        if !in_range(r) || !in_range(s) {
            debug!("signature component out of range");
            return Ok(Verification::Invalid);
        }

        let f = domain.order_arith();
        let h = f.inv(&f.encode(s));
        let h1 = f.decode(&f.mul(&f.encode(digest), &h));
        let h2 = f.decode(&f.mul(&f.encode(r), &h));

        let point = domain.mul_base_and_point(&h1, public, &h2)?;
        let verdict = match domain.affine_x(&point)? {
            Some(x) if &x % domain.order() == *r => Verification::Valid,
            _ => Verification::Invalid,
        };
        debug!(?verdict, "signature checked");
        Ok(verdict)
    }
}
