//! Elliptic-curve Diffie-Hellman.

use curve::{CurveDomain, EcError, EcPoint, Result};
use num_bigint::BigUint;
use tracing::debug;

use crate::context::EcContext;
use crate::keys::check_private;

fn shared_x(domain: &CurveDomain, scalar: &BigUint, peer: &EcPoint) -> Result<BigUint> {
    let shared = domain.mul_point_by_scalar(peer, scalar)?;
    match domain.affine_x(&shared)? {
        Some(x) => {
            debug!(domain = domain.id(), "shared secret derived");
            Ok(x)
        }
        None => Err(EcError::ShareKeyError),
    }
}

impl EcContext {
    /// Affine x-coordinate of `own_private·peer_public`.
    pub fn derive_shared_secret(
        &self,
        own_private: &BigUint,
        peer_public: &EcPoint,
    ) -> Result<BigUint> {
        let domain = self.domain()?;
        check_private(domain, own_private)?;
        shared_x(domain, own_private, peer_public)
    }

    /// Cofactor Diffie-Hellman: the x-coordinate of
    /// `(h·own_private mod order)·peer_public`, which clears any small-order
    /// component of the peer's point.
    pub fn derive_shared_secret_cofactor(
        &self,
        own_private: &BigUint,
        peer_public: &EcPoint,
    ) -> Result<BigUint> {
        let domain = self.domain()?;
        check_private(domain, own_private)?;
        let f = domain.order_arith();
        let scalar = f.decode(&f.mul(domain.cofactor_encoded(), &f.encode(own_private)));
        shared_x(domain, &scalar, peer_public)
    }

    /// [`derive_shared_secret`](Self::derive_shared_secret) written big-endian
    /// into `out`, left-padded to the field length. Returns the number of
    /// bytes written.
    pub fn derive_shared_secret_into(
        &self,
        own_private: &BigUint,
        peer_public: &EcPoint,
        out: &mut [u8],
    ) -> Result<usize> {
        let len = self.domain()?.field_bytes();
        if out.len() < len {
            return Err(EcError::RangeError);
        }
        let secret = self.derive_shared_secret(own_private, peer_public)?.to_bytes_be();
        let (padding, value) = out[..len].split_at_mut(len - secret.len());
        padding.fill(0);
        value.copy_from_slice(&secret);
        Ok(len)
    }
}
