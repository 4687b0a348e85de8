//! Key generation, derivation, import and validation.

use curve::{CurveDomain, EcError, EcPoint, PointStatus, PointsEquality, RandomScalar, Result};
use num_bigint::BigUint;
use rand::Rng;
use tracing::debug;

use crate::context::{EcContext, KeyPair, KeySlot};

/// Outcome of a key validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyStatus {
    Valid,
    /// The public key is the point at infinity.
    AtInfinity,
    /// The public key does not satisfy the curve equation.
    NotOnCurve,
    /// `order·Q` is not the point at infinity.
    BadOrder,
    /// The private key is outside `(0, order)`.
    InvalidPrivateKey,
    /// The public key is not the private key times the base point.
    Mismatch,
}

/// Whether `private` lies in `(0, order)`.
pub(crate) fn check_private(domain: &CurveDomain, private: &BigUint) -> Result<()> {
    if private.bits() == 0 || private >= domain.order() {
        return Err(EcError::InvalidPrivateKey);
    }
    Ok(())
}

fn public_status(domain: &CurveDomain, public: &EcPoint) -> Result<KeyStatus> {
    match domain.check_point(public)? {
        PointStatus::AtInfinity => return Ok(KeyStatus::AtInfinity),
        PointStatus::NotValid => return Ok(KeyStatus::NotOnCurve),
        PointStatus::Valid => {}
    }
    if !domain
        .mul_point_by_scalar_fast(public, domain.order())?
        .is_infinity()
    {
        return Ok(KeyStatus::BadOrder);
    }
    Ok(KeyStatus::Valid)
}

impl EcContext {
    /// Generate a fresh key pair with the private key drawn uniformly from
    /// `[1, order)`. The context's slots are left untouched.
    pub fn generate_key_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<KeyPair> {
        let domain = self.domain()?;
        let private = BigUint::random_below(rng, domain.order())?;
        let public = domain.mul_base_point(&private);
        debug!(domain = domain.id(), "key pair generated");
        Ok(KeyPair { private, public })
    }

    /// Generate a key pair and store it in the ephemeral slot, ready for one
    /// call to [`EcContext::sign_dsa`]. Returns the public point.
    pub fn generate_ephemeral_key_pair<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<EcPoint> {
        let pair = self.generate_key_pair(rng)?;
        let public = pair.public;
        self.configured_mut()?.ephemeral = pair;
        Ok(public)
    }

    /// `private·G`, for `private` in `(0, order)`.
    pub fn derive_public_key(&self, private: &BigUint) -> Result<EcPoint> {
        let domain = self.domain()?;
        check_private(domain, private)?;
        Ok(domain.mul_base_point(private))
    }

    /// Import key material into a slot. Either half may be omitted, in which
    /// case that half of the slot keeps its previous value.
    ///
    /// The public key is passed through affine export and re-import so the
    /// stored point is normalized.
    pub fn set_key_pair(
        &mut self,
        private: Option<&BigUint>,
        public: Option<&EcPoint>,
        slot: KeySlot,
    ) -> Result<()> {
        if private.is_none() && public.is_none() {
            return Err(EcError::NullInput);
        }
        let state = self.configured_mut()?;
        if let Some(private) = private {
            check_private(&state.domain, private)?;
        }
        let public = match public {
            Some(point) => {
                let affine = state.domain.get_point(point)?;
                Some(state.domain.set_point(&affine.x, &affine.y)?)
            }
            None => None,
        };

        let pair = state.slot_mut(slot);
        if let Some(private) = private {
            pair.private = private.clone();
        }
        if let Some(public) = public {
            pair.public = public;
        }
        debug!(?slot, "key material imported");
        Ok(())
    }

    /// Check a public key: finite, on the curve, and of order r.
    pub fn validate_public_key(&self, public: &EcPoint) -> Result<KeyStatus> {
        public_status(self.domain()?, public)
    }

    /// Check whichever halves are supplied, and that they match when both
    /// are.
    pub fn validate_key_pair(
        &self,
        private: Option<&BigUint>,
        public: Option<&EcPoint>,
    ) -> Result<KeyStatus> {
        if private.is_none() && public.is_none() {
            return Err(EcError::NullInput);
        }
        let domain = self.domain()?;
        if let Some(private) = private {
            if check_private(domain, private).is_err() {
                return Ok(KeyStatus::InvalidPrivateKey);
            }
        }
        if let Some(public) = public {
            let status = public_status(domain, public)?;
            if status != KeyStatus::Valid {
                return Ok(status);
            }
        }
        if let (Some(private), Some(public)) = (private, public) {
            let expected = domain.mul_base_point(private);
            if domain.compare_points(&expected, public)? == PointsEquality::NotEqual {
                return Ok(KeyStatus::Mismatch);
            }
        }
        Ok(KeyStatus::Valid)
    }
}
