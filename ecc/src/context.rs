//! The curve context: configured size, scalar-multiplication policy, the
//! active domain and the two key slots.

use core::fmt;

use curve::{CurveDomain, CurveId, DomainParams, EcError, EcPoint, Result, ScalarMulPolicy};
use num_bigint::BigUint;
use tracing::debug;

/// Smallest field size a context can be configured for.
pub const MIN_FIELD_BITS: usize = 8;
/// Largest field size a context can be configured for.
pub const MAX_FIELD_BITS: usize = curve::MAX_MODULUS_BITS;

/// Which key slot of the context an operation addresses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeySlot {
    /// Long-term key pair.
    Regular,
    /// Single-use pair consumed by [`EcContext::sign_dsa`].
    Ephemeral,
}

/// A private scalar and its public point.
///
/// An empty pair holds zero and the point at infinity. The private scalar is
/// never printed by `Debug`.
#[derive(Clone)]
pub struct KeyPair {
    pub(crate) private: BigUint,
    pub(crate) public: EcPoint,
}

impl KeyPair {
    pub(crate) fn empty(domain: &CurveDomain) -> Self {
        KeyPair {
            private: BigUint::from(0u32),
            public: domain.point_at_infinity(),
        }
    }

    #[inline]
    pub fn private_key(&self) -> &BigUint {
        &self.private
    }

    #[inline]
    pub fn public_key(&self) -> &EcPoint {
        &self.public
    }

    /// Whether a private scalar has been stored.
    #[inline]
    pub fn has_private(&self) -> bool {
        self.private.bits() != 0
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &"<redacted>")
            .field("public", &self.public)
            .finish()
    }
}

#[derive(Debug)]
pub(crate) struct Configured {
    pub(crate) domain: CurveDomain,
    pub(crate) regular: KeyPair,
    pub(crate) ephemeral: KeyPair,
}

impl Configured {
    pub(crate) fn slot(&self, slot: KeySlot) -> &KeyPair {
        match slot {
            KeySlot::Regular => &self.regular,
            KeySlot::Ephemeral => &self.ephemeral,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: KeySlot) -> &mut KeyPair {
        match slot {
            KeySlot::Regular => &mut self.regular,
            KeySlot::Ephemeral => &mut self.ephemeral,
        }
    }
}

/// An ECC context.
///
/// A context is sized for a maximum field length when it is created and
/// must be given a domain before any curve operation. Re-configuring the
/// domain clears both key slots.
///
/// Contexts are independent of each other. Operations that change a slot
/// take `&mut self`, so sharing a context across threads requires external
/// locking.
#[derive(Debug)]
pub struct EcContext {
    field_bits: usize,
    policy: ScalarMulPolicy,
    state: Option<Configured>,
}

impl EcContext {
    /// Create an unconfigured context for fields of up to `field_bits` bits.
    pub fn new(field_bits: usize, policy: ScalarMulPolicy) -> Result<Self> {
        if !(MIN_FIELD_BITS..=MAX_FIELD_BITS).contains(&field_bits) {
            return Err(EcError::RangeError);
        }
        Ok(EcContext {
            field_bits,
            policy,
            state: None,
        })
    }

    #[inline]
    pub fn field_bits(&self) -> usize {
        self.field_bits
    }

    #[inline]
    pub fn policy(&self) -> ScalarMulPolicy {
        self.policy
    }

    /// Configure the domain from explicit parameters.
    pub fn set_domain(&mut self, params: DomainParams) -> Result<()> {
        let domain = CurveDomain::new(self.field_bits, params, self.policy)?;
        self.install(domain);
        Ok(())
    }

    /// Configure one of the catalog curves.
    pub fn set_standard_domain(&mut self, curve: CurveId) -> Result<()> {
        let domain = CurveDomain::standard(self.field_bits, curve, self.policy)?;
        debug!(%curve, "standard domain selected");
        self.install(domain);
        Ok(())
    }

    fn install(&mut self, domain: CurveDomain) {
        self.state = Some(Configured {
            regular: KeyPair::empty(&domain),
            ephemeral: KeyPair::empty(&domain),
            domain,
        });
    }

    pub(crate) fn configured(&self) -> Result<&Configured> {
        self.state.as_ref().ok_or(EcError::ContextMismatch)
    }

    pub(crate) fn configured_mut(&mut self) -> Result<&mut Configured> {
        self.state.as_mut().ok_or(EcError::ContextMismatch)
    }

    /// The active domain, for point import/export and arithmetic.
    pub fn domain(&self) -> Result<&CurveDomain> {
        Ok(&self.configured()?.domain)
    }

    /// Bit length of the active domain's order.
    pub fn order_bits(&self) -> Result<usize> {
        Ok(self.domain()?.order_bits())
    }

    pub fn key_pair(&self, slot: KeySlot) -> Result<&KeyPair> {
        Ok(self.configured()?.slot(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_bits_range() {
        assert_eq!(
            EcContext::new(4, ScalarMulPolicy::Fast).unwrap_err(),
            EcError::RangeError
        );
        assert_eq!(
            EcContext::new(MAX_FIELD_BITS + 1, ScalarMulPolicy::Fast).unwrap_err(),
            EcError::RangeError
        );
        assert!(EcContext::new(521, ScalarMulPolicy::Fast).is_ok());
    }

    #[test]
    fn test_unconfigured_context() {
        let ctx = EcContext::new(256, ScalarMulPolicy::default()).unwrap();
        assert_eq!(ctx.domain().unwrap_err(), EcError::ContextMismatch);
        assert_eq!(ctx.order_bits().unwrap_err(), EcError::ContextMismatch);
        assert_eq!(
            ctx.key_pair(KeySlot::Regular).unwrap_err(),
            EcError::ContextMismatch
        );
    }

    #[test]
    fn test_standard_domain_must_fit() {
        let mut ctx = EcContext::new(192, ScalarMulPolicy::Fast).unwrap();
        assert_eq!(
            ctx.set_standard_domain(CurveId::Secp256r1).unwrap_err(),
            EcError::RangeError
        );
        ctx.set_standard_domain(CurveId::Secp160r1).unwrap();
        assert_eq!(ctx.order_bits().unwrap(), 161);
        let slot = ctx.key_pair(KeySlot::Ephemeral).unwrap();
        assert!(!slot.has_private());
        assert!(slot.public_key().is_infinity());
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let mut ctx = EcContext::new(128, ScalarMulPolicy::Fast).unwrap();
        ctx.set_standard_domain(CurveId::Secp128r1).unwrap();
        let state = ctx.configured_mut().unwrap();
        let secret = BigUint::from(0x5ec7_e75e_c7e7_5ec7_e75e_c7e7u128);
        state.regular.private = secret.clone();
        let printed = format!("{:?}", ctx.key_pair(KeySlot::Regular).unwrap());
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains(&secret.to_string()));
        assert!(!format!("{ctx:?}").contains(&secret.to_string()));
    }
}
