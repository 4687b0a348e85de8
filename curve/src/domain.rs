//! Curve domains: validated parameters bound to their arithmetic engines,
//! together with the point import/export and group operations callers use.

use core::sync::atomic::{AtomicU64, Ordering};

use num_bigint::BigUint;
use tracing::debug;

use crate::arith::{Fe, FieldArith, MontEngine};
use crate::catalog::{CurveId, DomainParams};
use crate::errors::{EcError, Result};
use crate::group::GroupLaw;
use crate::mul::{self, ScalarMulPolicy, WindowTable};
use crate::point::{is_infinity_encoding, AffinePoint, EcPoint};
use crate::special::Method;

static NEXT_DOMAIN_ID: AtomicU64 = AtomicU64::new(1);

/// Result of [`CurveDomain::check_point`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointStatus {
    Valid,
    AtInfinity,
    NotValid,
}

/// Result of [`CurveDomain::compare_points`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointsEquality {
    Equal,
    NotEqual,
}

/// Result of [`CurveDomain::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DomainStatus {
    Valid,
    /// `4a³ + 27b² ≡ 0 (mod p)`
    Singular,
    BasePointNotOnCurve,
    BasePointAtInfinity,
    /// `order·G` is not the point at infinity.
    BadBasePointOrder,
}

/// A configured curve: parameters, the field engine (mod p) inside the group
/// law, and a second Montgomery engine bound to the order r.
///
/// A domain is immutable once built. Points it produces carry its identity,
/// and every operation taking a point rejects points from other domains with
/// [`EcError::ContextMismatch`].
#[derive(Debug)]
pub struct CurveDomain {
    id: u64,
    params: DomainParams,
    field_bits: usize,
    order_bits: usize,
    policy: ScalarMulPolicy,
    law: GroupLaw,
    order: MontEngine,
    cofactor: Fe,
    base: EcPoint,
    base_table: WindowTable,
}

impl CurveDomain {
    /// Build a domain from explicit parameters.
    ///
    /// `field_bits` is the size the owning context was configured for; the
    /// prime must fit it and the order may exceed it by one bit (Hasse bound).
    pub fn new(field_bits: usize, params: DomainParams, policy: ScalarMulPolicy) -> Result<Self> {
        let DomainParams {
            p,
            a,
            b,
            gx,
            gy,
            order,
            cofactor,
        } = &params;

        if p.bits() as usize > field_bits {
            return Err(EcError::RangeError);
        }
        if [a, b, gx, gy].into_iter().any(|v| v >= p) {
            return Err(EcError::RangeError);
        }
        if *order < BigUint::from(2u32) || order.bits() as usize > field_bits + 1 {
            return Err(EcError::RangeError);
        }
        if cofactor.bits() == 0 {
            return Err(EcError::RangeError);
        }

        let id = NEXT_DOMAIN_ID.fetch_add(1, Ordering::Relaxed);
        let method = Method::for_prime(p);
        let law = GroupLaw::new(method.engine(p)?, method, a, b, id);
        let order_engine = MontEngine::new(order)?;
        let cofactor_fe = order_engine.encode(cofactor);

        let base = if is_infinity_encoding(gx, gy, params.b_is_zero()) {
            law.infinity()
        } else {
            law.set_affine(gx, gy)
        };
        let order_bits = order.bits() as usize;
        let base_table = WindowTable::new(&law, &base, order_bits);

        debug!(
            domain = id,
            field_bits = p.bits(),
            order_bits,
            ?method,
            ?policy,
            a_is_minus3 = law.a_is_minus3(),
            "curve domain configured"
        );

        Ok(CurveDomain {
            id,
            field_bits,
            order_bits,
            policy,
            law,
            order: order_engine,
            cofactor: cofactor_fe,
            base,
            base_table,
            params,
        })
    }

    /// Build a domain from the catalog.
    pub fn standard(field_bits: usize, curve: CurveId, policy: ScalarMulPolicy) -> Result<Self> {
        if curve.field_bits() > field_bits {
            return Err(EcError::RangeError);
        }
        Self::new(field_bits, curve.params(), policy)
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The parameters the domain was built from.
    #[inline]
    pub fn params(&self) -> &DomainParams {
        &self.params
    }

    /// Size the owning context was configured for.
    #[inline]
    pub fn field_bits(&self) -> usize {
        self.field_bits
    }

    #[inline]
    pub fn prime_bits(&self) -> usize {
        self.params.p.bits() as usize
    }

    /// Byte length of an encoded field element.
    #[inline]
    pub fn field_bytes(&self) -> usize {
        self.prime_bits().div_ceil(8)
    }

    #[inline]
    pub fn order_bits(&self) -> usize {
        self.order_bits
    }

    #[inline]
    pub fn order(&self) -> &BigUint {
        &self.params.order
    }

    #[inline]
    pub fn policy(&self) -> ScalarMulPolicy {
        self.policy
    }

    #[inline]
    pub fn method(&self) -> Method {
        self.law.method()
    }

    #[inline]
    pub fn a_is_minus3(&self) -> bool {
        self.law.a_is_minus3()
    }

    /// Montgomery engine bound to the group order.
    #[inline]
    pub fn order_arith(&self) -> &dyn FieldArith {
        &self.order
    }

    /// Cofactor in the order engine's representation.
    #[inline]
    pub fn cofactor_encoded(&self) -> &Fe {
        &self.cofactor
    }

    #[inline]
    pub fn base_point(&self) -> EcPoint {
        self.base
    }

    fn owns(&self, point: &EcPoint) -> Result<()> {
        if point.domain_id() != self.id {
            return Err(EcError::ContextMismatch);
        }
        Ok(())
    }

    /// Import affine coordinates. The infinity encoding for this curve
    /// yields the point at infinity; coordinates must be below p.
    pub fn set_point(&self, x: &BigUint, y: &BigUint) -> Result<EcPoint> {
        if x >= &self.params.p || y >= &self.params.p {
            return Err(EcError::RangeError);
        }
        if is_infinity_encoding(x, y, self.params.b_is_zero()) {
            return Ok(self.law.infinity());
        }
        Ok(self.law.set_affine(x, y))
    }

    /// Import Jacobian coordinates.
    pub fn set_point_projective(&self, x: &BigUint, y: &BigUint, z: &BigUint) -> Result<EcPoint> {
        if [x, y, z].into_iter().any(|v| v >= &self.params.p) {
            return Err(EcError::RangeError);
        }
        Ok(self.law.set_projective(x, y, z))
    }

    #[inline]
    pub fn point_at_infinity(&self) -> EcPoint {
        self.law.infinity()
    }

    /// Export affine coordinates; infinity is exported with its encoding.
    pub fn get_point(&self, point: &EcPoint) -> Result<AffinePoint> {
        self.owns(point)?;
        Ok(match self.law.get_affine(point) {
            Some((x, y)) => AffinePoint::new(x, y),
            None => AffinePoint::infinity(self.params.b_is_zero()),
        })
    }

    /// Affine x-coordinate, or `None` at infinity.
    pub fn affine_x(&self, point: &EcPoint) -> Result<Option<BigUint>> {
        self.owns(point)?;
        Ok(self.law.get_affine(point).map(|(x, _)| x))
    }

    pub fn check_point(&self, point: &EcPoint) -> Result<PointStatus> {
        self.owns(point)?;
        Ok(if point.is_infinity() {
            PointStatus::AtInfinity
        } else if self.law.is_on_curve(point) {
            PointStatus::Valid
        } else {
            PointStatus::NotValid
        })
    }

    pub fn compare_points(&self, p: &EcPoint, q: &EcPoint) -> Result<PointsEquality> {
        self.owns(p)?;
        self.owns(q)?;
        Ok(if self.law.compare(p, q) {
            PointsEquality::Equal
        } else {
            PointsEquality::NotEqual
        })
    }

    pub fn negate_point(&self, point: &EcPoint) -> Result<EcPoint> {
        self.owns(point)?;
        Ok(self.law.negate(point))
    }

    pub fn add_points(&self, p: &EcPoint, q: &EcPoint) -> Result<EcPoint> {
        self.owns(p)?;
        self.owns(q)?;
        Ok(self.law.add(p, q))
    }

    pub fn double_point(&self, point: &EcPoint) -> Result<EcPoint> {
        self.owns(point)?;
        Ok(self.law.double(point))
    }

    /// Normalize a point to Z = 1.
    pub fn normalize(&self, point: &EcPoint) -> Result<EcPoint> {
        self.owns(point)?;
        Ok(self.law.to_affine(point))
    }

    /// `k·P` with the domain's policy.
    pub fn mul_point_by_scalar(&self, point: &EcPoint, k: &BigUint) -> Result<EcPoint> {
        match self.policy {
            ScalarMulPolicy::Fast => self.mul_point_by_scalar_fast(point, k),
            ScalarMulPolicy::ConstantTime => self.mul_point_by_scalar_sscm(point, k),
        }
    }

    /// `k·P` by the signed binary method. Not constant time.
    pub fn mul_point_by_scalar_fast(&self, point: &EcPoint, k: &BigUint) -> Result<EcPoint> {
        self.owns(point)?;
        Ok(mul::mul_fast(&self.law, point, k))
    }

    /// `k·P` by the fixed-window method with oblivious lookups.
    pub fn mul_point_by_scalar_sscm(&self, point: &EcPoint, k: &BigUint) -> Result<EcPoint> {
        self.owns(point)?;
        Ok(mul::mul_sscm(&self.law, point, k, self.order_bits))
    }

    /// `k·G`. The constant-time policy reuses the table built at setup.
    pub fn mul_base_point(&self, k: &BigUint) -> EcPoint {
        match self.policy {
            ScalarMulPolicy::Fast => mul::mul_fast(&self.law, &self.base, k),
            ScalarMulPolicy::ConstantTime => self.mul_base_sscm(k),
        }
    }

    fn mul_base_sscm(&self, k: &BigUint) -> EcPoint {
        if k.bits() as usize <= self.base_table.capacity_bits() {
            self.base_table.mul(&self.law, k)
        } else {
            mul::mul_sscm(&self.law, &self.base, k, self.order_bits)
        }
    }

    /// `s1·P + s2·Q` with the domain's policy.
    pub fn mul_two_scalars(
        &self,
        p: &EcPoint,
        s1: &BigUint,
        q: &EcPoint,
        s2: &BigUint,
    ) -> Result<EcPoint> {
        self.owns(p)?;
        self.owns(q)?;
        Ok(match self.policy {
            ScalarMulPolicy::Fast => mul::mul_two_fast(&self.law, p, s1, q, s2),
            ScalarMulPolicy::ConstantTime => {
                mul::mul_two_sscm(&self.law, p, s1, q, s2, self.order_bits)
            }
        })
    }

    /// `s1·G + s2·Q`, as used by signature verification.
    pub fn mul_base_and_point(&self, s1: &BigUint, q: &EcPoint, s2: &BigUint) -> Result<EcPoint> {
        self.owns(q)?;
        Ok(match self.policy {
            ScalarMulPolicy::Fast => mul::mul_two_fast(&self.law, &self.base, s1, q, s2),
            ScalarMulPolicy::ConstantTime => {
                let first = self.mul_base_sscm(s1);
                let second = mul::mul_sscm(&self.law, q, s2, self.order_bits);
                self.law.add(&first, &second)
            }
        })
    }

    /// Check the parameters beyond their ranges. Primality of p and r is not
    /// tested.
    pub fn validate(&self) -> DomainStatus {
        let DomainParams { p, a, b, .. } = &self.params;
        let three = BigUint::from(3u32);
        let two = BigUint::from(2u32);
        let discriminant = (a.modpow(&three, p) * 4u32 + b.modpow(&two, p) * 27u32) % p;
        if discriminant.bits() == 0 {
            return DomainStatus::Singular;
        }
        if self.base.is_infinity() {
            return DomainStatus::BasePointAtInfinity;
        }
        if !self.law.is_on_curve(&self.base) {
            return DomainStatus::BasePointNotOnCurve;
        }
        if !mul::mul_fast(&self.law, &self.base, self.order()).is_infinity() {
            return DomainStatus::BadBasePointOrder;
        }
        DomainStatus::Valid
    }
}
