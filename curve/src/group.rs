//! Jacobian group law for short Weierstrass curves y² = x³ + ax + b.

use num_bigint::BigUint;

use crate::arith::{Fe, FieldArith};
use crate::point::EcPoint;
use crate::special::Method;

/// Point arithmetic over one field engine and one pair of coefficients.
///
/// The engine is an owned strategy object chosen once, when the domain is
/// built; all coordinates handled here are in that engine's representation.
#[derive(Debug)]
pub struct GroupLaw {
    field: Box<dyn FieldArith>,
    method: Method,
    a: Fe,
    b: Fe,
    a_is_minus3: bool,
    domain: u64,
}

impl GroupLaw {
    pub fn new(
        field: Box<dyn FieldArith>,
        method: Method,
        a: &BigUint,
        b: &BigUint,
        domain: u64,
    ) -> Self {
        let p = field.modulus();
        let a_is_minus3 = (a + 3u32) % p == BigUint::from(0u32);
        GroupLaw {
            a: field.encode(a),
            b: field.encode(b),
            field,
            method,
            a_is_minus3,
            domain,
        }
    }

    #[inline]
    pub fn field(&self) -> &dyn FieldArith {
        &*self.field
    }

    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    #[inline]
    pub fn a_is_minus3(&self) -> bool {
        self.a_is_minus3
    }

    /// The point at infinity: (1:1:0).
    #[inline]
    pub fn infinity(&self) -> EcPoint {
        let one = self.field.one();
        EcPoint {
            x: one,
            y: one,
            z: Fe::ZERO,
            affine: false,
            domain: self.domain,
        }
    }

    /// Import plain affine coordinates.
    pub fn set_affine(&self, x: &BigUint, y: &BigUint) -> EcPoint {
        EcPoint {
            x: self.field.encode(x),
            y: self.field.encode(y),
            z: self.field.one(),
            affine: true,
            domain: self.domain,
        }
    }

    /// Import plain projective coordinates; Z = 0 gives infinity.
    pub fn set_projective(&self, x: &BigUint, y: &BigUint, z: &BigUint) -> EcPoint {
        let z = self.field.encode(z);
        if self.field.is_zero(&z) {
            return self.infinity();
        }
        EcPoint {
            x: self.field.encode(x),
            y: self.field.encode(y),
            affine: z == self.field.one(),
            z,
            domain: self.domain,
        }
    }

    /// Normalize to Z = 1 with a single inversion.
    pub fn to_affine(&self, p: &EcPoint) -> EcPoint {
        if p.is_infinity() || p.affine {
            return *p;
        }
        let f = self.field();
        let z_inv = f.inv(&p.z);
        let z_inv2 = f.sqr(&z_inv);
        let z_inv3 = f.mul(&z_inv2, &z_inv);
        EcPoint {
            x: f.mul(&p.x, &z_inv2),
            y: f.mul(&p.y, &z_inv3),
            z: f.one(),
            affine: true,
            domain: p.domain,
        }
    }

    /// Plain affine coordinates, or `None` for the point at infinity.
    pub fn get_affine(&self, p: &EcPoint) -> Option<(BigUint, BigUint)> {
        if p.is_infinity() {
            return None;
        }
        let affine = self.to_affine(p);
        Some((self.field.decode(&affine.x), self.field.decode(&affine.y)))
    }

    /// Check Y² = X³ + a·X·Z⁴ + b·Z⁶. Infinity satisfies it trivially.
    pub fn is_on_curve(&self, p: &EcPoint) -> bool {
        if p.is_infinity() {
            return true;
        }
        let f = self.field();
        let lhs = f.sqr(&p.y);
        let x3 = f.mul(&f.sqr(&p.x), &p.x);

        let (ax, b) = if p.affine {
            (p.x, self.b)
        } else {
            let z2 = f.sqr(&p.z);
            let z4 = f.sqr(&z2);
            let z6 = f.mul(&z4, &z2);
            (f.mul(&p.x, &z4), f.mul(&self.b, &z6))
        };

        let mut rhs = f.add(&x3, &b);
        if self.a_is_minus3 {
            rhs = f.sub(&rhs, &ax);
            rhs = f.sub(&rhs, &ax);
            rhs = f.sub(&rhs, &ax);
        } else {
            rhs = f.add(&rhs, &f.mul(&self.a, &ax));
        }
        lhs == rhs
    }

    /// Projective equality without inversion.
    pub fn compare(&self, p: &EcPoint, q: &EcPoint) -> bool {
        match (p.is_infinity(), q.is_infinity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        if p.affine && q.affine {
            return p.x == q.x && p.y == q.y;
        }

        let (px, py) = self.scale_by(&p.x, &p.y, q);
        let (qx, qy) = self.scale_by(&q.x, &q.y, p);
        px == qx && py == qy
    }

    /// (x·Z², y·Z³) for the Z of `by`.
    fn scale_by(&self, x: &Fe, y: &Fe, by: &EcPoint) -> (Fe, Fe) {
        if by.affine {
            return (*x, *y);
        }
        let f = self.field();
        let z2 = f.sqr(&by.z);
        let z3 = f.mul(&z2, &by.z);
        (f.mul(x, &z2), f.mul(y, &z3))
    }

    pub fn negate(&self, p: &EcPoint) -> EcPoint {
        if p.is_infinity() {
            return *p;
        }
        EcPoint {
            y: self.field.neg(&p.y),
            ..*p
        }
    }

    /// Point doubling: 2*P.
    pub fn double(&self, p: &EcPoint) -> EcPoint {
        if p.is_infinity() {
            return *p;
        }
        let f = self.field();

        // M = 3X² + a·Z⁴
        let m = if p.affine {
            let x2 = f.sqr(&p.x);
            f.add(&triple(f, &x2), &self.a)
        } else if self.a_is_minus3 {
            // 3(X - Z²)(X + Z²)
            let z2 = f.sqr(&p.z);
            let t = f.mul(&f.sub(&p.x, &z2), &f.add(&p.x, &z2));
            triple(f, &t)
        } else {
            let x2 = f.sqr(&p.x);
            let z4 = f.sqr(&f.sqr(&p.z));
            f.add(&triple(f, &x2), &f.mul(&self.a, &z4))
        };

        // Z3 = 2·Y·Z; zero when Y = 0, which is exactly 2P = O.
        let z3 = if p.affine {
            f.double(&p.y)
        } else {
            f.double(&f.mul(&p.y, &p.z))
        };

        // S = 4·X·Y²
        let y2 = f.sqr(&p.y);
        let s = f.double(&f.double(&f.mul(&p.x, &y2)));

        // X3 = M² - 2S
        let x3 = f.sub(&f.sqr(&m), &f.double(&s));

        // T = 8·Y⁴
        let t = f.double(&f.double(&f.double(&f.sqr(&y2))));

        // Y3 = M·(S - X3) - T
        let y3 = f.sub(&f.mul(&m, &f.sub(&s, &x3)), &t);

        EcPoint {
            x: x3,
            y: y3,
            z: z3,
            affine: false,
            domain: p.domain,
        }
    }

    /// Point addition: P + Q.
    pub fn add(&self, p: &EcPoint, q: &EcPoint) -> EcPoint {
        if p.is_infinity() {
            return *q;
        }
        if q.is_infinity() {
            return *p;
        }
        let f = self.field();

        // U1 = X1·Z2², S1 = Y1·Z2³, U2 = X2·Z1², S2 = Y2·Z1³
        let (u1, s1) = self.scale_by(&p.x, &p.y, q);
        let (u2, s2) = self.scale_by(&q.x, &q.y, p);

        let h = f.sub(&u2, &u1);
        let r = f.sub(&s2, &s1);
        if f.is_zero(&h) {
            if f.is_zero(&r) {
                return self.double(p);
            }
            return self.infinity();
        }

        let h2 = f.sqr(&h);
        let h3 = f.mul(&h2, &h);
        let v = f.mul(&u1, &h2);

        // X3 = R² - H³ - 2·U1·H²
        let x3 = f.sub(&f.sub(&f.sqr(&r), &h3), &f.double(&v));
        // Y3 = R·(U1·H² - X3) - S1·H³
        let y3 = f.sub(&f.mul(&r, &f.sub(&v, &x3)), &f.mul(&s1, &h3));
        // Z3 = H·Z1·Z2
        let z3 = match (p.affine, q.affine) {
            (true, true) => h,
            (true, false) => f.mul(&h, &q.z),
            (false, true) => f.mul(&h, &p.z),
            (false, false) => f.mul(&h, &f.mul(&p.z, &q.z)),
        };

        EcPoint {
            x: x3,
            y: y3,
            z: z3,
            affine: false,
            domain: p.domain,
        }
    }
}

#[inline]
fn triple(f: &dyn FieldArith, x: &Fe) -> Fe {
    f.add(&f.double(x), x)
}
