//! Scalar multiplication.
//!
//! Two single-scalar strategies are provided:
//!
//! * [`mul_fast`]: the IEEE P1363 signed-binary method over `h = 3k`. Its
//!   control flow follows the scalar bits, so it must only see public scalars
//!   when timing matters.
//! * [`WindowTable`]: a fixed-window method whose sequence of group
//!   operations depends only on the scalar's bit budget. Table entries are
//!   fetched with an oblivious scan, and the scalar is offset so no window
//!   digit selects the point at infinity.

use num_bigint::BigUint;
use subtle::{ConditionallySelectable, ConstantTimeEq};
use tracing::trace;

use crate::group::GroupLaw;
use crate::point::EcPoint;

/// Largest window width considered for the constant-time method.
const MAX_WINDOW: usize = 6;

/// How scalar multiplication is carried out for a context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarMulPolicy {
    /// Signed binary double-and-add; branches on scalar bits.
    Fast,
    /// Fixed-window method with oblivious table lookups.
    ConstantTime,
}

impl Default for ScalarMulPolicy {
    fn default() -> Self {
        if cfg!(feature = "sscm") {
            ScalarMulPolicy::ConstantTime
        } else {
            ScalarMulPolicy::Fast
        }
    }
}

/// `k·P` by the signed binary method.
pub fn mul_fast(law: &GroupLaw, p: &EcPoint, k: &BigUint) -> EcPoint {
    if p.is_infinity() || k.bits() == 0 {
        return law.infinity();
    }

    let t = law.to_affine(p);
    let u = law.negate(&t);
    let h = k * 3u32;
    let top = h.bits() - 1;

    let mut acc = t;
    for i in (1..top).rev() {
        acc = law.double(&acc);
        match (h.bit(i), k.bit(i)) {
            (true, false) => acc = law.add(&acc, &t),
            (false, true) => acc = law.add(&acc, &u),
            _ => {}
        }
    }
    acc
}

/// Window width minimizing table construction plus per-window additions.
pub fn optimal_window_size(bits: usize) -> usize {
    (1..=MAX_WINDOW)
        .min_by_key(|&w| (1usize << w) + bits.div_ceil(w))
        .unwrap_or(1)
}

/// Precomputed multiples `P, 2P, ..., 2^w·P` for the fixed-window method.
#[derive(Clone, Debug)]
pub struct WindowTable {
    window: usize,
    windows: usize,
    entries: Vec<EcPoint>,
    /// `-c·P` with `c = Σ 2^(w·i)`, undoing the digit offset.
    correction: EcPoint,
}

impl WindowTable {
    /// Table for scalars of up to `bits` bits.
    pub fn new(law: &GroupLaw, p: &EcPoint, bits: usize) -> Self {
        let bits = bits.max(1);
        let window = optimal_window_size(bits);
        let windows = bits.div_ceil(window);

        // Every entry carries the projective flag so the group law does the
        // same work whichever entry a digit selects.
        let mut entries = Vec::with_capacity(1 << window);
        let mut current = EcPoint { affine: false, ..*p };
        entries.push(current);
        for _ in 1..(1usize << window) {
            current = law.add(&current, p);
            entries.push(current);
        }

        let offset = (0..windows).fold(BigUint::from(0u32), |acc, i| {
            acc + (BigUint::from(1u32) << (window * i))
        });
        let correction = law.negate(&mul_fast(law, p, &offset));

        trace!(bits, window, windows, "window table built");
        WindowTable {
            window,
            windows,
            entries,
            correction,
        }
    }

    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Largest scalar bit length this table handles.
    #[inline]
    pub fn capacity_bits(&self) -> usize {
        self.window * self.windows
    }

    /// Entry `digit + 1` times the point, scanning every entry.
    fn lookup(&self, digit: u64) -> EcPoint {
        let mut out = self.entries[0];
        for (j, entry) in self.entries.iter().enumerate() {
            out.conditional_assign(entry, (j as u64).ct_eq(&digit));
        }
        out
    }

    fn digit(&self, k: &BigUint, index: usize) -> u64 {
        let base = (index * self.window) as u64;
        (0..self.window as u64).fold(0u64, |acc, j| acc | ((k.bit(base + j) as u64) << j))
    }

    /// `k·P` for `k` within [`capacity_bits`](Self::capacity_bits).
    ///
    /// Evaluates `(k + c)·P - c·P`; every digit of `k + c` in this radix is
    /// nonzero, so every table fetch yields a finite point for a point of
    /// large order.
    pub fn mul(&self, law: &GroupLaw, k: &BigUint) -> EcPoint {
        let mut acc = self.lookup(self.digit(k, self.windows - 1));
        for i in (0..self.windows - 1).rev() {
            for _ in 0..self.window {
                acc = law.double(&acc);
            }
            acc = law.add(&acc, &self.lookup(self.digit(k, i)));
        }
        law.add(&acc, &self.correction)
    }
}

/// Constant-time `k·P`. The window count is taken from `order_bits`, or from
/// `k` when it is longer.
pub fn mul_sscm(law: &GroupLaw, p: &EcPoint, k: &BigUint, order_bits: usize) -> EcPoint {
    if p.is_infinity() {
        return law.infinity();
    }
    let bits = order_bits.max(k.bits() as usize);
    WindowTable::new(law, p, bits).mul(law, k)
}

/// `s1·P + s2·Q` by Shamir's trick over `{O, P, Q, P+Q}`.
pub fn mul_two_fast(
    law: &GroupLaw,
    p: &EcPoint,
    s1: &BigUint,
    q: &EcPoint,
    s2: &BigUint,
) -> EcPoint {
    let p = law.to_affine(p);
    let q = law.to_affine(q);
    let table = [law.infinity(), p, q, law.add(&p, &q)];

    let bits = s1.bits().max(s2.bits());
    let mut acc = law.infinity();
    for i in (0..bits).rev() {
        acc = law.double(&acc);
        let index = (s1.bit(i) as usize) | ((s2.bit(i) as usize) << 1);
        if index != 0 {
            acc = law.add(&acc, &table[index]);
        }
    }
    acc
}

/// `s1·P + s2·Q` as two independent constant-time products.
pub fn mul_two_sscm(
    law: &GroupLaw,
    p: &EcPoint,
    s1: &BigUint,
    q: &EcPoint,
    s2: &BigUint,
    order_bits: usize,
) -> EcPoint {
    let first = mul_sscm(law, p, s1, order_bits);
    let second = mul_sscm(law, q, s2, order_bits);
    law.add(&first, &second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::{Fe, FieldArith, MontEngine};
    use crate::catalog::CurveId;
    use crate::special::Method;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Montgomery engine that counts multiplications and squarings.
    #[derive(Debug)]
    struct Counting {
        inner: MontEngine,
        muls: Arc<AtomicUsize>,
    }

    impl FieldArith for Counting {
        fn modulus(&self) -> &BigUint {
            self.inner.modulus()
        }

        fn modulus_fe(&self) -> &Fe {
            self.inner.modulus_fe()
        }

        fn limbs(&self) -> usize {
            self.inner.limbs()
        }

        fn inversion_exponent(&self) -> &Fe {
            self.inner.inversion_exponent()
        }

        fn encode(&self, x: &BigUint) -> Fe {
            self.inner.encode(x)
        }

        fn decode(&self, x: &Fe) -> BigUint {
            self.inner.decode(x)
        }

        fn one(&self) -> Fe {
            self.inner.one()
        }

        fn mul(&self, a: &Fe, b: &Fe) -> Fe {
            self.muls.fetch_add(1, Ordering::Relaxed);
            self.inner.mul(a, b)
        }
    }

    // y² = x³ + 2x + 3 over GF(97); (3, 6) has order 5.
    fn toy() -> (GroupLaw, EcPoint) {
        let p = BigUint::from(97u32);
        let law = GroupLaw::new(
            Method::Generic.engine(&p).unwrap(),
            Method::Generic,
            &BigUint::from(2u32),
            &BigUint::from(3u32),
            7,
        );
        let g = law.set_affine(&BigUint::from(3u32), &BigUint::from(6u32));
        (law, g)
    }

    fn naive(law: &GroupLaw, p: &EcPoint, k: u64) -> EcPoint {
        let mut acc = law.infinity();
        for _ in 0..k {
            acc = law.add(&acc, p);
        }
        acc
    }

    #[test]
    fn test_window_size_grows_with_bits() {
        assert_eq!(optimal_window_size(1), 1);
        assert!(optimal_window_size(128) <= optimal_window_size(256));
        assert!(optimal_window_size(521) <= MAX_WINDOW);
        assert_eq!(optimal_window_size(256), 4);
    }

    #[test]
    fn test_small_scalars_match_repeated_addition() {
        let (law, g) = toy();
        for k in 0..23u64 {
            let expected = naive(&law, &g, k);
            let scalar = BigUint::from(k);
            assert!(law.compare(&mul_fast(&law, &g, &scalar), &expected), "fast k={k}");
            assert!(
                law.compare(&mul_sscm(&law, &g, &scalar, 3), &expected),
                "sscm k={k}"
            );
        }
    }

    #[test]
    fn test_zero_and_infinity() {
        let (law, g) = toy();
        let zero = BigUint::from(0u32);
        assert!(mul_fast(&law, &g, &zero).is_infinity());
        assert!(mul_sscm(&law, &g, &zero, 3).is_infinity());
        let inf = law.infinity();
        assert!(mul_fast(&law, &inf, &BigUint::from(3u32)).is_infinity());
        assert!(mul_sscm(&law, &inf, &BigUint::from(3u32), 3).is_infinity());
    }

    #[test]
    fn test_table_capacity() {
        let (law, g) = toy();
        let table = WindowTable::new(&law, &g, 10);
        assert!(table.capacity_bits() >= 10);
        assert_eq!(table.entries.len(), 1 << table.window());
        assert!(law.compare(&table.mul(&law, &BigUint::from(1023u32)), &naive(&law, &g, 1023 % 5)));
    }

    #[test]
    fn test_two_scalar_agreement() {
        let (law, g) = toy();
        let q = law.double(&g);
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            let a: u64 = rng.random_range(0..40);
            let b: u64 = rng.random_range(0..40);
            let expected = law.add(&naive(&law, &g, a), &naive(&law, &q, b));
            let (sa, sb) = (BigUint::from(a), BigUint::from(b));
            assert!(law.compare(&mul_two_fast(&law, &g, &sa, &q, &sb), &expected));
            assert!(law.compare(&mul_two_sscm(&law, &g, &sa, &q, &sb, 3), &expected));
        }
    }

    #[test]
    fn test_window_mul_cost_is_independent_of_digits() {
        let params = CurveId::Secp256r1.params();
        let muls = Arc::new(AtomicUsize::new(0));
        let engine = Counting {
            inner: MontEngine::new(&params.p).unwrap(),
            muls: Arc::clone(&muls),
        };
        let law = GroupLaw::new(Box::new(engine), Method::Generic, &params.a, &params.b, 11);
        let g = law.set_affine(&params.gx, &params.gy);
        let table = WindowTable::new(&law, &g, 256);

        let mut rng = StdRng::seed_from_u64(23);
        let mut random = [0u8; 32];
        rng.fill(&mut random[..]);
        let scalars = [
            (BigUint::from(1u32) << 256) - 1u32,
            BigUint::from(1u32) << 255,
            BigUint::from(1u32),
            (BigUint::from(1u32) << 128) | BigUint::from(0xf000_0000_0000_000fu64),
            BigUint::from_bytes_be(&random),
        ];

        let mut costs = Vec::new();
        for k in &scalars {
            muls.store(0, Ordering::Relaxed);
            let product = table.mul(&law, k);
            costs.push(muls.load(Ordering::Relaxed));
            assert!(law.compare(&product, &mul_fast(&law, &g, k)), "k={k:x}");
        }
        assert!(costs.iter().all(|&c| c == costs[0]), "{costs:?}");
    }
}
