use super::*;
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn context(curve: CurveId, policy: ScalarMulPolicy) -> EcContext {
    let mut ctx = EcContext::new(curve.field_bits(), policy).expect("context");
    ctx.set_standard_domain(curve).expect("domain");
    ctx
}

fn random_digest(rng: &mut StdRng, ctx: &EcContext) -> BigUint {
    let order = ctx.domain().unwrap().order();
    let mut bytes = vec![0u8; order.bits().div_ceil(8) as usize];
    rng.fill(bytes.as_mut_slice());
    BigUint::from_bytes_be(&bytes) % order
}

fn sign(rng: &mut StdRng, ctx: &mut EcContext, digest: &BigUint, signer: &KeyPair) -> Signature {
    ctx.generate_ephemeral_key_pair(rng).expect("ephemeral");
    ctx.sign_dsa(digest, signer.private_key()).expect("sign")
}

#[test]
fn test_sign_verify() {
    let mut rng = StdRng::seed_from_u64(42);
    for curve in [
        CurveId::Secp128r1,
        CurveId::Secp160r1,
        CurveId::Secp256r1,
        CurveId::Sm2P256,
        CurveId::TpmBnP256,
        CurveId::Secp384r1,
    ] {
        for policy in [ScalarMulPolicy::Fast, ScalarMulPolicy::ConstantTime] {
            let mut ctx = context(curve, policy);
            let signer = ctx.generate_key_pair(&mut rng).expect("keygen");
            let digest = random_digest(&mut rng, &ctx);
            let sig = sign(&mut rng, &mut ctx, &digest, &signer);

            let public = ctx.derive_public_key(signer.private_key()).expect("derive");
            let ok = ctx.verify_dsa(&digest, &sig, &public).expect("verify");
            assert_eq!(ok, Verification::Valid, "{curve} {policy:?}");
        }
    }
}

#[test]
fn test_verify_rejects_wrong_message() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut ctx = context(CurveId::Secp192r1, ScalarMulPolicy::default());
    let signer = ctx.generate_key_pair(&mut rng).expect("keygen");
    let digest = BigUint::from(1011u32);
    let sig = sign(&mut rng, &mut ctx, &digest, &signer);

    let wrong = BigUint::from(1013u32);
    let ok = ctx.verify_dsa(&wrong, &sig, signer.public_key()).expect("verify");
    assert_eq!(ok, Verification::Invalid);
}

#[test]
fn test_verify_rejects_wrong_key() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut ctx = context(CurveId::Secp224r1, ScalarMulPolicy::default());
    let signer = ctx.generate_key_pair(&mut rng).expect("keygen");
    let digest = random_digest(&mut rng, &ctx);
    let sig = sign(&mut rng, &mut ctx, &digest, &signer);

    let other = ctx.generate_key_pair(&mut rng).expect("keygen");
    let ok = ctx.verify_dsa(&digest, &sig, other.public_key()).expect("verify");
    assert_eq!(ok, Verification::Invalid);
}

#[test]
fn test_tampered_signatures_are_invalid() {
    let mut rng = StdRng::seed_from_u64(1337);
    let mut ctx = context(CurveId::Secp256r1, ScalarMulPolicy::Fast);
    let signer = ctx.generate_key_pair(&mut rng).expect("keygen");
    // Halving keeps the digest, and any flip below its top bit, under the order.
    let digest = random_digest(&mut rng, &ctx) >> 1;
    let sig = sign(&mut rng, &mut ctx, &digest, &signer);
    let safe_bits = ctx.order_bits().unwrap() as u64 - 1;

    for _ in 0..8 {
        let bit = rng.random_range(0..safe_bits);
        let mut tampered = digest.clone();
        tampered.set_bit(bit, !digest.bit(bit));
        let ok = ctx.verify_dsa(&tampered, &sig, signer.public_key()).expect("verify");
        assert_eq!(ok, Verification::Invalid, "digest bit {bit}");

        let mut bad = sig.clone();
        bad.r.set_bit(bit, !sig.r.bit(bit));
        let ok = ctx.verify_dsa(&digest, &bad, signer.public_key()).expect("verify");
        assert_eq!(ok, Verification::Invalid, "r bit {bit}");

        let mut bad = sig.clone();
        bad.s.set_bit(bit, !sig.s.bit(bit));
        let ok = ctx.verify_dsa(&digest, &bad, signer.public_key()).expect("verify");
        assert_eq!(ok, Verification::Invalid, "s bit {bit}");
    }
}

#[test]
fn test_digest_must_be_below_order() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut ctx = context(CurveId::Secp160r2, ScalarMulPolicy::default());
    let signer = ctx.generate_key_pair(&mut rng).expect("keygen");
    let digest = BigUint::from(77u32);
    let sig = sign(&mut rng, &mut ctx, &digest, &signer);

    let order = ctx.domain().unwrap().order().clone();
    assert_eq!(
        ctx.verify_dsa(&order, &sig, signer.public_key()),
        Err(EcError::MessageError)
    );
    assert_eq!(
        ctx.sign_dsa(&order, signer.private_key()),
        Err(EcError::MessageError)
    );
}

#[test]
fn test_signature_components_out_of_range() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut ctx = context(CurveId::Secp128r2, ScalarMulPolicy::default());
    let signer = ctx.generate_key_pair(&mut rng).expect("keygen");
    let digest = BigUint::from(5u32);
    let sig = sign(&mut rng, &mut ctx, &digest, &signer);
    let order = ctx.domain().unwrap().order().clone();

    for bad in [
        Signature { r: BigUint::from(0u32), s: sig.s.clone() },
        Signature { r: sig.r.clone(), s: BigUint::from(0u32) },
        Signature { r: &sig.r + &order, s: sig.s.clone() },
        Signature { r: sig.r.clone(), s: order.clone() },
    ] {
        assert_eq!(
            ctx.verify_dsa(&digest, &bad, signer.public_key()),
            Ok(Verification::Invalid)
        );
    }
    let infinity = ctx.domain().unwrap().point_at_infinity();
    assert_eq!(ctx.verify_dsa(&digest, &sig, &infinity), Ok(Verification::Invalid));
}

#[test]
fn test_sign_requires_ephemeral_key() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut ctx = context(CurveId::Secp192r1, ScalarMulPolicy::default());
    let signer = ctx.generate_key_pair(&mut rng).expect("keygen");
    assert_eq!(
        ctx.sign_dsa(&BigUint::from(1u32), signer.private_key()),
        Err(EcError::EphemeralKeyError)
    );

    // An imported ephemeral pair works like a generated one.
    let ephemeral = ctx.generate_key_pair(&mut rng).expect("keygen");
    ctx.set_key_pair(
        Some(ephemeral.private_key()),
        Some(ephemeral.public_key()),
        KeySlot::Ephemeral,
    )
    .expect("import");
    let sig = ctx.sign_dsa(&BigUint::from(1u32), signer.private_key()).expect("sign");
    assert_eq!(
        ctx.verify_dsa(&BigUint::from(1u32), &sig, signer.public_key()),
        Ok(Verification::Valid)
    );
}

#[test]
fn test_ecdh_symmetry() {
    let mut rng = StdRng::seed_from_u64(21);
    for policy in [ScalarMulPolicy::Fast, ScalarMulPolicy::ConstantTime] {
        let ctx = context(CurveId::Secp256r1, policy);
        let alice = ctx.generate_key_pair(&mut rng).expect("keygen");
        let bob = ctx.generate_key_pair(&mut rng).expect("keygen");

        let ab = ctx
            .derive_shared_secret(alice.private_key(), bob.public_key())
            .expect("ecdh");
        let ba = ctx
            .derive_shared_secret(bob.private_key(), alice.public_key())
            .expect("ecdh");
        assert_eq!(ab, ba);
        assert!(ab < ctx.domain().unwrap().params().p);
    }
}

#[test]
fn test_cofactor_ecdh() {
    let mut rng = StdRng::seed_from_u64(22);
    let ctx = context(CurveId::Secp112r2, ScalarMulPolicy::default());
    let alice = ctx.generate_key_pair(&mut rng).expect("keygen");
    let bob = ctx.generate_key_pair(&mut rng).expect("keygen");

    let ab = ctx
        .derive_shared_secret_cofactor(alice.private_key(), bob.public_key())
        .expect("ecdh");
    let ba = ctx
        .derive_shared_secret_cofactor(bob.private_key(), alice.public_key())
        .expect("ecdh");
    assert_eq!(ab, ba);

    // With h = 4 the result is the plain secret of 4·a.
    let order = ctx.domain().unwrap().order();
    let scaled = (alice.private_key() * 4u32) % order;
    let plain = ctx
        .derive_shared_secret(&scaled, bob.public_key())
        .expect("ecdh");
    assert_eq!(ab, plain);
}

#[test]
fn test_shared_secret_into_buffer() {
    let mut rng = StdRng::seed_from_u64(23);
    let ctx = context(CurveId::Secp521r1, ScalarMulPolicy::default());
    let alice = ctx.generate_key_pair(&mut rng).expect("keygen");
    let bob = ctx.generate_key_pair(&mut rng).expect("keygen");

    let mut short = [0u8; 65];
    assert_eq!(
        ctx.derive_shared_secret_into(alice.private_key(), bob.public_key(), &mut short),
        Err(EcError::RangeError)
    );

    let mut out = [0xffu8; 70];
    let written = ctx
        .derive_shared_secret_into(alice.private_key(), bob.public_key(), &mut out)
        .expect("ecdh");
    assert_eq!(written, 66);
    let expected = ctx
        .derive_shared_secret(alice.private_key(), bob.public_key())
        .expect("ecdh");
    assert_eq!(BigUint::from_bytes_be(&out[..written]), expected);
    assert_eq!(out[written..], [0xff; 4]);
}

#[test]
fn test_ecdh_failures() {
    let mut rng = StdRng::seed_from_u64(24);
    let ctx = context(CurveId::Secp160r1, ScalarMulPolicy::default());
    let alice = ctx.generate_key_pair(&mut rng).expect("keygen");
    let infinity = ctx.domain().unwrap().point_at_infinity();
    assert_eq!(
        ctx.derive_shared_secret(alice.private_key(), &infinity),
        Err(EcError::ShareKeyError)
    );
    assert_eq!(
        ctx.derive_shared_secret(&BigUint::from(0u32), alice.public_key()),
        Err(EcError::InvalidPrivateKey)
    );
}

#[test]
fn test_uninitialized_context() {
    let mut rng = StdRng::seed_from_u64(25);
    let mut ctx = EcContext::new(256, ScalarMulPolicy::default()).expect("context");
    let one = BigUint::from(1u32);
    assert_eq!(ctx.generate_key_pair(&mut rng).unwrap_err(), EcError::ContextMismatch);
    assert_eq!(
        ctx.generate_ephemeral_key_pair(&mut rng).unwrap_err(),
        EcError::ContextMismatch
    );
    assert_eq!(ctx.derive_public_key(&one).unwrap_err(), EcError::ContextMismatch);
    assert_eq!(ctx.sign_dsa(&one, &one).unwrap_err(), EcError::ContextMismatch);

    let other = context(CurveId::Secp256r1, ScalarMulPolicy::default());
    let point = other.domain().unwrap().base_point();
    assert_eq!(
        ctx.set_key_pair(None, Some(&point), KeySlot::Regular).unwrap_err(),
        EcError::ContextMismatch
    );
    assert_eq!(
        ctx.derive_shared_secret(&one, &point).unwrap_err(),
        EcError::ContextMismatch
    );
}

#[test]
fn test_invalid_curve_id() {
    assert_eq!(CurveId::from_name("brainpoolP256r1"), Err(EcError::InvalidCurveId));
    assert_eq!("P-384".parse::<CurveId>(), Ok(CurveId::Secp384r1));
}

#[test]
fn test_explicit_domain() {
    // y² = x³ + 2x + 3 over GF(97) with a base point of order 5.
    let params = DomainParams {
        p: BigUint::from(97u32),
        a: BigUint::from(2u32),
        b: BigUint::from(3u32),
        gx: BigUint::from(3u32),
        gy: BigUint::from(6u32),
        order: BigUint::from(5u32),
        cofactor: BigUint::from(20u32),
    };
    let mut ctx = EcContext::new(8, ScalarMulPolicy::default()).expect("context");
    ctx.set_domain(params).expect("domain");
    let domain = ctx.domain().unwrap();
    assert_eq!(domain.validate(), DomainStatus::Valid);

    let public = ctx.derive_public_key(&BigUint::from(2u32)).expect("derive");
    let exported = ctx.domain().unwrap().get_point(&public).expect("export");
    assert_eq!(exported, AffinePoint::new(BigUint::from(80u32), BigUint::from(10u32)));
}

#[test]
fn test_serde_round_trip() {
    let mut rng = StdRng::seed_from_u64(26);
    let mut ctx = context(CurveId::Secp256r1, ScalarMulPolicy::default());
    let signer = ctx.generate_key_pair(&mut rng).expect("keygen");
    let digest = random_digest(&mut rng, &ctx);
    let sig = sign(&mut rng, &mut ctx, &digest, &signer);

    let bytes = bincode::serialize(&sig).expect("serialize sig");
    let decoded_sig: Signature = bincode::deserialize(&bytes).expect("deserialize sig");
    assert_eq!(decoded_sig, sig);

    let domain = ctx.domain().unwrap();
    let exported = domain.get_point(signer.public_key()).expect("export");
    let bytes = bincode::serialize(&exported).expect("serialize point");
    let decoded: AffinePoint = bincode::deserialize(&bytes).expect("deserialize point");
    let public = domain.set_point(&decoded.x, &decoded.y).expect("import");
    assert_eq!(
        ctx.verify_dsa(&digest, &decoded_sig, &public),
        Ok(Verification::Valid)
    );
}
