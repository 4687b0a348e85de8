use ecc::{AffinePoint, CurveId, EcContext, ScalarMulPolicy, Signature, Verification};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let curve: CurveId = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "P-256".to_string())
        .parse()
        .expect("curve name");

    let mut rng = StdRng::seed_from_u64(42);
    let mut ctx = EcContext::new(curve.field_bits(), ScalarMulPolicy::default()).expect("context");
    ctx.set_standard_domain(curve).expect("domain");

    let signer = ctx.generate_key_pair(&mut rng).expect("keygen");
    let domain = ctx.domain().expect("domain");
    let pk = domain.get_point(signer.public_key()).expect("export");
    let pk_bytes = bincode::serialize(&pk).expect("serialize pk");

    let msg_bytes = b"hello ecdsa";
    let digest = BigUint::from_bytes_be(msg_bytes) % domain.order();

    ctx.generate_ephemeral_key_pair(&mut rng).expect("ephemeral");
    let sig = ctx.sign_dsa(&digest, signer.private_key()).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let pk2: AffinePoint = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");
    let domain = ctx.domain().expect("domain");
    let public = domain.set_point(&pk2.x, &pk2.y).expect("import");

    let ok = ctx.verify_dsa(&digest, &sig2, &public).expect("verify");
    assert_eq!(ok, Verification::Valid);
    println!(
        "{curve}: signature of {} bytes verified (r = {:x})",
        sig_bytes.len(),
        sig2.r
    );
}
