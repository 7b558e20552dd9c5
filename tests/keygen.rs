use sm2::curve::CurveParams;
use sm2::rng::Csprng;
use sm2::sm2::{sign, verify, KeyPair};

#[test]
fn generated_key_pair_has_public_key_on_curve() {
    let params = CurveParams::sm2();
    let mut rng = Csprng::new();
    let keys = KeyPair::generate(&mut rng, &params);

    assert!(keys.public.point().is_on_curve(&params));
}

#[test]
fn generated_key_pair_signs_and_verifies() {
    let params = CurveParams::sm2();
    let mut rng = Csprng::new();
    let keys = KeyPair::generate(&mut rng, &params);
    let k = rng.random_scalar_below(&params.n);

    let id = b"ALICE123@YAHOO.COM";
    let msg = b"generated key pair message";

    let sig = sign(msg, id, &keys.public, &keys.private, &k, &params).unwrap();
    assert!(verify(&sig, msg, id, &keys.public, &params));
}

#[test]
fn successive_key_pairs_differ() {
    let params = CurveParams::sm2();
    let mut rng = Csprng::new();
    let a = KeyPair::generate(&mut rng, &params);
    let b = KeyPair::generate(&mut rng, &params);

    assert_ne!(a.private, b.private);
}
