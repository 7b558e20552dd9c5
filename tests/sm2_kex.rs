use sm2::curve::CurveParams;
use sm2::primitives::BigInt256;
use sm2::sm2::{exchange_key, KeyPair};

fn scalar(n: u32) -> BigInt256 {
    BigInt256::from_u32(n)
}

#[test]
fn both_sides_derive_the_same_key() {
    let params = CurveParams::sm2();

    let alice_static = KeyPair::from_private_scalar(scalar(11), &params).unwrap();
    let alice_ephemeral = KeyPair::from_private_scalar(scalar(22), &params).unwrap();
    let bob_static = KeyPair::from_private_scalar(scalar(33), &params).unwrap();
    let bob_ephemeral = KeyPair::from_private_scalar(scalar(44), &params).unwrap();

    let alice_id = b"alice@example.com";
    let bob_id = b"bob@example.com";

    let k_alice = exchange_key(
        32,
        alice_id,
        &alice_static,
        &alice_ephemeral,
        bob_id,
        &bob_static.public,
        &bob_ephemeral.public,
        &params,
    )
    .unwrap();

    let k_bob = exchange_key(
        32,
        bob_id,
        &bob_static,
        &bob_ephemeral,
        alice_id,
        &alice_static.public,
        &alice_ephemeral.public,
        &params,
    )
    .unwrap();

    assert_eq!(k_alice, k_bob);
}

#[test]
fn different_peer_identity_yields_different_key() {
    let params = CurveParams::sm2();

    let alice_static = KeyPair::from_private_scalar(scalar(11), &params).unwrap();
    let alice_ephemeral = KeyPair::from_private_scalar(scalar(22), &params).unwrap();
    let bob_static = KeyPair::from_private_scalar(scalar(33), &params).unwrap();
    let bob_ephemeral = KeyPair::from_private_scalar(scalar(44), &params).unwrap();

    let k_with_bob_id = exchange_key(
        32,
        b"alice@example.com",
        &alice_static,
        &alice_ephemeral,
        b"bob@example.com",
        &bob_static.public,
        &bob_ephemeral.public,
        &params,
    )
    .unwrap();

    let k_with_wrong_id = exchange_key(
        32,
        b"alice@example.com",
        &alice_static,
        &alice_ephemeral,
        b"mallory@example.com",
        &bob_static.public,
        &bob_ephemeral.public,
        &params,
    )
    .unwrap();

    assert_ne!(k_with_bob_id, k_with_wrong_id);
}

#[test]
fn requested_key_length_is_honored() {
    let params = CurveParams::sm2();

    let alice_static = KeyPair::from_private_scalar(scalar(5), &params).unwrap();
    let alice_ephemeral = KeyPair::from_private_scalar(scalar(6), &params).unwrap();
    let bob_static = KeyPair::from_private_scalar(scalar(7), &params).unwrap();
    let bob_ephemeral = KeyPair::from_private_scalar(scalar(8), &params).unwrap();

    let key = exchange_key(
        48,
        b"alice",
        &alice_static,
        &alice_ephemeral,
        b"bob",
        &bob_static.public,
        &bob_ephemeral.public,
        &params,
    )
    .unwrap();

    assert_eq!(key.len(), 48);
}
