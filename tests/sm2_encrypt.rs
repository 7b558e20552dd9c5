use sm2::curve::CurveParams;
use sm2::primitives::BigInt256;
use sm2::sm2::{decrypt, encrypt, Ciphertext, KeyPair};

fn scalar(n: u32) -> BigInt256 {
    BigInt256::from_u32(n)
}

#[test]
fn encrypt_then_decrypt_round_trips() {
    let params = CurveParams::sm2();
    let keys = KeyPair::from_private_scalar(scalar(777), &params).unwrap();
    let k = scalar(321);
    let msg = b"encryption standard message";

    let ciphertext = encrypt(msg, &keys.public, &k, &params).unwrap();
    let plain = decrypt(&ciphertext, &keys.private, &params).unwrap();

    assert_eq!(plain, msg);
}

#[test]
fn ciphertext_bytes_round_trip() {
    let params = CurveParams::sm2();
    let keys = KeyPair::from_private_scalar(scalar(9), &params).unwrap();
    let k = scalar(17);
    let msg = b"round trip payload";

    let ciphertext = encrypt(msg, &keys.public, &k, &params).unwrap();
    let bytes = ciphertext.to_bytes();
    let restored = Ciphertext::from_bytes(&bytes).unwrap();

    assert_eq!(ciphertext, restored);
}

#[test]
fn tampered_c2_fails_integrity_check() {
    let params = CurveParams::sm2();
    let keys = KeyPair::from_private_scalar(scalar(55), &params).unwrap();
    let k = scalar(99);
    let msg = b"do not tamper with this";

    let ciphertext = encrypt(msg, &keys.public, &k, &params).unwrap();
    let mut bytes = ciphertext.to_bytes();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    let tampered = Ciphertext::from_bytes(&bytes).unwrap();

    let err = decrypt(&tampered, &keys.private, &params).unwrap_err();
    assert_eq!(err, sm2::error::Sm2Error::IntegrityFailure);
}

#[test]
fn decrypt_rejects_c1_off_curve() {
    let params = CurveParams::sm2();
    let keys = KeyPair::from_private_scalar(scalar(55), &params).unwrap();
    let k = scalar(99);
    let msg = b"short";

    let ciphertext = encrypt(msg, &keys.public, &k, &params).unwrap();
    let mut bytes = ciphertext.to_bytes();
    bytes[0] ^= 0x01; // corrupt C1's x-coordinate so it no longer satisfies the curve equation
    let tampered = Ciphertext::from_bytes(&bytes).unwrap();

    assert!(decrypt(&tampered, &keys.private, &params).is_err());
}

#[test]
fn decrypt_with_wrong_key_fails() {
    let params = CurveParams::sm2();
    let keys = KeyPair::from_private_scalar(scalar(55), &params).unwrap();
    let wrong_keys = KeyPair::from_private_scalar(scalar(56), &params).unwrap();
    let k = scalar(99);
    let msg = b"confidential";

    let ciphertext = encrypt(msg, &keys.public, &k, &params).unwrap();
    assert!(decrypt(&ciphertext, &wrong_keys.private, &params).is_err());
}
