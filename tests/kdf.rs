use sm2::kdf::kdf;

#[test]
fn output_length_is_exact() {
    let out = kdf(b"shared secret material", 50);
    assert_eq!(out.len(), 50);
}

#[test]
fn deterministic_for_same_input() {
    let a = kdf(b"z", 64);
    let b = kdf(b"z", 64);
    assert_eq!(a, b);
}

#[test]
fn differs_with_input() {
    let a = kdf(b"z1", 32);
    let b = kdf(b"z2", 32);
    assert_ne!(a, b);
}

#[test]
fn short_output_is_prefix_of_long_output() {
    let short = kdf(b"z", 16);
    let long = kdf(b"z", 48);
    assert_eq!(&long[..16], &short[..]);
}

#[test]
fn spans_multiple_sm3_blocks() {
    // Forces more than one 32-byte SM3 digest block to be concatenated.
    let out = kdf(b"z", 70);
    assert_eq!(out.len(), 70);
}
