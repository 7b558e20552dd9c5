//! Cross-checks the in-crate SM3 against the independent `sm3` reference
//! crate.
use sm3::Digest;

fn reference_digest(input: &[u8]) -> [u8; 32] {
    let mut hasher = sm3::Sm3::new();
    hasher.update(input);
    hasher.finalize().into()
}

#[test]
fn agrees_with_reference_on_empty_input() {
    assert_eq!(sm2::hash::sm3(b""), reference_digest(b""));
}

#[test]
fn agrees_with_reference_on_short_input() {
    assert_eq!(sm2::hash::sm3(b"abc"), reference_digest(b"abc"));
}

#[test]
fn agrees_with_reference_across_a_block_boundary() {
    let data = vec![0x5Au8; 130];
    assert_eq!(sm2::hash::sm3(&data), reference_digest(&data));
}
