use sm2::field::{fp_add, fp_mul, fp_sqr, fp_sub};
use sm2::primitives::BigInt256;

fn be(bytes: &[u8]) -> BigInt256 {
    BigInt256::from_be_slice(bytes)
}

#[test]
fn add_wraps_at_modulus() {
    let p = be(&[97]);
    let a = be(&[90]);
    let b = be(&[10]);
    assert_eq!(fp_add(&a, &b, &p), be(&[3])); // 90 + 10 = 100 = 97 + 3
}

#[test]
fn sub_wraps_below_zero() {
    let p = be(&[97]);
    let a = be(&[3]);
    let b = be(&[10]);
    assert_eq!(fp_sub(&a, &b, &p), be(&[90])); // 3 - 10 = -7 = 97 - 7
}

#[test]
fn mul_reduces_product() {
    let p = be(&[97]);
    let a = be(&[50]);
    let b = be(&[3]);
    assert_eq!(fp_mul(&a, &b, &p), be(&[150 % 97]));
}

#[test]
fn sqr_matches_self_mul() {
    let p = be(&[97]);
    let a = be(&[11]);
    assert_eq!(fp_sqr(&a, &p), fp_mul(&a, &a, &p));
}

#[test]
fn add_sub_are_inverses() {
    let p = be(&[97]);
    let a = be(&[40]);
    let b = be(&[83]);
    let sum = fp_add(&a, &b, &p);
    assert_eq!(fp_sub(&sum, &b, &p), a);
}
