use sm2::primitives::BigInt256;

fn be(bytes: &[u8]) -> BigInt256 {
    BigInt256::from_be_slice(bytes)
}

#[test]
fn zero_one_max_consts() {
    assert!(BigInt256::ZERO.is_zero());
    assert_eq!(BigInt256::ONE.to_be_bytes()[31], 1);
    assert_eq!(BigInt256::MAX.to_be_bytes(), [0xFFu8; 32]);
}

#[test]
fn round_trips_through_be_bytes() {
    let bytes: [u8; 32] = core::array::from_fn(|i| i as u8);
    let n = BigInt256::from_be_bytes(&bytes);
    assert_eq!(n.to_be_bytes(), bytes);
}

#[test]
fn cmp_orders_by_most_significant_limb() {
    let a = be(&[0x01, 0x00]);
    let b = be(&[0x00, 0xFF]);
    assert!(a > b);
    assert!(BigInt256::ZERO < BigInt256::ONE);
    assert_eq!(
        BigInt256::ONE.cmp(&BigInt256::ONE),
        core::cmp::Ordering::Equal
    );
}

#[test]
fn add_no_carry() {
    let a = be(&[255]);
    let b = be(&[1]);
    let (sum, carry) = a.add(&b);
    assert_eq!(carry, 0);
    assert_eq!(&sum.to_be_bytes()[30..], &[1, 0]);
}

#[test]
fn add_overflows_with_carry() {
    let (sum, carry) = BigInt256::MAX.add(&BigInt256::ONE);
    assert_eq!(carry, 1);
    assert!(sum.is_zero());
}

#[test]
fn sub_no_borrow() {
    let a = be(&[1, 0]);
    let one = BigInt256::ONE;
    let (diff, borrow) = a.sub(&one);
    assert_eq!(borrow, 0);
    assert_eq!(diff.to_be_bytes()[31], 255);
}

#[test]
fn sub_underflow_sets_borrow() {
    let (_, borrow) = BigInt256::ZERO.sub(&BigInt256::ONE);
    assert_eq!(borrow, 1);
}

#[test]
fn mul_basic() {
    let a = be(&[2]);
    let b = be(&[3]);
    let product = a.mul(&b);
    assert_eq!(product.limbs()[0], 6);
    assert!(product.limbs()[1..].iter().all(|&l| l == 0));
}

#[test]
fn mul_cross_limb_carry_cascade() {
    // (2^32)^4 * (2^32)^3 spills across more than one limb boundary in
    // the outer loop and must keep propagating carry beyond limb i + 8.
    let mut a_limbs = [0u32; 8];
    a_limbs[4] = 1;
    let a = BigInt256::from_limbs(a_limbs);

    let mut b_limbs = [0u32; 8];
    b_limbs[3] = 1;
    let b = BigInt256::from_limbs(b_limbs);

    let product = a.mul(&b);
    assert_eq!(product.limbs()[7], 1);
    assert!(product.limbs()[..7].iter().all(|&l| l == 0));
    assert!(product.limbs()[8..].iter().all(|&l| l == 0));
}

#[test]
fn mul_max_times_two_propagates_fully() {
    let product = BigInt256::MAX.mul(&be(&[2]));
    assert_eq!(product.limbs()[0], 0xFFFF_FFFE);
    for &limb in &product.limbs()[1..8] {
        assert_eq!(limb, 0xFFFF_FFFF);
    }
    assert_eq!(product.limbs()[8], 1);
}

#[test]
fn mod_exp_and_mod_inv_agree() {
    // Small prime modulus so the math is checkable by hand.
    let p = be(&[97]);
    let a = be(&[5]);

    let inv = a.mod_inv(&p);
    let product = a.mul(&inv).reduce(&p);
    assert_eq!(product, BigInt256::ONE);
}

#[test]
fn bit_accessor_matches_be_bytes() {
    let n = be(&[0b0000_0101]);
    assert_eq!(n.bit(0), 1);
    assert_eq!(n.bit(1), 0);
    assert_eq!(n.bit(2), 1);
    assert_eq!(n.bit(300), 0);
}
