//! Modular arithmetic over the SM2 prime field.
//!
//! Every operation here reduces modulo an explicit `p` rather than a
//! type-level constant: the curve group, KEX, and signature code all
//! reduce modulo different moduli (`p`, the field prime, and `n`, the
//! group order), so a single set of free functions parameterized by `p`
//! is simpler than two near-identical field types.

use crate::primitives::BigInt256;

/// `(a + b) mod p`.
///
/// Adds directly and subtracts `p` once if the sum carried out of the
/// top limb or still reaches `p` — a single pass suffices because both
/// operands are already reduced below `p`, so the sum is less than `2p`.
pub fn fp_add(a: &BigInt256, b: &BigInt256, p: &BigInt256) -> BigInt256 {
    let (sum, carry) = a.add(b);
    if carry == 1 || sum.cmp(p) != core::cmp::Ordering::Less {
        sum.sub(p).0
    } else {
        sum
    }
}

/// `(a - b) mod p`.
///
/// If `a < b` the plain subtraction borrows and wraps around 2^256;
/// adding `p` back brings it into the correct range.
pub fn fp_sub(a: &BigInt256, b: &BigInt256, p: &BigInt256) -> BigInt256 {
    let (diff, borrow) = a.sub(b);
    if borrow == 1 {
        diff.add(p).0
    } else {
        diff
    }
}

/// `(a * b) mod p`.
pub fn fp_mul(a: &BigInt256, b: &BigInt256, p: &BigInt256) -> BigInt256 {
    a.mul(b).reduce(p)
}

/// `a^2 mod p`.
pub fn fp_sqr(a: &BigInt256, p: &BigInt256) -> BigInt256 {
    fp_mul(a, a, p)
}
