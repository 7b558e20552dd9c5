use super::core::BigInt512;
use crate::primitives::u256::BigInt256;
use std::cmp::Ordering;

impl BigInt512 {
    /// `self mod modulus`, by bitwise long division: scan `self` from its
    /// most significant bit, shifting the running remainder left and
    /// appending each dividend bit, subtracting `modulus` whenever the
    /// remainder reaches or exceeds it.
    ///
    /// The shift-in must check for overflow *before* shifting: once the
    /// remainder's top bit is set, shifting it left silently drops that
    /// bit off the 256-bit window, and the remainder is left smaller than
    /// it should be unless `modulus` is subtracted right away — even
    /// though a plain `cmp(modulus) == Less` check on the truncated value
    /// would suggest no subtraction is needed.
    pub fn reduce(&self, modulus: &BigInt256) -> BigInt256 {
        let mut r = BigInt256::ZERO;

        for i in (0..512).rev() {
            let (shifted, overflowed) = r.shl1();
            r = shifted;

            if self.bit(i) == 1 {
                r.limbs[0] |= 1;
            }

            if overflowed == 1 || r.cmp(modulus) != Ordering::Less {
                let (diff, _) = r.sub(modulus);
                r = diff;
            }
        }

        r
    }
}
