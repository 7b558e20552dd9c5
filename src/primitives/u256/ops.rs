use super::core::BigInt256;
use crate::primitives::u512::BigInt512;

impl BigInt256 {
    /// `r = self + other`, returning the result and the carry out of the
    /// top limb (`1` if the true sum does not fit in 256 bits).
    pub fn add(&self, other: &Self) -> (Self, u32) {
        let mut out = [0u32; 8];
        let mut carry = 0u64;
        for i in 0..8 {
            let sum = self.limbs[i] as u64 + other.limbs[i] as u64 + carry;
            out[i] = sum as u32;
            carry = sum >> 32;
        }
        (Self { limbs: out }, carry as u32)
    }

    /// `r = self - other`, returning the result and the borrow out of the
    /// top limb (`1` if `self < other`, i.e. the true difference is
    /// negative and `r` holds the two's-complement wraparound).
    pub fn sub(&self, other: &Self) -> (Self, u32) {
        let mut out = [0u32; 8];
        let mut borrow = 0i64;
        for i in 0..8 {
            let diff = self.limbs[i] as i64 - other.limbs[i] as i64 - borrow;
            if diff < 0 {
                out[i] = (diff + (1i64 << 32)) as u32;
                borrow = 1;
            } else {
                out[i] = diff as u32;
                borrow = 0;
            }
        }
        (Self { limbs: out }, borrow as u32)
    }

    /// `self * other`, widening to the full 512-bit product.
    ///
    /// Schoolbook (O(n²)) multiplication. The outer loop's carry must be
    /// propagated past limb `i + 8` whenever adding it to an already-full
    /// limb overflows again — stopping after a single limb is a classic
    /// source of silently wrong products for large operands.
    pub fn mul(&self, other: &Self) -> BigInt512 {
        let mut out = [0u32; 16];

        for i in 0..8 {
            let mut carry = 0u64;
            for j in 0..8 {
                let prod = self.limbs[i] as u64 * other.limbs[j] as u64
                    + out[i + j] as u64
                    + carry;
                out[i + j] = prod as u32;
                carry = prod >> 32;
            }

            let mut k = i + 8;
            while carry > 0 && k < 16 {
                let sum = out[k] as u64 + carry;
                out[k] = sum as u32;
                carry = sum >> 32;
                k += 1;
            }
        }

        BigInt512::from_limbs(out)
    }

    /// `self^exp mod modulus`, by square-and-multiply scanning `exp` from
    /// its most significant bit.
    pub fn mod_exp(&self, exp: &Self, modulus: &Self) -> Self {
        let mut r = Self::ONE;
        for i in (0..256).rev() {
            r = r.mul(&r).reduce(modulus);
            if exp.bit(i) == 1 {
                r = r.mul(self).reduce(modulus);
            }
        }
        r
    }

    /// `self^-1 mod modulus`, via Fermat's little theorem
    /// (`self^(modulus - 2) mod modulus`).
    ///
    /// `modulus` must be prime — this is the only modular inverse this
    /// crate needs, the SM2 field/group order, and both are prime, but
    /// the formula is meaningless for a composite modulus.
    pub fn mod_inv(&self, modulus: &Self) -> Self {
        let two = Self::from_u32(2);
        let (modulus_minus_2, _) = modulus.sub(&two);
        self.mod_exp(&modulus_minus_2, modulus)
    }
}
