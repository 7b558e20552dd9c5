//! SM2 recommended curve parameters (GB/T 32918.5).

use crate::curve::affine::AffinePoint;
use crate::primitives::BigInt256;

/// The coefficients and base point of a short Weierstrass curve
/// `y^2 = x^3 + a*x + b` over `GF(p)`, plus the order `n` of the base
/// point's subgroup.
///
/// Constructed once via [`CurveParams::sm2`] and threaded explicitly
/// through every curve/protocol call rather than held in a lazily
/// initialized global — every operation that needs curve parameters
/// takes `&CurveParams` directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveParams {
    pub p: BigInt256,
    pub a: BigInt256,
    pub b: BigInt256,
    pub n: BigInt256,
    pub g: AffinePoint,
}

impl CurveParams {
    /// The SM2 recommended curve (`sm2p256v1`), cofactor `h = 1`.
    pub const fn sm2() -> Self {
        Self {
            p: BigInt256::from_limbs([
                0xFFFFFFFF, 0xFFFFFFFF, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
                0xFFFFFFFF, 0xFFFFFFFE,
            ]),
            a: BigInt256::from_limbs([
                0xFFFFFFFC, 0xFFFFFFFF, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
                0xFFFFFFFF, 0xFFFFFFFE,
            ]),
            b: BigInt256::from_limbs([
                0x4D940E93, 0xDDBCBD41, 0x15AB8F92, 0xF39789F5, 0xCF6509A7, 0x4D5A9E4B,
                0x9D9F5E34, 0x28E9FA9E,
            ]),
            n: BigInt256::from_limbs([
                0x39D54123, 0x53BBF409, 0x21C6052B, 0x7203DF6B, 0xFFFFFFFF, 0xFFFFFFFF,
                0xFFFFFFFF, 0xFFFFFFFE,
            ]),
            g: AffinePoint::new_const(
                BigInt256::from_limbs([
                    0x334C74C7, 0x715A4589, 0xF2660BE1, 0x8FE30BBF, 0x6A39C994, 0x5F990446,
                    0x1F198119, 0x32C4AE2C,
                ]),
                BigInt256::from_limbs([
                    0x2139F0A0, 0x02DF32E5, 0xC62A4740, 0xD0A9877C, 0x6B692153, 0x59BDCEE3,
                    0xF4F6779C, 0xBC3736A2,
                ]),
            ),
        }
    }
}
