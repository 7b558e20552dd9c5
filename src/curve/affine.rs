//! Affine curve points, the public-facing coordinate system.

use crate::curve::params::CurveParams;
use crate::field::{fp_add, fp_mul, fp_sqr};
use crate::primitives::BigInt256;

/// A point on the curve in affine `(x, y)` coordinates, or the point at
/// infinity (the group identity).
///
/// This is the representation used at the edges of the public API
/// (public keys, signature inputs); internal curve arithmetic works in
/// [`crate::curve::jacobian::JacobianPoint`] and converts back via
/// [`crate::curve::jacobian::JacobianPoint::to_affine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    x: BigInt256,
    y: BigInt256,
    infinity: bool,
}

impl AffinePoint {
    /// The point at infinity.
    pub const INFINITY: Self = Self {
        x: BigInt256::ZERO,
        y: BigInt256::ZERO,
        infinity: true,
    };

    /// Builds a finite point from its coordinates.
    pub const fn new(x: BigInt256, y: BigInt256) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// `const`-context constructor, used for the compiled-in base point.
    pub(crate) const fn new_const(x: BigInt256, y: BigInt256) -> Self {
        Self::new(x, y)
    }

    pub const fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// Returns `(x, y)`, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(BigInt256, BigInt256)> {
        if self.infinity {
            None
        } else {
            Some((self.x, self.y))
        }
    }

    pub fn x(&self) -> BigInt256 {
        self.x
    }

    pub fn y(&self) -> BigInt256 {
        self.y
    }

    /// Serializes as 64 bytes, `x ‖ y` big-endian, with no leading
    /// `0x04` uncompressed-point tag — see [`crate::sm2::encrypt`] for
    /// why this crate omits it.
    ///
    /// Panics if called on the point at infinity: callers are expected
    /// to handle that case (a caller-facing public key) before
    /// serializing.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.x.to_be_bytes());
        out[32..].copy_from_slice(&self.y.to_be_bytes());
        out
    }

    /// Parses 64 bytes as `x ‖ y` big-endian into a finite point. Does
    /// not validate that the point lies on the curve — callers that
    /// need that guarantee (e.g. decryption) must check separately.
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        let x = BigInt256::from_be_bytes(bytes[..32].try_into().unwrap());
        let y = BigInt256::from_be_bytes(bytes[32..].try_into().unwrap());
        Self::new(x, y)
    }

    /// Checks `y^2 = x^3 + a*x + b (mod p)`.
    ///
    /// The point at infinity is never considered on-curve here: callers
    /// validating an untrusted peer point (e.g. `C1` during decryption)
    /// should reject infinity separately before calling this.
    pub fn is_on_curve(&self, params: &CurveParams) -> bool {
        if self.infinity {
            return false;
        }
        let lhs = fp_sqr(&self.y, &params.p);
        let x2 = fp_sqr(&self.x, &params.p);
        let x3 = fp_mul(&x2, &self.x, &params.p);
        let ax = fp_mul(&params.a, &self.x, &params.p);
        let rhs = fp_add(&fp_add(&x3, &ax, &params.p), &params.b, &params.p);
        lhs == rhs
    }
}
