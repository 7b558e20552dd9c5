//! Jacobian projective points and curve-group arithmetic.
//!
//! A Jacobian point `(X, Y, Z)` represents the affine point
//! `(X·Z⁻², Y·Z⁻³)`. Working in this coordinate system lets point
//! addition and doubling avoid a field inversion per operation — only
//! the final conversion back to affine needs one.

use crate::curve::affine::AffinePoint;
use crate::curve::params::CurveParams;
use crate::field::{fp_add, fp_mul, fp_sqr, fp_sub};
use crate::primitives::BigInt256;

/// A point on the curve in Jacobian `(X, Y, Z)` coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JacobianPoint {
    x: BigInt256,
    y: BigInt256,
    z: BigInt256,
    infinity: bool,
}

impl JacobianPoint {
    pub const INFINITY: Self = Self {
        x: BigInt256::ZERO,
        y: BigInt256::ZERO,
        z: BigInt256::ZERO,
        infinity: true,
    };

    /// Lifts an affine point into Jacobian coordinates (`Z = 1`).
    pub fn from_affine(p: &AffinePoint) -> Self {
        match p.coordinates() {
            None => Self::INFINITY,
            Some((x, y)) => Self {
                x,
                y,
                z: BigInt256::ONE,
                infinity: false,
            },
        }
    }

    /// Converts back to affine coordinates via a single field inversion
    /// of `Z`: `x = X·Z⁻², y = Y·Z⁻³`.
    pub fn to_affine(&self, params: &CurveParams) -> AffinePoint {
        if self.infinity {
            return AffinePoint::INFINITY;
        }
        let z_inv = self.z.mod_inv(&params.p);
        let z_inv2 = fp_sqr(&z_inv, &params.p);
        let z_inv3 = fp_mul(&z_inv2, &z_inv, &params.p);

        let x = fp_mul(&self.x, &z_inv2, &params.p);
        let y = fp_mul(&self.y, &z_inv3, &params.p);
        AffinePoint::new(x, y)
    }

    /// `2 * self`, the standard Jacobian point-doubling formulas
    /// (generic form — this crate does not take the `a = p - 3`
    /// shortcut some implementations use, matching the reference).
    pub fn double(&self, params: &CurveParams) -> Self {
        if self.infinity {
            return *self;
        }
        let p = &params.p;
        let three = BigInt256::from_u32(3);

        let z2 = fp_sqr(&self.z, p);
        let t1 = fp_sub(&self.x, &z2, p);
        let t2 = fp_add(&self.x, &z2, p);
        let t3 = fp_mul(&t1, &t2, p);
        let m = fp_mul(&t3, &three, p);

        let y2 = fp_sqr(&self.y, p);
        let t1 = fp_mul(&self.x, &y2, p);
        let t1 = fp_add(&t1, &t1, p);
        let s = fp_add(&t1, &t1, p);

        let rx = fp_sqr(&m, p);
        let rx = fp_sub(&rx, &s, p);
        let rx = fp_sub(&rx, &s, p);

        let t3 = fp_sub(&s, &rx, p);
        let ry = fp_mul(&m, &t3, p);

        let t2 = fp_sqr(&y2, p);
        let t2 = fp_add(&t2, &t2, p);
        let t2 = fp_add(&t2, &t2, p);
        let t2 = fp_add(&t2, &t2, p);

        let ry = fp_sub(&ry, &t2, p);

        let rz = fp_mul(&self.y, &self.z, p);
        let rz = fp_add(&rz, &rz, p);

        Self {
            x: rx,
            y: ry,
            z: rz,
            infinity: false,
        }
    }

    /// `self + other`, the standard Jacobian point-addition formulas.
    ///
    /// Falls back to [`Self::double`] when the two points share an
    /// `x`-coordinate and the same sign (`P == Q`), and returns
    /// [`Self::INFINITY`] when they are inverses (`P == -Q`) — the
    /// generic addition formula divides by zero in both cases.
    pub fn add(&self, other: &Self, params: &CurveParams) -> Self {
        if self.infinity {
            return *other;
        }
        if other.infinity {
            return *self;
        }
        let p = &params.p;

        let z2z2 = fp_sqr(&other.z, p);
        let u1 = fp_mul(&self.x, &z2z2, p);

        let z1z1 = fp_sqr(&self.z, p);
        let u2 = fp_mul(&other.x, &z1z1, p);

        let tmp = fp_mul(&other.z, &z2z2, p);
        let s1 = fp_mul(&self.y, &tmp, p);

        let tmp = fp_mul(&self.z, &z1z1, p);
        let s2 = fp_mul(&other.y, &tmp, p);

        let h = fp_sub(&u2, &u1, p);
        let r = fp_sub(&s2, &s1, p);

        if h.is_zero() {
            if r.is_zero() {
                return self.double(params);
            }
            return Self::INFINITY;
        }

        let h2 = fp_sqr(&h, p);
        let h3 = fp_mul(&h2, &h, p);
        let u1h2 = fp_mul(&u1, &h2, p);

        let rx = fp_sqr(&r, p);
        let rx = fp_sub(&rx, &h3, p);
        let rx = fp_sub(&rx, &u1h2, p);
        let rx = fp_sub(&rx, &u1h2, p);

        let tmp = fp_sub(&u1h2, &rx, p);
        let ry = fp_mul(&r, &tmp, p);
        let tmp = fp_mul(&s1, &h3, p);
        let ry = fp_sub(&ry, &tmp, p);

        let rz = fp_mul(&self.z, &other.z, p);
        let rz = fp_mul(&rz, &h, p);

        Self {
            x: rx,
            y: ry,
            z: rz,
            infinity: false,
        }
    }

    /// `k * self`, by left-to-right double-and-add over the 256 bits of
    /// `k`.
    pub fn scalar_mul(&self, k: &BigInt256, params: &CurveParams) -> Self {
        let mut acc = Self::INFINITY;
        let mut addend = *self;

        for i in 0..256 {
            if k.bit(i) == 1 {
                acc = acc.add(&addend, params);
            }
            addend = addend.double(params);
        }

        acc
    }
}
