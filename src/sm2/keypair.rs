//! SM2 key types.

use crate::curve::{AffinePoint, CurveParams, JacobianPoint};
use crate::error::Sm2Error;
use crate::primitives::BigInt256;
use crate::rng::Csprng;

/// A private scalar `d` in `[1, n-2]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrivateKey(BigInt256);

impl PrivateKey {
    /// Wraps a raw scalar, checking it lies in `[1, n-2]`.
    ///
    /// `d = n-1` is excluded, not just `d = 0` or `d >= n`: signing
    /// computes `(1+d)^-1 mod n`, and at `d = n-1` that inverts `0`,
    /// silently producing `s = 0` instead of failing. `sign` assumes
    /// the private key it's handed already avoids this case, the same
    /// assumption the reference key generator documents.
    pub fn new(d: BigInt256, params: &CurveParams) -> Result<Self, Sm2Error> {
        let (n_minus_1, _) = params.n.sub(&BigInt256::ONE);
        if d.is_zero() || d.cmp(&n_minus_1) != core::cmp::Ordering::Less {
            return Err(Sm2Error::InvalidInput("private scalar out of range [1, n-2]"));
        }
        Ok(Self(d))
    }

    pub fn scalar(&self) -> BigInt256 {
        self.0
    }

    /// Derives the corresponding public key, `P = d * G`.
    pub fn public_key(&self, params: &CurveParams) -> PublicKey {
        let g = JacobianPoint::from_affine(&params.g);
        let p = g.scalar_mul(&self.0, params);
        PublicKey(p.to_affine(params))
    }
}

/// A public curve point `P`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(AffinePoint);

impl PublicKey {
    pub fn new(point: AffinePoint, params: &CurveParams) -> Result<Self, Sm2Error> {
        if !point.is_on_curve(params) {
            return Err(Sm2Error::InvalidInput("public key point is not on the curve"));
        }
        Ok(Self(point))
    }

    pub fn point(&self) -> AffinePoint {
        self.0
    }
}

/// A matched private/public key pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub private: PrivateKey,
    pub public: PublicKey,
}

impl KeyPair {
    /// Builds a key pair from an explicit private scalar `d`
    /// (`P = d * G` is derived, matching the reference `sm2_keygen`).
    pub fn from_private_scalar(d: BigInt256, params: &CurveParams) -> Result<Self, Sm2Error> {
        let private = PrivateKey::new(d, params)?;
        let public = private.public_key(params);
        Ok(Self { private, public })
    }

    /// Generates a fresh key pair from OS entropy via [`Csprng`].
    pub fn generate(rng: &mut Csprng, params: &CurveParams) -> Self {
        // Sample below n-1, not n, so the draw always lands in the
        // [1, n-2] range PrivateKey::new requires.
        let (n_minus_1, _) = params.n.sub(&BigInt256::ONE);
        let d = rng.random_scalar_below(&n_minus_1);
        Self::from_private_scalar(d, params).expect("rejection-sampled scalar is in range")
    }
}
