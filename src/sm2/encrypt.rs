//! SM2 public-key encryption (GB/T 32918.4), `C1 ‖ C3 ‖ C2` layout.
//!
//! `C1` is the 64-byte ephemeral point `x ‖ y`, deliberately **without**
//! the `0x04` uncompressed-point tag some conforming implementations
//! prepend — this crate's wire format is internally consistent but will
//! not interoperate byte-for-byte with implementations that include it.

use crate::curve::{CurveParams, JacobianPoint};
use crate::error::Sm2Error;
use crate::hash::Sm3;
use crate::kdf::kdf;
use crate::primitives::BigInt256;
use crate::sm2::keypair::{PrivateKey, PublicKey};

/// A parsed `C1 ‖ C3 ‖ C2` ciphertext.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    c1: [u8; 64],
    c3: [u8; 32],
    c2: Vec<u8>,
}

impl Ciphertext {
    /// Concatenates the three fields into the wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(96 + self.c2.len());
        out.extend_from_slice(&self.c1);
        out.extend_from_slice(&self.c3);
        out.extend_from_slice(&self.c2);
        out
    }

    /// Splits raw bytes into `C1 ‖ C3 ‖ C2`.
    ///
    /// Returns [`Sm2Error::InvalidInput`] if `bytes` is shorter than
    /// the fixed 96-byte `C1 ‖ C3` header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Sm2Error> {
        if bytes.len() < 96 {
            return Err(Sm2Error::InvalidInput("ciphertext shorter than C1 || C3"));
        }
        let mut c1 = [0u8; 64];
        c1.copy_from_slice(&bytes[..64]);
        let mut c3 = [0u8; 32];
        c3.copy_from_slice(&bytes[64..96]);
        let c2 = bytes[96..].to_vec();
        Ok(Self { c1, c3, c2 })
    }
}

fn kdf_input(x: &BigInt256, y: &BigInt256) -> [u8; 64] {
    let mut z = [0u8; 64];
    z[..32].copy_from_slice(&x.to_be_bytes());
    z[32..].copy_from_slice(&y.to_be_bytes());
    z
}

/// Encrypts `msg` for `public`, using the caller-supplied nonce `k`.
pub fn encrypt(
    msg: &[u8],
    public: &PublicKey,
    k: &BigInt256,
    params: &CurveParams,
) -> Result<Ciphertext, Sm2Error> {
    let g = JacobianPoint::from_affine(&params.g);
    let (x1, y1) = g
        .scalar_mul(k, params)
        .to_affine(params)
        .coordinates()
        .ok_or(Sm2Error::ProtocolAbort("[k]G is the point at infinity"))?;

    let mut c1 = [0u8; 64];
    c1[..32].copy_from_slice(&x1.to_be_bytes());
    c1[32..].copy_from_slice(&y1.to_be_bytes());

    let kp = JacobianPoint::from_affine(&public.point()).scalar_mul(k, params);
    let (x2, y2) = kp
        .to_affine(params)
        .coordinates()
        .ok_or(Sm2Error::ProtocolAbort("[k]P is the point at infinity"))?;

    let z = kdf_input(&x2, &y2);
    let t = kdf(&z, msg.len());
    if t.iter().all(|&b| b == 0) {
        return Err(Sm2Error::ProtocolAbort("KDF output is all-zero, draw a new k"));
    }

    let c2: Vec<u8> = msg.iter().zip(&t).map(|(m, k)| m ^ k).collect();

    let mut hasher = Sm3::new();
    hasher.update(&z[..32]);
    hasher.update(msg);
    hasher.update(&z[32..]);
    let c3 = hasher.finalize();

    Ok(Ciphertext { c1, c3, c2 })
}

/// Decrypts `ciphertext` with private key `private`.
///
/// Validates that `C1` lies on the curve before using it, rejecting a
/// maliciously crafted ciphertext whose `C1` isn't a valid curve point
/// before it ever reaches the scalar multiplication below.
pub fn decrypt(
    ciphertext: &Ciphertext,
    private: &PrivateKey,
    params: &CurveParams,
) -> Result<Vec<u8>, Sm2Error> {
    use crate::curve::AffinePoint;

    let c1_point = AffinePoint::from_bytes(&ciphertext.c1);
    if !c1_point.is_on_curve(params) {
        return Err(Sm2Error::InvalidInput("C1 is not on the curve"));
    }

    let dc1 = JacobianPoint::from_affine(&c1_point).scalar_mul(&private.scalar(), params);
    let (x2, y2) = dc1
        .to_affine(params)
        .coordinates()
        .ok_or(Sm2Error::ProtocolAbort("[d]C1 is the point at infinity"))?;

    let z = kdf_input(&x2, &y2);
    let t = kdf(&z, ciphertext.c2.len());
    if t.iter().all(|&b| b == 0) {
        return Err(Sm2Error::ProtocolAbort("KDF output is all-zero"));
    }

    let plain: Vec<u8> = ciphertext.c2.iter().zip(&t).map(|(c, k)| c ^ k).collect();

    let mut hasher = Sm3::new();
    hasher.update(&z[..32]);
    hasher.update(&plain);
    hasher.update(&z[32..]);
    let u = hasher.finalize();

    if u != ciphertext.c3 {
        return Err(Sm2Error::IntegrityFailure);
    }

    Ok(plain)
}
