//! SM2 digital signature (GB/T 32918.2).

use crate::curve::{CurveParams, JacobianPoint};
use crate::error::Sm2Error;
use crate::field::{fp_add, fp_sub};
use crate::hash::Sm3;
use crate::primitives::BigInt256;
use crate::sm2::keypair::{PrivateKey, PublicKey};
use crate::sm2::za::compute_za;
use std::cmp::Ordering;

/// A `(r, s)` signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r: BigInt256,
    pub s: BigInt256,
}

impl Signature {
    /// Fixed 64-byte wire layout, `r ‖ s` big-endian. Not DER — DER/
    /// ASN.1 framing is out of scope for this crate.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r.to_be_bytes());
        out[32..].copy_from_slice(&self.s.to_be_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        let r = BigInt256::from_be_bytes(bytes[..32].try_into().unwrap());
        let s = BigInt256::from_be_bytes(bytes[32..].try_into().unwrap());
        Self { r, s }
    }
}

fn hash_message(za: &[u8; 32], msg: &[u8]) -> BigInt256 {
    let mut hasher = Sm3::new();
    hasher.update(za);
    hasher.update(msg);
    BigInt256::from_be_bytes(&hasher.finalize())
}

fn in_range(v: &BigInt256, n: &BigInt256) -> bool {
    !v.is_zero() && v.cmp(n) == Ordering::Less
}

/// Signs `msg` under identity `id` with private key `d`, using the
/// caller-supplied nonce `k`.
///
/// Returns [`Sm2Error::ProtocolAbort`] if `k` yields `r = 0` or
/// `r + k = n` — per GB/T 32918.2 this is a signal to redraw `k` and
/// retry, which this crate leaves to the caller rather than silently
/// looping.
pub fn sign(
    msg: &[u8],
    id: &[u8],
    public: &PublicKey,
    private: &PrivateKey,
    k: &BigInt256,
    params: &CurveParams,
) -> Result<Signature, Sm2Error> {
    if !in_range(k, &params.n) {
        return Err(Sm2Error::InvalidInput("nonce k out of range [1, n-1]"));
    }

    let za = compute_za(id, &public.point(), params)?;
    let e = hash_message(&za, msg);

    let g = JacobianPoint::from_affine(&params.g);
    let (x1, _) = g
        .scalar_mul(k, params)
        .to_affine(params)
        .coordinates()
        .ok_or(Sm2Error::ProtocolAbort("[k]G is the point at infinity"))?;

    let r = fp_add(&e, &x1, &params.n);
    if r.is_zero() {
        return Err(Sm2Error::ProtocolAbort("r = 0, draw a new k"));
    }
    let (r_plus_k, carry) = r.add(k);
    if carry == 1 || r_plus_k == params.n {
        return Err(Sm2Error::ProtocolAbort("r + k = n, draw a new k"));
    }

    let d = private.scalar();
    let one_plus_d = fp_add(&d, &BigInt256::ONE, &params.n);
    let inv = one_plus_d.mod_inv(&params.n);

    let rd = r.mul(&d).reduce(&params.n);
    let k_sub_rd = fp_sub(k, &rd, &params.n);
    let s = inv.mul(&k_sub_rd).reduce(&params.n);

    Ok(Signature { r, s })
}

/// Verifies `sig` against `msg`, `id`, and public key `public`.
pub fn verify(
    sig: &Signature,
    msg: &[u8],
    id: &[u8],
    public: &PublicKey,
    params: &CurveParams,
) -> bool {
    if !in_range(&sig.r, &params.n) || !in_range(&sig.s, &params.n) {
        return false;
    }

    let za = match compute_za(id, &public.point(), params) {
        Ok(za) => za,
        Err(_) => return false,
    };
    let e = hash_message(&za, msg);

    let t = fp_add(&sig.r, &sig.s, &params.n);
    if t.is_zero() {
        return false;
    }

    let g = JacobianPoint::from_affine(&params.g);
    let p = JacobianPoint::from_affine(&public.point());
    let point = g.scalar_mul(&sig.s, params).add(&p.scalar_mul(&t, params), params);

    let (x1, _) = match point.to_affine(params).coordinates() {
        Some(coords) => coords,
        None => return false,
    };

    let computed_r = fp_add(&e, &x1, &params.n);
    let accepted = computed_r == sig.r;
    log::debug!("signature verification {}", if accepted { "accepted" } else { "rejected" });
    accepted
}
