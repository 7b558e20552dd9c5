//! One-sided SM2 key agreement (GB/T 32918.3).
//!
//! Both parties run the same function with their own and the peer's
//! roles assigned correctly; symmetry of the underlying algebra makes
//! the two resulting keys equal.

use crate::curve::{CurveParams, JacobianPoint};
use crate::error::Sm2Error;
use crate::field::fp_add;
use crate::kdf::kdf;
use crate::primitives::BigInt256;
use crate::sm2::keypair::{KeyPair, PublicKey};
use crate::sm2::za::compute_za;

/// Half the bit length of `n`, minus one — see [`x_bar`].
const W: usize = 127;

/// `x̄(x) = 2^w + (x mod 2^w)`: keep the low 127 bits of `x` and force
/// bit 127 on. This folds an x-coordinate down to a value guaranteed
/// less than `2^128`, per GB/T 32918.3's integer-truncation step.
fn x_bar(x: &BigInt256) -> BigInt256 {
    let mut limbs = *x.limbs();
    for limb in limbs.iter_mut().skip(4) {
        *limb = 0;
    }
    limbs[3] &= 0x7FFF_FFFF;
    limbs[3] |= 0x8000_0000;
    BigInt256::from_limbs(limbs)
}

/// Derives the shared session key.
///
/// `self_static`/`self_ephemeral` are this party's long-term and
/// per-session key pairs; `other_public`/`other_ephemeral_public` are
/// the peer's corresponding public keys. Returns `klen` bytes of keying
/// material, or [`Sm2Error::ProtocolAbort`] if the computed point `U`
/// is the point at infinity (per the protocol, this aborts the
/// exchange rather than silently substituting a default).
#[allow(clippy::too_many_arguments)]
pub fn exchange_key(
    klen: usize,
    self_id: &[u8],
    self_static: &KeyPair,
    self_ephemeral: &KeyPair,
    other_id: &[u8],
    other_public: &PublicKey,
    other_ephemeral_public: &PublicKey,
    params: &CurveParams,
) -> Result<Vec<u8>, Sm2Error> {
    let za = compute_za(self_id, &self_static.public.point(), params)?;
    let zb = compute_za(other_id, &other_public.point(), params)
        .map_err(|_| Sm2Error::InvalidInput("peer identity or public key invalid"))?;

    let (x1, _) = self_ephemeral
        .public
        .point()
        .coordinates()
        .ok_or(Sm2Error::InvalidInput("self ephemeral public key is the point at infinity"))?;
    let (x2, _) = other_ephemeral_public
        .point()
        .coordinates()
        .ok_or(Sm2Error::InvalidInput("peer ephemeral public key is the point at infinity"))?;

    let x1_bar = x_bar(&x1);
    let x2_bar = x_bar(&x2);

    let d = self_static.private.scalar();
    let r_self = self_ephemeral.private.scalar();
    let tmp = x1_bar.mul(&r_self).reduce(&params.n);
    let t = fp_add(&d, &tmp, &params.n);

    // h = 1 for SM2, so U = [t](P' + [x2_bar]R') with no separate
    // cofactor multiplication.
    let other_r = JacobianPoint::from_affine(&other_ephemeral_public.point());
    let scaled_other_r = other_r.scalar_mul(&x2_bar, params);
    let other_p = JacobianPoint::from_affine(&other_public.point());
    let sum = other_p.add(&scaled_other_r, params);
    let u = sum.scalar_mul(&t, params);

    let (xu, yu) = u
        .to_affine(params)
        .coordinates()
        .ok_or(Sm2Error::ProtocolAbort("U is the point at infinity"))?;

    let mut z_input = Vec::with_capacity(128);
    z_input.extend_from_slice(&xu.to_be_bytes());
    z_input.extend_from_slice(&yu.to_be_bytes());
    z_input.extend_from_slice(&za);
    z_input.extend_from_slice(&zb);

    Ok(kdf(&z_input, klen))
}
