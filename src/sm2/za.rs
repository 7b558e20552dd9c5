//! The `ZA` identity-binding preamble (GB/T 32918.2 §5.5).
//!
//! Signing and verifying hash a fixed preamble ahead of the message so
//! that a signature is bound to the signer's identity and the curve
//! parameters, not just the message bytes:
//!
//! `ZA = SM3(ENTL ‖ ID ‖ a ‖ b ‖ xG ‖ yG ‖ xA ‖ yA)`
//!
//! `ENTL` is the bit length of `ID` as a 16-bit big-endian integer.

use crate::curve::{AffinePoint, CurveParams};
use crate::error::Sm2Error;
use crate::hash::Sm3;

/// Computes `ZA` for `id` and a finite public key `pub_key`.
///
/// Returns [`Sm2Error::InvalidInput`] if `id` is longer than `2^16 - 1`
/// bits (the two-byte `ENTL` field cannot represent it) or if
/// `pub_key` is the point at infinity.
pub fn compute_za(
    id: &[u8],
    pub_key: &AffinePoint,
    params: &CurveParams,
) -> Result<[u8; 32], Sm2Error> {
    let entl_bits = id
        .len()
        .checked_mul(8)
        .filter(|&bits| bits <= u16::MAX as usize)
        .ok_or(Sm2Error::InvalidInput("identity too long for ENTL field"))?;

    let (xa, ya) = pub_key
        .coordinates()
        .ok_or(Sm2Error::InvalidInput("public key is the point at infinity"))?;

    let mut hasher = Sm3::new();
    hasher.update(&(entl_bits as u16).to_be_bytes());
    hasher.update(id);
    hasher.update(&params.a.to_be_bytes());
    hasher.update(&params.b.to_be_bytes());
    hasher.update(&params.g.x().to_be_bytes());
    hasher.update(&params.g.y().to_be_bytes());
    hasher.update(&xa.to_be_bytes());
    hasher.update(&ya.to_be_bytes());

    let za = hasher.finalize();
    log::trace!("computed ZA for {}-byte identity", id.len());
    Ok(za)
}
