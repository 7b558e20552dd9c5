//! Key derivation function (GB/T 32918.4 §5.4.3).
//!
//! Counter-mode SM3: derives an arbitrary-length keystream by hashing
//! `input ‖ counter` for a 32-bit big-endian counter starting at 1, and
//! concatenating successive digests until enough bytes are produced.

use crate::hash::sm3;

/// Derives `output_len` bytes of keying material from `input`.
///
/// Used by [`crate::sm2::encrypt`] to mask the plaintext and by
/// [`crate::sm2::kex`] to derive the shared session key.
pub fn kdf(input: &[u8], output_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(output_len);
    let mut counter: u32 = 1;

    while out.len() < output_len {
        let mut block_input = Vec::with_capacity(input.len() + 4);
        block_input.extend_from_slice(input);
        block_input.extend_from_slice(&counter.to_be_bytes());

        let digest = sm3(&block_input);
        let remaining = output_len - out.len();
        out.extend_from_slice(&digest[..remaining.min(32)]);

        counter = counter.wrapping_add(1);
    }

    log::trace!("derived {output_len} bytes in {} SM3 blocks", counter - 1);
    out
}
