//! SM3 streaming hash state and the one-shot convenience function.

use super::computations::compress;
use super::constants::IV;

/// Streaming SM3 hasher.
///
/// Accumulates input across any number of [`Sm3::update`] calls,
/// buffering a partial 64-byte block between calls, and produces the
/// final 32-byte digest on [`Sm3::finalize`]. Concurrent `update` calls
/// on the same instance are prevented by ordinary `&mut self` borrowing,
/// not a runtime check.
#[derive(Clone)]
pub struct Sm3 {
    digest: [u32; 8],
    buffer: [u8; 64],
    buffer_len: usize,
    total_bytes: u64,
}

impl Sm3 {
    /// Starts a new hash computation, loading the standard IV.
    pub fn new() -> Self {
        Self {
            digest: IV,
            buffer: [0u8; 64],
            buffer_len: 0,
            total_bytes: 0,
        }
    }

    /// Feeds more input into the hash. May be called any number of
    /// times; `update(a); update(b)` is equivalent to a single
    /// `update(a ‖ b)`.
    pub fn update(&mut self, mut input: &[u8]) {
        self.total_bytes += input.len() as u64;

        if self.buffer_len > 0 {
            let needed = 64 - self.buffer_len;
            if input.len() >= needed {
                self.buffer[self.buffer_len..].copy_from_slice(&input[..needed]);
                let block = self.buffer;
                compress(&mut self.digest, &block);
                input = &input[needed..];
                self.buffer_len = 0;
            }
        }

        while input.len() >= 64 {
            let block: &[u8; 64] = input[..64].try_into().unwrap();
            compress(&mut self.digest, block);
            input = &input[64..];
        }

        if !input.is_empty() {
            self.buffer[self.buffer_len..self.buffer_len + input.len()].copy_from_slice(input);
            self.buffer_len += input.len();
        }
    }

    /// Pads the remaining buffer and produces the 32-byte digest,
    /// consuming the hasher.
    pub fn finalize(mut self) -> [u8; 32] {
        let mut last = self.buffer_len;
        self.buffer[last] = 0x80;
        last += 1;

        if last > 56 {
            self.buffer[last..].fill(0);
            let block = self.buffer;
            compress(&mut self.digest, &block);
            last = 0;
            self.buffer.fill(0);
        } else {
            self.buffer[last..56].fill(0);
        }

        let total_bits = self.total_bytes * 8;
        self.buffer[56..64].copy_from_slice(&total_bits.to_be_bytes());

        let block = self.buffer;
        compress(&mut self.digest, &block);

        let mut out = [0u8; 32];
        for (chunk, word) in out.chunks_exact_mut(4).zip(&self.digest) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl Default for Sm3 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the SM3 digest of `input` in one call.
pub fn sm3(input: &[u8]) -> [u8; 32] {
    let mut hasher = Sm3::new();
    hasher.update(input);
    hasher.finalize()
}
