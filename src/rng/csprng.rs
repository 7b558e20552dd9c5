//! ChaCha20-based CSPRNG
//!
//! Cryptographically secure pseudorandom number generator (CSPRNG) built on
//! top of the ChaCha20 block function.
//!
//! - relies on the operating system for initial entropy
//! - uses ChaCha20 as a deterministic random bit generator (DRBG)
//! - avoids heap allocations
//! - provides forward secrecy via periodic rekeying
//!
//! Nonce injection is part of this crate's public contract (spec-mandated:
//! every `sm2::sign`/`encrypt`/`exchange_key` call takes `k` explicitly so
//! test vectors reproduce), so `Csprng` is never invoked implicitly by those
//! functions. It exists purely as a convenience for callers who want a
//! correct default `k` or private scalar without managing entropy
//! themselves — see [`Csprng::random_scalar_below`].

use crate::os::sys_random;
use crate::primitives::u256::BigInt256;
use crate::rng::chacha20::block;

/// Cryptographically secure pseudorandom number generator.
///
/// The generator is initialized from OS-provided entropy and then expands
/// randomness using the ChaCha20 block function. Internally, it maintains
/// a secret key, a nonce, and a block counter.
///
/// After generating output, the generator rekeys itself to ensure forward
/// secrecy: compromise of the internal state does not reveal past outputs.
pub struct Csprng {
    key: [u8; 32],
    nonce: [u8; 12],
    counter: u32,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a new CSPRNG from a user-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable. After being
    /// consumed, the seed buffer is wiped to avoid lingering sensitive data.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills the provided buffer with cryptographically secure random bytes.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut offset = 0;

        while offset < out.len() {
            let keystream = block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            let to_copy = 64.min(out.len() - offset);
            out[offset..offset + to_copy].copy_from_slice(&keystream[..to_copy]);

            offset += to_copy;
        }

        self.rekey();
    }

    /// Draws a uniformly random scalar in `[1, modulus - 1]` by rejection
    /// sampling 32-byte candidates against `modulus`.
    ///
    /// Used to mint a default private key or nonce `k` for `modulus = n`
    /// (the SM2 group order). Never called internally by `sm2::sign`,
    /// `sm2::encrypt`, or `sm2::exchange_key` — those always take `k` from
    /// the caller.
    pub fn random_scalar_below(&mut self, modulus: &BigInt256) -> BigInt256 {
        loop {
            let mut bytes = [0u8; 32];
            self.fill_bytes(&mut bytes);
            let candidate = BigInt256::from_be_bytes(&bytes);

            if candidate != BigInt256::ZERO && candidate.cmp(modulus) == std::cmp::Ordering::Less
            {
                return candidate;
            }
        }
    }

    /// Rekeys the generator to provide forward secrecy.
    fn rekey(&mut self) {
        let fresh = block(&self.key, self.counter, &self.nonce);

        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&fresh[..32]);
    }
}

impl Default for Csprng {
    fn default() -> Self {
        Self::new()
    }
}
