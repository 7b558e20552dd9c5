//! Random number generation.
//!
//! Built around a ChaCha20-based deterministic random bit generator (DRBG)
//! seeded from OS entropy ([`crate::os`]). This module backs the
//! convenience key/nonce constructors on [`crate::sm2`]; the core
//! operations (`sign`, `encrypt`, `exchange_key`) always take their
//! nonce `k` from the caller instead.
pub(crate) mod chacha20;
mod csprng;

pub use csprng::Csprng;
