//! SM2 public-key cryptography: signatures, key agreement, and
//! encryption (GB/T 32918, parts 2-4).

mod encrypt;
mod keypair;
mod kex;
mod sign;
mod za;

pub use encrypt::{decrypt, encrypt, Ciphertext};
pub use keypair::{KeyPair, PrivateKey, PublicKey};
pub use kex::exchange_key;
pub use sign::{sign, verify, Signature};
pub use za::compute_za;
