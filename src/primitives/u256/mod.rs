//! 256-bit unsigned integer primitive.
//!
//! `BigInt256` stores a value in `[0, 2^256)` as eight 32-bit limbs in
//! little-endian order (`limbs[0]` is least significant). This mirrors the
//! layout of the C reference this crate's SM2 arithmetic is checked
//! against limb-for-limb. All limbs are independent; there is no
//! normalization step and none is ever needed.
//!
//! Conversion to/from the big-endian byte layout used by hashing,
//! signatures, and ciphertext coordinates lives in [`conv`]. Arithmetic
//! (`add`/`sub`/`mul`) lives in [`ops`].

mod conv;
mod core;
mod ops;

pub use self::core::BigInt256;
