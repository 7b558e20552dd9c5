//! Fixed-width multi-precision integer primitives.
//!
//! `primitives::u256::BigInt256` and `primitives::u512::BigInt512` are the
//! bottom layer of this crate: every curve and protocol operation in
//! [`crate::field`], [`crate::curve`], and [`crate::sm2`] reduces, sooner or
//! later, to limb-wise arithmetic on one of these two types.
//!
//! The split is deliberate rather than a generic big-integer library: every
//! product of two 256-bit field elements fits exactly in 512 bits, and
//! modular reduction always normalizes back down to 256. There is no need
//! for, and this crate does not provide, variable-width integers.

pub mod u256;
pub mod u512;

pub use u256::BigInt256;
pub use u512::BigInt512;
