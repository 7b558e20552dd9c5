//! 512-bit unsigned integer primitive.
//!
//! `BigInt512` only ever holds the product of two
//! [`crate::primitives::BigInt256`] values; it is a landing pad for `mul`,
//! immediately consumed by [`BigInt512::reduce`]. It is never stored
//! long-term and has no arithmetic of its own beyond the bit accessor
//! needed for reduction.

mod core;
mod ops;

pub use self::core::BigInt512;
